use std::io::Cursor;

const WRAP_WIDTH: usize = 80;

/// Converts the service's untrusted markup into plain terminal text. The
/// payload is never echoed raw: tags are resolved through an HTML-to-text
/// pass and control characters that could smuggle terminal escape sequences
/// are stripped afterwards.
pub fn narrative_to_text(markup: &str) -> String {
    let cursor = Cursor::new(markup.as_bytes());
    let text = html2text::from_read(cursor, WRAP_WIDTH)
        .unwrap_or_else(|_| markup.to_string());
    scrub_control_chars(&text).trim_end().to_string()
}

fn scrub_control_chars(text: &str) -> String {
    text.chars()
        .filter(|ch| !ch.is_control() || matches!(ch, '\n' | '\t'))
        .collect()
}
