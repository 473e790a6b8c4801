use anyhow::{Context, Result};
use std::fs;

use super::record::TranscriptRecord;
use crate::paths;

pub fn save_transcript(record: &TranscriptRecord) -> Result<()> {
    fs::create_dir_all(paths::transcripts_dir())?;
    let path = paths::transcripts_dir().join(format!("{}.json", record.uuid));
    let content = serde_json::to_string_pretty(record)?;
    fs::write(&path, content)
        .with_context(|| format!("failed to write transcript file: {}", path.display()))?;
    Ok(())
}

/// Most recent transcripts first. Unreadable or malformed files are skipped.
pub fn list_recent(limit: usize) -> Result<Vec<TranscriptRecord>> {
    let dir = paths::transcripts_dir();
    if !dir.exists() || limit == 0 {
        return Ok(Vec::new());
    }
    let mut records = Vec::new();
    for entry in fs::read_dir(&dir)
        .with_context(|| format!("failed to read transcripts dir: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        if let Ok(record) = serde_json::from_str::<TranscriptRecord>(&content) {
            records.push(record);
        }
    }
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records.truncate(limit);
    Ok(records)
}
