use serde::Deserialize;

/// Pulls the human-readable message out of a Gemini error envelope, falling
/// back to the raw body when the payload is not the expected shape.
pub(crate) fn extract_api_error(body: &str) -> String {
    #[derive(Debug, Deserialize)]
    struct GeminiErrorEnvelope {
        error: Option<GeminiError>,
    }
    #[derive(Debug, Deserialize)]
    struct GeminiError {
        message: Option<String>,
        status: Option<String>,
        code: Option<i64>,
    }

    if let Ok(parsed) = serde_json::from_str::<GeminiErrorEnvelope>(body)
        && let Some(err) = parsed.error
    {
        let message = err.message.unwrap_or_else(|| "unknown error".to_string());
        let status = err.status.unwrap_or_else(|| "unknown".to_string());
        let code = err
            .code
            .map(|value| value.to_string())
            .unwrap_or_else(|| "none".to_string());
        return format!("{} (status={}, code={})", message, status, code);
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_structured_gemini_error() {
        let body = r#"{"error":{"message":"API key not valid","status":"INVALID_ARGUMENT","code":400}}"#;
        assert_eq!(
            extract_api_error(body),
            "API key not valid (status=INVALID_ARGUMENT, code=400)"
        );
    }

    #[test]
    fn returns_raw_body_for_unstructured_payload() {
        assert_eq!(extract_api_error("upstream exploded"), "upstream exploded");
    }
}
