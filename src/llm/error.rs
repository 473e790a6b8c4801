use thiserror::Error;

/// Single failure taxonomy for the external generation call. The controller
/// does not distinguish between these; they all collapse into `Error` state.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Gemini request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid Gemini endpoint: {0}")]
    Endpoint(String),

    #[error("Gemini API error ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("failed to parse Gemini response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no narrative candidate returned from Gemini")]
    EmptyResponse,
}
