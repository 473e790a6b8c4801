mod api_error;
mod error;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use api_error::extract_api_error;
pub use error::ServiceError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Thin client for one `generateContent` call. The credential is injected at
/// construction and read from nowhere else. No retries; every failure is
/// surfaced immediately as a `ServiceError`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ServiceError> {
        let base = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model_path = if self.model.starts_with("models/") {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        };
        let endpoint = format!(
            "{}/{}:generateContent",
            base.trim_end_matches('/'),
            model_path
        );
        let mut url = reqwest::Url::parse(&endpoint)
            .map_err(|err| ServiceError::Endpoint(err.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let body = json!({
            "system_instruction": {
                "parts": [
                    {"text": system_prompt}
                ]
            },
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {"text": user_prompt}
                    ]
                }
            ],
            "generationConfig": {
                "temperature": 0.7
            }
        });

        debug!(model = %self.model, "sending generateContent request");
        let response = self.http.post(url).json(&body).send().await?;
        let status = response.status();
        let payload = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ServiceError::Rejected {
                status: status.as_u16(),
                detail: extract_api_error(&payload),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&payload)?;
        parsed
            .candidates
            .first()
            .and_then(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .find_map(|part| part.text.as_deref())
            })
            .map(str::to_string)
            .ok_or(ServiceError::EmptyResponse)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
