use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::request_engine::state::RequestState;
use crate::sanitize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptStatus {
    Success,
    Failed,
}

impl TranscriptStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptStatus::Success => "success",
            TranscriptStatus::Failed => "failed",
        }
    }
}

/// Persisted record of one completed exchange attempt. Written by the app
/// layer after the controller settles; the controller itself never persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub uuid: String,
    pub created_at: i64,
    pub model: String,
    pub photon_count: usize,
    pub status: TranscriptStatus,
    pub body: String,
}

impl TranscriptRecord {
    /// Builds a record from a settled state. `Idle` and `Loading` have
    /// nothing to record and yield `None`. The stored body is display text,
    /// never raw markup.
    pub fn from_state(
        state: &RequestState,
        model: impl Into<String>,
        photon_count: usize,
    ) -> Option<Self> {
        let (status, body) = match state {
            RequestState::Success { text } => {
                (TranscriptStatus::Success, sanitize::narrative_to_text(text))
            }
            RequestState::Error { message } => (TranscriptStatus::Failed, message.clone()),
            RequestState::Idle | RequestState::Loading => return None,
        };
        Some(Self {
            uuid: Uuid::new_v4().to_string(),
            created_at: now_unix(),
            model: model.into(),
            photon_count,
            status,
            body,
        })
    }
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_record_only_for_settled_states() {
        assert!(TranscriptRecord::from_state(&RequestState::Idle, "m", 20).is_none());
        assert!(TranscriptRecord::from_state(&RequestState::Loading, "m", 20).is_none());

        let success = TranscriptRecord::from_state(
            &RequestState::Success {
                text: "<p>done</p>".to_string(),
            },
            "gemini-2.5-flash",
            20,
        )
        .unwrap();
        assert_eq!(success.status, TranscriptStatus::Success);
        assert_eq!(success.body, "done");

        let failed = TranscriptRecord::from_state(
            &RequestState::Error {
                message: "Failed to establish quantum link. Error: timeout".to_string(),
            },
            "gemini-2.5-flash",
            20,
        )
        .unwrap();
        assert_eq!(failed.status, TranscriptStatus::Failed);
    }
}
