use anyhow::Error;

pub const ERROR_MESSAGE_PREFIX: &str = "Failed to establish quantum link. Error: ";
pub const UNKNOWN_ERROR_CAUSE: &str = "An unknown error occurred.";
pub const CANCELLED_CAUSE: &str = "request cancelled before completion";

/// Lifecycle of the current exchange attempt. Exactly one value is active at
/// a time and only the controller mutates it. Valid transitions:
/// `Idle→Loading`, `Loading→Success`, `Loading→Error`, and
/// `Success|Error→Loading` on re-trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Success { text: String },
    Error { message: String },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success { .. } => "success",
            RequestState::Error { .. } => "error",
        }
    }
}

pub fn format_error_message(err: &Error) -> String {
    let cause = err.to_string();
    if cause.trim().is_empty() {
        format!("{ERROR_MESSAGE_PREFIX}{UNKNOWN_ERROR_CAUSE}")
    } else {
        format!("{ERROR_MESSAGE_PREFIX}{cause}")
    }
}
