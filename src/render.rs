use crate::request_engine::state::RequestState;
use crate::sanitize;

pub const IDLE_FRAGMENT: &str =
    "Simulation log will appear here... The quantum realm awaits your command.";
pub const LOADING_FRAGMENT: &str = "Transmitting photons...";
pub const FAILURE_FRAGMENT: &str =
    "Connection to the quantum realm failed. Please try again.";

/// Pure mapping from request state to the displayed fragment. Precedence:
/// a loading indicator overrides any stale content, a failure shows the
/// fixed fragment (the raw message goes to the alert region, not here), and
/// a success shows the sanitized narrative.
pub fn render(state: &RequestState) -> String {
    match state {
        RequestState::Loading => LOADING_FRAGMENT.to_string(),
        RequestState::Error { .. } => FAILURE_FRAGMENT.to_string(),
        RequestState::Success { text } => sanitize::narrative_to_text(text),
        RequestState::Idle => IDLE_FRAGMENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_renders_fixed_placeholder_on_repeated_reads() {
        assert_eq!(render(&RequestState::Idle), IDLE_FRAGMENT);
        assert_eq!(render(&RequestState::Idle), IDLE_FRAGMENT);
    }

    #[test]
    fn loading_renders_progress_indicator() {
        assert_eq!(render(&RequestState::Loading), LOADING_FRAGMENT);
    }

    #[test]
    fn error_renders_fixed_failure_fragment_not_raw_message() {
        let state = RequestState::Error {
            message: "Failed to establish quantum link. Error: timeout".to_string(),
        };
        assert_eq!(render(&state), FAILURE_FRAGMENT);
    }

    #[test]
    fn success_renders_sanitized_narrative() {
        let state = RequestState::Success {
            text: "<p>Key established</p>".to_string(),
        };
        assert_eq!(render(&state), "Key established");
    }
}
