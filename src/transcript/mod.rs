mod record;
mod store;

pub use record::{TranscriptRecord, TranscriptStatus};
pub use store::{list_recent, save_transcript};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request_engine::state::RequestState;

    #[test]
    fn saves_and_lists_transcripts() {
        let dir = tempfile::tempdir().unwrap();
        // SAFETY: this is the only test mutating QUANTUM_LINK_DIR.
        unsafe {
            std::env::set_var("QUANTUM_LINK_DIR", dir.path());
        }

        let record = TranscriptRecord::from_state(
            &RequestState::Success {
                text: "<p>Key established</p>".to_string(),
            },
            "gemini-2.5-flash",
            20,
        )
        .unwrap();
        save_transcript(&record).unwrap();

        let listed = list_recent(10).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].uuid, record.uuid);
        assert_eq!(listed[0].status, TranscriptStatus::Success);
        assert_eq!(listed[0].body, "Key established");

        unsafe {
            std::env::remove_var("QUANTUM_LINK_DIR");
        }
    }
}
