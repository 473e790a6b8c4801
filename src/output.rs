use crate::render;
use crate::request_engine::StateObserver;
use crate::request_engine::state::RequestState;
use crate::transcript::TranscriptRecord;

/// Prints the live region on stdout and the alert region on stderr. The
/// controller invokes this synchronously on every transition.
pub struct ConsoleReporter;

impl StateObserver for ConsoleReporter {
    fn state_changed(&self, state: &RequestState) {
        println!("{}", render::render(state));
        if let RequestState::Error { message } = state {
            eprintln!("{message}");
        }
    }
}

pub fn print_transcripts(records: &[TranscriptRecord]) {
    if records.is_empty() {
        println!("No transcripts recorded yet.");
        return;
    }
    for record in records {
        println!(
            "{} [{}] model={} photons={}",
            record.uuid,
            record.status.as_str(),
            record.model,
            record.photon_count
        );
    }
}
