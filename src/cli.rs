use clap::Parser;

use crate::llm::DEFAULT_MODEL;
use crate::prompt::DEFAULT_PHOTON_COUNT;

#[derive(Debug, Parser)]
#[command(
    name = "quantum-link",
    version,
    about = "AI-narrated quantum key distribution simulator"
)]
pub struct Cli {
    /// Gemini model used for the narration
    #[arg(short = 'm', long = "model", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// API key (overrides GEMINI_API_KEY / GOOGLE_API_KEY)
    #[arg(short = 'k', long = "key")]
    pub key: Option<String>,

    /// Run a single key exchange and exit
    #[arg(long = "once")]
    pub once: bool,

    /// Number of photons Alice transmits in the narrated exchange
    #[arg(long = "photons", default_value_t = DEFAULT_PHOTON_COUNT)]
    pub photons: usize,

    /// List recent simulation transcripts and exit
    #[arg(long = "show-transcripts")]
    pub show_transcripts: bool,

    /// Number of transcripts listed by --show-transcripts
    #[arg(long = "transcript-lines", default_value_t = 10)]
    pub transcript_lines: usize,
}
