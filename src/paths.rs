use std::path::{Path, PathBuf};

const BASE_DIR_ENV: &str = "QUANTUM_LINK_DIR";

pub fn base_dir() -> PathBuf {
    if let Ok(value) = std::env::var(BASE_DIR_ENV) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    home_join(".quantum-link").unwrap_or_else(|| PathBuf::from(".quantum-link"))
}

pub fn transcripts_dir() -> PathBuf {
    base_dir().join("transcripts")
}

pub fn ensure_dirs() -> anyhow::Result<()> {
    std::fs::create_dir_all(transcripts_dir())?;
    Ok(())
}

fn home_join(suffix: &str) -> Option<PathBuf> {
    std::env::var("HOME").ok().and_then(|home| {
        let home = home.trim();
        if home.is_empty() {
            None
        } else {
            Some(Path::new(home).join(suffix))
        }
    })
}
