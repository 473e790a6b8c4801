use anyhow::{Result, anyhow};
use std::sync::Arc;

use crate::cli::Cli;
use crate::llm::GeminiClient;
use crate::output::ConsoleReporter;
use crate::prompt::SimulationParams;
use crate::request_engine::ExchangeController;

/// Resolves the credential once at startup and wires the controller. The key
/// is passed into the client at construction; nothing reads it ambiently
/// afterwards.
pub fn bootstrap(cli: &Cli) -> Result<Arc<ExchangeController>> {
    let api_key = resolve_api_key(cli.key.as_deref())?;
    let client = GeminiClient::new(api_key, cli.model.clone());
    let params = SimulationParams {
        photon_count: cli.photons.max(1),
    };

    let controller = Arc::new(ExchangeController::new(Arc::new(client), params));
    controller.subscribe(Box::new(ConsoleReporter));
    Ok(controller)
}

pub fn resolve_api_key(override_key: Option<&str>) -> Result<String> {
    if let Some(key) = override_key {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    get_env("GEMINI_API_KEY")
        .or_else(|| get_env("GOOGLE_API_KEY"))
        .ok_or_else(|| anyhow!("API key not found; set GEMINI_API_KEY or pass --key"))
}

fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
