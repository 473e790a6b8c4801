use anyhow::{Context, Result};
use tera::{Context as TeraContext, Tera};

pub const DEFAULT_PHOTON_COUNT: usize = 20;

/// Parameters of the narrated exchange. The prompt is a pure function of
/// these; rendering twice with equal parameters yields identical text.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub photon_count: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            photon_count: DEFAULT_PHOTON_COUNT,
        }
    }
}

pub struct RenderedPrompt {
    pub system: String,
    pub user: String,
}

const SYSTEM_PROMPT_TEMPLATE: &str = include_str!("prompts/system_prompt.tera");
const USER_PROMPT_TEMPLATE: &str = include_str!("prompts/user_prompt.tera");

pub fn render(params: &SimulationParams) -> Result<RenderedPrompt> {
    let mut context = TeraContext::new();
    context.insert("photon_count", &params.photon_count);

    let system = Tera::one_off(SYSTEM_PROMPT_TEMPLATE, &context, false)
        .with_context(|| "failed to render system prompt")?;
    let user = Tera::one_off(USER_PROMPT_TEMPLATE, &context, false)
        .with_context(|| "failed to render user prompt")?;

    Ok(RenderedPrompt { system, user })
}
