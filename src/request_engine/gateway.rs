use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

use crate::llm::GeminiClient;

/// Seam between the controller and the external generation call. The real
/// client goes through here, and so do the scripted doubles in tests.
pub trait GenerationGateway: Send + Sync {
    fn generate<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

impl GenerationGateway for GeminiClient {
    fn generate<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.generate(system_prompt, user_prompt)
                .await
                .map_err(anyhow::Error::from)
        })
    }
}
