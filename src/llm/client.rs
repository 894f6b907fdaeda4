use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::lmstudio::LmStudioClient;
use crate::nlp::Language;

/// Remote summary request payload.
pub struct RemoteRequest<'a> {
    pub transcript: &'a str,
    pub language: Language,
    pub ratio: f64,
}

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize(&self, request: RemoteRequest<'_>) -> Result<String>;
}

/// Build a remote summary provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn SummaryProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "lmstudio" => Ok(Box::new(LmStudioClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: lmstudio",
            other
        ),
    }
}
