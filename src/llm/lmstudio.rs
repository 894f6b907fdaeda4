use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{RemoteRequest, SummaryProvider};
use crate::llm::prompts::{build_user_prompt, SYSTEM_PROMPT};
use crate::RecapError;

const DEFAULT_API_URL: &str = "http://localhost:1234/api/v0/chat/completions";
const DEFAULT_MODEL: &str = "localhost";

pub struct LmStudioClient {
    http: Client,
    api_url: String,
    model: String,
    temperature: f64,
    max_tokens: i64,
    timeout_secs: u64,
}

impl LmStudioClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_url = if settings.llm.api_url.trim().is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            settings.llm.api_url.trim().to_string()
        };

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(Duration::from_secs(settings.llm.timeout_secs))
                .build()
                .context("Failed to build LM Studio HTTP client")?,
            api_url,
            model,
            temperature: settings.llm.temperature,
            max_tokens: settings.llm.max_tokens,
            timeout_secs: settings.llm.timeout_secs,
        })
    }

    fn classify_send_error(&self, err: reqwest::Error) -> RecapError {
        if err.is_timeout() {
            RecapError::ApiTimeout(self.api_url.clone(), self.timeout_secs)
        } else {
            RecapError::ApiConnection(self.api_url.clone())
        }
    }
}

#[async_trait]
impl SummaryProvider for LmStudioClient {
    async fn summarize(&self, request: RemoteRequest<'_>) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_user_prompt(request.language, request.ratio, request.transcript),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stream: false,
        };

        let response = self
            .http
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown error");
            return Err(RecapError::ApiStatus(status.as_u16(), reason.to_string()).into());
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| RecapError::ApiResponse(e.to_string()))?;

        Ok(extract_summary(payload)?)
    }
}

/// First non-empty message content across the returned choices.
fn extract_summary(payload: ChatCompletionResponse) -> std::result::Result<String, RecapError> {
    payload
        .choices
        .into_iter()
        .filter_map(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .find(|content| !content.is_empty())
        .ok_or_else(|| RecapError::ApiResponse("missing message content".to_string()))
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: i64,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_fall_back_to_defaults() {
        let client = LmStudioClient::from_settings(&Settings::default()).unwrap();

        assert_eq!(client.api_url, DEFAULT_API_URL);
        assert_eq!(client.model, DEFAULT_MODEL);
    }

    #[test]
    fn configured_endpoint_wins_over_default() {
        let mut settings = Settings::default();
        settings.llm.api_url = " http://10.0.0.2:1234/api/v0/chat/completions ".to_string();

        let client = LmStudioClient::from_settings(&settings).unwrap();
        assert_eq!(
            client.api_url,
            "http://10.0.0.2:1234/api/v0/chat/completions"
        );
    }

    #[test]
    fn request_serializes_the_wire_shape() {
        let body = ChatCompletionRequest {
            model: "localhost",
            messages: vec![ChatMessage {
                role: "system",
                content: "prompt".to_string(),
            }],
            temperature: 0.3,
            max_tokens: -1,
            stream: false,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "localhost");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["temperature"], 0.3);
        assert_eq!(value["max_tokens"], -1);
        assert_eq!(value["stream"], false);
    }

    #[test]
    fn extracts_first_nonempty_choice() {
        let payload: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"  "}},{"message":{"content":" The summary. "}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_summary(payload).unwrap(), "The summary.");
    }

    #[test]
    fn missing_content_is_a_format_error() {
        let payload: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();

        let err = extract_summary(payload).unwrap_err();
        assert!(err.to_string().contains("Unexpected API response format"));
    }
}
