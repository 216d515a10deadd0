use super::{GenerateContentRequest, GenerateContentResponse};
use crate::core::message::Message;
use crate::utils::url::generate_content_url;
use std::error::Error;
use std::fmt;
use tracing::debug;

#[derive(Debug)]
pub enum CompletionError {
    /// The request never produced a response, or its body was unreadable.
    Http(reqwest::Error),
    /// Non-2xx status, with a one-line summary of the body.
    Api { status: u16, message: String },
    /// 2xx, but no candidate text in the body.
    InvalidResponse,
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::Http(err) => write!(f, "Request failed: {err}"),
            CompletionError::Api { status, message } => {
                write!(f, "API request failed with status {status}: {message}")
            }
            CompletionError::InvalidResponse => write!(f, "Invalid response from the API"),
        }
    }
}

impl Error for CompletionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CompletionError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        CompletionError::Http(err)
    }
}

/// Something that turns a conversation history into the next assistant
/// reply.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, history: &[Message]) -> Result<String, CompletionError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url, model, api_key)
    }

    pub fn with_http_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait::async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, history: &[Message]) -> Result<String, CompletionError> {
        let url = generate_content_url(&self.base_url, &self.model, &self.api_key);
        let body = GenerateContentRequest::from_history(history);
        debug!(model = %self.model, turns = history.len(), "sending generateContent request");

        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            debug!(status = status.as_u16(), "generateContent failed");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: summarize_api_error(&error_text),
            });
        }

        let parsed = response.json::<GenerateContentResponse>().await?;
        parsed
            .first_text()
            .map(str::to_owned)
            .ok_or(CompletionError::InvalidResponse)
    }
}

fn extract_error_summary(value: &serde_json::Value) -> Option<String> {
    let summary = value
        .pointer("/error/message")
        .and_then(|v| v.as_str())
        .or_else(|| value.get("error").and_then(|v| v.as_str()))
        .or_else(|| value.get("message").and_then(|v| v.as_str()))?;

    let collapsed = summary.split_whitespace().collect::<Vec<_>>().join(" ");
    Some(collapsed).filter(|text| !text.is_empty())
}

/// One line describing an error body: the JSON error message when there is
/// one, else the collapsed body text.
pub(super) fn summarize_api_error(error_text: &str) -> String {
    let trimmed = error_text.trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(summary) = extract_error_summary(&value) {
            return summary;
        }
    }
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}
