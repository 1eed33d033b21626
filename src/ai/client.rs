//! OpenAI completions API client
//!
//! One HTTP POST per invocation; no retries, no streaming, no timeout.

use reqwest::Client;
use tracing::{debug, info};

use crate::core::models::{CompletionRequest, CompletionResponse};
use crate::core::settings::Settings;
use crate::errors::ScribeError;
use crate::host::NoticeSink;

/// Production endpoint root.
pub const OPENAI_API_URL: &str = "https://api.openai.com";

/// Client for the legacy `/v1/completions` endpoint.
pub struct CompletionClient {
    http: Client,
    base_url: String,
}

impl Default for CompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(OPENAI_API_URL)
    }

    /// Client pointed at an alternate endpoint root. Used by the test suite
    /// to stand up a local mock server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform exactly one completion exchange for `prompt_text`.
    ///
    /// A transient "running" notice is shown before the network call. The
    /// credentials and the token limit are taken from `settings` as-is; an
    /// empty key or organisation id is sent verbatim and fails at the remote
    /// end.
    ///
    /// # Errors
    ///
    /// Returns `ScribeError::ApiError` carrying the status text on a non-2xx
    /// reply, `ScribeError::HttpError` on transport failures, and
    /// `ScribeError::ParseError` if the reply body is not the expected JSON.
    pub async fn complete(
        &self,
        prompt_text: &str,
        settings: &Settings,
        notices: &dyn NoticeSink,
    ) -> Result<CompletionResponse, ScribeError> {
        notices.show_notice(&format!("Running prompt: {prompt_text}"));

        let body = CompletionRequest::new(prompt_text, settings.default_max_token_length);
        info!(max_tokens = body.max_tokens, "Sending completion request");

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", settings.api_key)
            .parse()
            .map_err(|e| ScribeError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| ScribeError::HttpError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        let org_value = settings.organisation_id.parse().map_err(|e| {
            ScribeError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
        })?;
        headers.insert("OpenAI-Organization", org_value);

        let response = self
            .http
            .post(format!(
                "{}/v1/completions",
                self.base_url.trim_end_matches('/')
            ))
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| ScribeError::HttpError(format!("Completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScribeError::ApiError(status.to_string()));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ScribeError::ParseError(format!("Unexpected response body: {e}")))?;

        debug!(choices = parsed.choices.len(), "Completion response parsed");
        Ok(parsed)
    }
}
