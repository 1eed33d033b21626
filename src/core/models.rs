use serde::{Deserialize, Serialize};

/// Legacy completions model the extension is pinned to.
pub const COMPLETIONS_MODEL: &str = "text-davinci-003";

/// Literal suffix appended to every prompt so the reply comes back as
/// markdown. Note the missing separator; the wire format predates this crate
/// and is kept byte-identical.
pub const PROMPT_SUFFIX: &str = "in markdown";

/// Request body for one `/v1/completions` call. Built fresh per invocation,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Build the request body from the user's prompt text and the configured
    /// token limit. Pure function of its inputs: identical arguments always
    /// produce an identical body.
    #[must_use]
    pub fn new(prompt_text: &str, max_tokens: u32) -> Self {
        Self {
            prompt: format!("{prompt_text}{PROMPT_SUFFIX}"),
            model: COMPLETIONS_MODEL,
            temperature: 0.0,
            max_tokens,
        }
    }
}

/// Parsed reply body. Only `choices[0].text` is ever consumed; everything
/// else the API sends is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub text: String,
}

impl CompletionResponse {
    /// Text of the first completion choice, if the API returned any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.text.as_str())
    }
}
