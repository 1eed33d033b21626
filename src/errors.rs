use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("Failed to access OpenAI API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to parse completion response: {0}")]
    ParseError(String),

    #[error("Failed to access settings store: {0}")]
    StorageError(String),
}

impl From<reqwest::Error> for ScribeError {
    fn from(error: reqwest::Error) -> Self {
        ScribeError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for ScribeError {
    fn from(error: serde_json::Error) -> Self {
        ScribeError::ParseError(error.to_string())
    }
}

// Host storage adapters typically surface anyhow errors
impl From<anyhow::Error> for ScribeError {
    fn from(error: anyhow::Error) -> Self {
        ScribeError::StorageError(error.to_string())
    }
}
