//! Core data types: persisted settings and completion wire structs

pub mod models;
pub mod settings;

// Re-export main types for convenience
pub use models::{COMPLETIONS_MODEL, CompletionRequest, CompletionResponse, PROMPT_SUFFIX};
pub use settings::Settings;
