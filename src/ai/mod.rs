//! All OpenAI API functionality

pub mod client;

// Re-export main types for convenience
pub use client::{CompletionClient, OPENAI_API_URL};
