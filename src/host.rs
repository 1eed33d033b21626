//! Trait seams toward the host editor.
//!
//! The host application owns the rendered UI, the document surface and the
//! persistent key/value store; the core reaches them only through these two
//! narrow interfaces plus the outcome value returned by the dialog.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ScribeError;

/// The host's opaque persistent key/value store.
///
/// `load_data` returns `None` when nothing has been stored yet; `save_data`
/// overwrites the stored value wholesale.
#[async_trait]
pub trait SettingsStore {
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    async fn load_data(&self) -> Result<Option<Value>, ScribeError>;

    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be written.
    async fn save_data(&mut self, data: Value) -> Result<(), ScribeError>;
}

/// The host's transient notice primitive (a toast, status-bar flash, etc.).
pub trait NoticeSink {
    fn show_notice(&self, message: &str);
}

/// In-process [`SettingsStore`] for hosts without persistence and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Option<Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn load_data(&self) -> Result<Option<Value>, ScribeError> {
        Ok(self.data.clone())
    }

    async fn save_data(&mut self, data: Value) -> Result<(), ScribeError> {
        self.data = Some(data);
        Ok(())
    }
}

/// [`NoticeSink`] that drops every notice, for headless hosts.
#[derive(Debug, Default)]
pub struct NullNotices;

impl NoticeSink for NullNotices {
    fn show_notice(&self, _message: &str) {}
}
