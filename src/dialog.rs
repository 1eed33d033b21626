//! Prompt dialog state machine
//!
//! The host renders the actual text area and button; this type holds the
//! dialog's state and drives one completion call per trigger. The outcome is
//! returned as a value so the caller decides how to route it (insert into the
//! document, ignore, etc.) rather than handing us a callback.

use tracing::{info, warn};

use crate::ai::client::CompletionClient;
use crate::core::settings::Settings;
use crate::host::NoticeSink;

/// What a single trigger produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The first completion choice; the dialog has closed.
    Completed(String),
    /// The failure notice that was shown; the dialog stays open for another
    /// attempt.
    Failed(String),
    /// A request is already in flight (or the dialog is closed); nothing was
    /// sent.
    Busy,
}

/// One prompt-entry dialog instance.
#[derive(Debug)]
pub struct PromptDialog {
    settings: Settings,
    input: String,
    open: bool,
    in_flight: bool,
}

impl PromptDialog {
    /// Open a dialog over a snapshot of the current settings.
    #[must_use]
    pub fn open(settings: Settings) -> Self {
        Self {
            settings,
            input: String::new(),
            open: true,
            in_flight: false,
        }
    }

    /// Replace the input buffer with the text area's current contents.
    /// No trimming, no validation.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Host dismiss action; releases the input buffer.
    pub fn close(&mut self) {
        self.open = false;
        self.input.clear();
    }

    /// Send the current input through one completion call.
    ///
    /// On success the dialog closes and the first choice's text is returned.
    /// On any failure a notice is shown and the dialog stays open. A trigger
    /// while a previous one is still unresolved is rejected without issuing a
    /// second request.
    pub async fn trigger(
        &mut self,
        client: &CompletionClient,
        notices: &dyn NoticeSink,
    ) -> TriggerOutcome {
        if !self.open || self.in_flight {
            warn!(
                open = self.open,
                in_flight = self.in_flight,
                "Trigger rejected"
            );
            return TriggerOutcome::Busy;
        }

        self.in_flight = true;
        let result = client.complete(&self.input, &self.settings, notices).await;
        self.in_flight = false;

        match result {
            Ok(response) => match response.first_text() {
                Some(text) => {
                    info!("Completion received, closing dialog");
                    let text = text.to_string();
                    self.close();
                    TriggerOutcome::Completed(text)
                }
                None => {
                    let message = "error: response contained no choices".to_string();
                    notices.show_notice(&message);
                    TriggerOutcome::Failed(message)
                }
            },
            Err(e) => {
                let message = format!("error: {e}");
                notices.show_notice(&message);
                TriggerOutcome::Failed(message)
            }
        }
    }
}
