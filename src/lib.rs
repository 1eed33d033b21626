/// Scribe - an editor-embeddable core that turns a typed prompt into an
/// OpenAI completion and hands the text back for insertion at the cursor.
///
/// The host editor owns the rendered dialog, the settings panel and the
/// document surface; this crate owns the one request/response exchange in
/// between:
/// 1. A prompt dialog that collects the user's text and drives one call
/// 2. A request client that POSTs to the legacy completions endpoint
/// 3. A settings object persisted verbatim through the host's store
///
/// # Architecture
///
/// The system uses:
/// - reqwest for the single HTTP exchange
/// - serde for the wire and settings shapes
/// - async-trait for the host storage seam
/// - Tokio for async execution inside the host's event loop
///
/// # Example
///
/// ```no_run
/// use scribe::ai::CompletionClient;
/// use scribe::core::Settings;
/// use scribe::dialog::{PromptDialog, TriggerOutcome};
/// use scribe::host::{MemoryStore, NoticeSink};
///
/// struct StdoutNotices;
///
/// impl NoticeSink for StdoutNotices {
///     fn show_notice(&self, message: &str) {
///         println!("{message}");
///     }
/// }
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     scribe::setup_logging();
///
///     // A real host injects its persistent key/value store here
///     let mut store = MemoryStore::new();
///     let mut settings = Settings::load(&store).await?;
///     settings.api_key = "sk-your-key".to_string();
///     settings.save(&mut store).await?;
///
///     let client = CompletionClient::new();
///     let mut dialog = PromptDialog::open(settings);
///     dialog.set_input("write a short poem about autumn");
///
///     match dialog.trigger(&client, &StdoutNotices).await {
///         TriggerOutcome::Completed(text) => {
///             // The host would insert this at the cursor
///             println!("{text}");
///         }
///         TriggerOutcome::Failed(_) | TriggerOutcome::Busy => {}
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod dialog;
pub mod errors;
pub mod host;

/// Configure structured logging for the extension.
///
/// Wires a tracing-subscriber fmt layer; hosts that already install a global
/// subscriber should skip this. Call it at most once per process.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
