use std::sync::Mutex;

use scribe::ai::CompletionClient;
use scribe::core::Settings;
use scribe::dialog::{PromptDialog, TriggerOutcome};
use scribe::host::NoticeSink;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Notice sink that records every message shown.
#[derive(Default)]
struct RecordingNotices {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotices {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notice lock").clone()
    }
}

impl NoticeSink for RecordingNotices {
    fn show_notice(&self, message: &str) {
        self.messages.lock().expect("notice lock").push(message.to_string());
    }
}

fn test_settings() -> Settings {
    Settings {
        api_key: "sk-test".to_string(),
        organisation_id: "org-test".to_string(),
        default_max_token_length: 50,
    }
}

#[tokio::test]
async fn successful_trigger_delivers_first_choice_and_closes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(header("OpenAI-Organization", "org-test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"choices": [{"text": "hello"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = CompletionClient::with_base_url(server.uri());
    let notices = RecordingNotices::default();
    let mut dialog = PromptDialog::open(test_settings());
    dialog.set_input("say hello");

    let outcome = dialog.trigger(&client, &notices).await;

    assert_eq!(outcome, TriggerOutcome::Completed("hello".to_string()));
    assert!(!dialog.is_open());
    // The only notice shown was the pre-request "running" one
    let messages = notices.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("say hello"));
}

#[tokio::test]
async fn failed_trigger_shows_status_notice_and_stays_open() {
    for status in [401u16, 429, 500] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = CompletionClient::with_base_url(server.uri());
        let notices = RecordingNotices::default();
        let mut dialog = PromptDialog::open(test_settings());
        dialog.set_input("say hello");

        let outcome = dialog.trigger(&client, &notices).await;

        assert!(
            matches!(outcome, TriggerOutcome::Failed(_)),
            "status {status} should fail"
        );
        assert!(dialog.is_open(), "dialog must stay open after {status}");
        // Input is preserved for another attempt
        assert_eq!(dialog.input(), "say hello");

        let messages = notices.messages();
        let error_notice = messages.last().expect("an error notice was shown");
        assert!(error_notice.starts_with("error: "));
        assert!(
            error_notice.contains(&status.to_string()),
            "notice {error_notice:?} should carry the status text"
        );
    }
}

#[tokio::test]
async fn transport_failure_is_surfaced_like_an_http_failure() {
    // Nothing listens here; the connection is refused
    let client = CompletionClient::with_base_url("http://127.0.0.1:9");
    let notices = RecordingNotices::default();
    let mut dialog = PromptDialog::open(test_settings());
    dialog.set_input("say hello");

    let outcome = dialog.trigger(&client, &notices).await;

    assert!(matches!(outcome, TriggerOutcome::Failed(_)));
    assert!(dialog.is_open());
    let messages = notices.messages();
    assert!(messages.last().expect("notice").starts_with("error: "));
}

#[tokio::test]
async fn empty_choices_reply_is_treated_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let client = CompletionClient::with_base_url(server.uri());
    let notices = RecordingNotices::default();
    let mut dialog = PromptDialog::open(test_settings());
    dialog.set_input("say hello");

    let outcome = dialog.trigger(&client, &notices).await;

    assert!(matches!(outcome, TriggerOutcome::Failed(_)));
    assert!(dialog.is_open());
}

#[tokio::test]
async fn empty_prompt_is_sent_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"choices": [{"text": "ok"}]})),
        )
        .mount(&server)
        .await;

    let client = CompletionClient::with_base_url(server.uri());
    let notices = RecordingNotices::default();
    let mut dialog = PromptDialog::open(test_settings());
    // No set_input call; the buffer is empty

    let outcome = dialog.trigger(&client, &notices).await;
    assert_eq!(outcome, TriggerOutcome::Completed("ok".to_string()));

    let requests = server.received_requests().await.expect("recorded");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).expect("json body");
    // Only the fixed suffix remains when the prompt is empty
    assert_eq!(body["prompt"], "in markdown");
}
