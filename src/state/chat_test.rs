use std::cell::RefCell;
use std::time::Duration;

use super::*;

/// Backend that answers from a fixed script and counts calls.
struct ScriptedBackend {
    outcome: Result<ChatResponse, ChatError>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedBackend {
    fn replying(reply: &str) -> Self {
        Self { outcome: Ok(ChatResponse { reply: Some(reply.to_owned()) }), calls: RefCell::new(Vec::new()) }
    }

    fn failing(err: ChatError) -> Self {
        Self { outcome: Err(err), calls: RefCell::new(Vec::new()) }
    }
}

impl ChatBackend for ScriptedBackend {
    async fn send_message(&self, message: &str) -> Result<ChatResponse, ChatError> {
        self.calls.borrow_mut().push(message.to_owned());
        self.outcome.clone()
    }
}

/// Backend whose reply to each message arrives after a per-message delay.
struct DelayedEcho;

impl ChatBackend for DelayedEcho {
    async fn send_message(&self, message: &str) -> Result<ChatResponse, ChatError> {
        let delay = if message == "first" { 30 } else { 1 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(ChatResponse { reply: Some(format!("re: {message}")) })
    }
}

// =============================================================
// ChatState
// =============================================================

#[test]
fn chat_state_default_is_empty_and_idle() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[test]
fn begin_send_ignores_blank_input() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send(""), None);
    assert_eq!(state.begin_send("  \n\t "), None);
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[test]
fn begin_send_records_untrimmed_text_and_sets_loading() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send(" hello "), Some(" hello ".to_owned()));
    assert_eq!(state.messages, vec![ChatMessage::user(" hello ")]);
    assert!(state.loading);
}

#[test]
fn receive_uses_no_response_text_for_missing_or_empty_reply() {
    let mut state = ChatState { loading: true, ..ChatState::default() };
    state.receive(Ok(ChatResponse { reply: None }));
    state.receive(Ok(ChatResponse { reply: Some(String::new()) }));
    assert_eq!(
        state.messages,
        vec![ChatMessage::assistant(NO_RESPONSE_TEXT), ChatMessage::assistant(NO_RESPONSE_TEXT)]
    );
    assert!(!state.loading);
}

#[test]
fn receive_maps_every_error_to_failure_text() {
    let errors = [
        ChatError::Transport("offline".to_owned()),
        ChatError::Status { status: 500, body: "boom".to_owned() },
        ChatError::Decode("expected value".to_owned()),
        ChatError::Unavailable,
    ];
    for err in errors {
        let mut state = ChatState { loading: true, ..ChatState::default() };
        state.receive(Err(err));
        assert_eq!(state.messages, vec![ChatMessage::assistant(FAILURE_TEXT)]);
        assert!(!state.loading);
    }
}

#[test]
fn sender_serializes_snake_case() {
    let json = serde_json::to_value(ChatMessage::assistant("hi")).unwrap();
    assert_eq!(json, serde_json::json!({ "sender": "assistant", "text": "hi" }));
}

// =============================================================
// send cycle
// =============================================================

#[tokio::test]
async fn send_appends_user_message_and_reply() {
    let backend = ScriptedBackend::replying("hi");
    let chat = RefCell::new(ChatState::default());

    send(&backend, &chat, "hello").await;

    let state = chat.into_inner();
    assert_eq!(state.messages, vec![ChatMessage::user("hello"), ChatMessage::assistant("hi")]);
    assert!(!state.loading);
    assert_eq!(*backend.calls.borrow(), vec!["hello".to_owned()]);
}

#[tokio::test]
async fn send_appends_failure_text_on_network_error() {
    let backend = ScriptedBackend::failing(ChatError::Transport("connection refused".to_owned()));
    let chat = RefCell::new(ChatState::default());

    send(&backend, &chat, "hello").await;

    assert_eq!(
        chat.into_inner().messages,
        vec![ChatMessage::user("hello"), ChatMessage::assistant(FAILURE_TEXT)]
    );
}

#[tokio::test]
async fn send_blank_input_makes_no_request() {
    let backend = ScriptedBackend::replying("hi");
    let chat = RefCell::new(ChatState::default());

    send(&backend, &chat, "   ").await;

    assert!(chat.into_inner().messages.is_empty());
    assert!(backend.calls.borrow().is_empty());
}

#[tokio::test]
async fn concurrent_sends_append_replies_in_completion_order() {
    let chat = RefCell::new(ChatState::default());

    tokio::join!(send(&DelayedEcho, &chat, "first"), send(&DelayedEcho, &chat, "second"));

    let state = chat.into_inner();
    assert_eq!(
        state.messages,
        vec![
            ChatMessage::user("first"),
            ChatMessage::user("second"),
            ChatMessage::assistant("re: second"),
            ChatMessage::assistant("re: first"),
        ]
    );
    assert!(!state.loading);
}
