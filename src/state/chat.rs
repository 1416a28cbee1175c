//! Chat relay transcript and send cycle.
//!
//! The transcript lives only in memory for the page session. Each send
//! appends the user entry, issues one request, and appends exactly one
//! assistant entry whatever the outcome. There is no retry, timeout, or
//! cancellation, so concurrent sends append replies in completion order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::StateCell;
use crate::net::chat::ChatBackend;
use crate::net::types::{ChatError, ChatResponse};

/// Assistant text when the route answered without a reply.
pub const NO_RESPONSE_TEXT: &str = "Tidak ada respon.";
/// Assistant text when the request failed in any way.
pub const FAILURE_TEXT: &str = "Terjadi kesalahan saat menghubungi AI.";

/// Who wrote a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { sender: Sender::Assistant, text: text.into() }
    }
}

/// State for the chat panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl ChatState {
    /// Record an outgoing message. Returns the text to send, or `None` for
    /// blank input (nothing is recorded).
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        self.loading = true;
        Some(text.to_owned())
    }

    /// Append the assistant entry for a finished request and clear the
    /// pending indicator.
    pub fn receive(&mut self, outcome: Result<ChatResponse, ChatError>) {
        let text = match outcome {
            Ok(resp) => resp
                .reply
                .filter(|reply| !reply.is_empty())
                .unwrap_or_else(|| NO_RESPONSE_TEXT.to_owned()),
            Err(e) => {
                leptos::logging::error!("chat request failed: {e}");
                FAILURE_TEXT.to_owned()
            }
        };
        self.messages.push(ChatMessage::assistant(text));
        self.loading = false;
    }
}

/// Run one send cycle: record `text`, ask `backend`, record the answer.
pub async fn send<B, C>(backend: &B, chat: &C, text: &str)
where
    B: ChatBackend,
    C: StateCell<ChatState>,
{
    let Some(Some(message)) = chat.with_mut(|c| c.begin_send(text)) else {
        return;
    };
    let outcome = backend.send_message(&message).await;
    chat.with_mut(|c| c.receive(outcome));
}
