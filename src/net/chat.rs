//! Client for the inference route.
//!
//! Client-side (hydrate): one `POST` per message via `gloo-net`.
//! Server-side (SSR): a stub returning [`ChatError::Unavailable`], since the
//! route is only called from browser event handlers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::types::{ChatError, ChatResponse};
#[cfg(feature = "hydrate")]
use super::types::ChatRequest;

/// Anything that can answer one chat message.
#[allow(async_fn_in_trait)]
pub trait ChatBackend {
    /// Send `message` and return the decoded response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn send_message(&self, message: &str) -> Result<ChatResponse, ChatError>;
}

/// [`ChatBackend`] that posts `{message}` as JSON to a fixed endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpChatBackend {
    endpoint: String,
}

impl HttpChatBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl ChatBackend for HttpChatBackend {
    async fn send_message(&self, message: &str) -> Result<ChatResponse, ChatError> {
        #[cfg(feature = "hydrate")]
        {
            let body = ChatRequest { message: message.to_owned() };
            log::debug!("chat: POST {}", self.endpoint);
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&body)
                .map_err(|e| ChatError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ChatError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp
                .text()
                .await
                .map_err(|e| ChatError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ChatError::Status { status, body: text });
            }
            parse_chat_response(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.endpoint, message);
            Err(ChatError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_chat_response(text: &str) -> Result<ChatResponse, ChatError> {
    serde_json::from_str(text).map_err(|e| ChatError::Decode(e.to_string()))
}
