//! Wire types for the inference route and error enums for both services.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

// =============================================================================
// INFERENCE ROUTE
// =============================================================================

/// Body of `POST /api/route`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response of `POST /api/route`. `reply` may be absent or empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: Option<String>,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors produced by the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request never produced a response.
    #[error("chat request failed: {0}")]
    Transport(String),

    /// The route answered with a non-success status.
    #[error("chat response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body was not a `{reply}` object.
    #[error("chat response parse failed: {0}")]
    Decode(String),

    /// No HTTP client outside the browser.
    #[error("chat backend not available on server")]
    Unavailable,
}

/// Errors produced by the comment store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No project id was configured.
    #[error("comment store is not configured")]
    NotConfigured,

    /// The request never produced a response.
    #[error("store request failed: {0}")]
    Transport(String),

    /// The store answered with a non-success status.
    #[error("store response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the document schema.
    #[error("store response parse failed: {0}")]
    Decode(String),

    /// No HTTP client outside the browser.
    #[error("comment store not available on server")]
    Unavailable,
}
