//! Networking modules for the two external services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat` posts messages to the inference route, `comments` reads and writes
//! the Firestore comment collection using the wire format in `firestore`, and
//! `types` holds the chat schema plus the error enums both clients return.

pub mod chat;
pub mod comments;
pub mod firestore;
pub mod types;
