//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page only frames one widget; the widgets own their behaviour.

pub mod chat;
pub mod comments;
