//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the two widgets while reading/writing their state and
//! service clients from Leptos context providers.

pub mod chat_panel;
pub mod comment_board;
pub mod star_rating;
