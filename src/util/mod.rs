//! Utility helpers shared across the widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! `stars` is pure text rendering; `theme` isolates the browser media-query
//! glue so components stay free of `web-sys` calls.

pub mod stars;
pub mod theme;
