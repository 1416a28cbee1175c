//! Client-side widget state.
//!
//! DESIGN
//! ======
//! State is split by widget (`chat`, `comments`) plus shared `ui` theme state.
//! Each model is a plain struct; components hold it in an `RwSignal` provided
//! via context. The async request cycles mutate it only through
//! [`StateCell`], so the same cycle runs against a signal in the browser and a
//! `RefCell` in tests.

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

pub mod chat;
pub mod comments;
pub mod ui;

/// Shared, mutable access to a state value.
pub trait StateCell<T> {
    /// Run `f` against the current value. Returns `None` if the value is gone
    /// (for example a signal disposed with its component).
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
