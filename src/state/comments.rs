//! Comment board model: form fields, fetched records, and the running
//! average rating.
//!
//! DESIGN
//! ======
//! The collection is fetched once on mount. After that the board only learns
//! about its own writes: a successful submit appends the record locally and
//! updates the average incrementally. The incremental average assumes no
//! concurrent writers and is never reconciled with the store.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use super::StateCell;
use crate::net::comments::CommentStore;
use crate::net::types::StoreError;

pub const VALIDATION_MESSAGE: &str = "Name, comment, and a valid rating (1–5) are required.";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Your comment and rating have been submitted successfully!";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit your comment. Please try again.";

/// Highest selectable rating.
pub const MAX_RATING: u8 = 5;

// =============================================================================
// RECORDS
// =============================================================================

/// A star rating in `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// Returns `None` outside `1..=5`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=MAX_RATING).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

/// A stored comment as fetched from the collection.
///
/// `rating` is whatever the store holds; only local writes are range-checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentRecord {
    pub name: String,
    pub comment: String,
    pub rating: i64,
    /// Server-assigned creation time (RFC 3339). Absent on records appended
    /// locally after a submit.
    pub timestamp: Option<String>,
}

/// A validated submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewComment {
    pub name: String,
    pub comment: String,
    pub rating: Rating,
}

impl From<NewComment> for CommentRecord {
    fn from(new: NewComment) -> Self {
        Self { name: new.name, comment: new.comment, rating: i64::from(new.rating.get()), timestamp: None }
    }
}

/// Local validation failure. No write is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name, comment, and a valid rating (1–5) are required.")]
    MissingFields,
}

/// Check the form fields. Blank name/comment or a rating outside `1..=5` fail.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] for any failed check.
pub fn validate(name: &str, comment: &str, rating: u8) -> Result<NewComment, ValidationError> {
    if name.trim().is_empty() || comment.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    let rating = Rating::new(rating).ok_or(ValidationError::MissingFields)?;
    Ok(NewComment { name: name.to_owned(), comment: comment.to_owned(), rating })
}

// =============================================================================
// AVERAGE
// =============================================================================

/// Arithmetic mean of the ratings in `records`, `0.0` when empty.
#[allow(clippy::cast_precision_loss)]
pub fn average_rating(records: &[CommentRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(|r| r.rating as f64).sum();
    total / records.len() as f64
}

/// Fold one more rating into an average over `count` ratings.
#[allow(clippy::cast_precision_loss)]
pub fn next_average(average: f64, count: usize, rating: Rating) -> f64 {
    let count = count as f64;
    (average * count + f64::from(rating.get())) / (count + 1.0)
}

// =============================================================================
// STATE
// =============================================================================

/// Lifecycle of one request kind. Each request runs idle → pending →
/// succeeded/failed and is never retried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// State for the comment board.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentBoardState {
    pub name: String,
    pub comment: String,
    /// Selected star count; `0` means nothing selected.
    pub rating: u8,
    pub error: Option<String>,
    pub success: Option<String>,
    pub comments: Vec<CommentRecord>,
    pub average: f64,
    pub load_status: RequestStatus,
    pub submit_status: RequestStatus,
}

impl CommentBoardState {
    pub fn begin_load(&mut self) {
        self.load_status = RequestStatus::Pending;
    }

    /// Apply the result of the initial fetch. Failures are logged only and
    /// leave an empty list.
    pub fn finish_load(&mut self, outcome: Result<Vec<CommentRecord>, StoreError>) {
        match outcome {
            Ok(records) => {
                self.average = average_rating(&records);
                self.comments = records;
                self.load_status = RequestStatus::Succeeded;
            }
            Err(e) => {
                leptos::logging::error!("Error fetching comments: {e}");
                self.load_status = RequestStatus::Failed;
            }
        }
    }

    /// Validate the form. On failure shows the validation message and
    /// returns `None`; on success marks the submit pending.
    pub fn begin_submit(&mut self) -> Option<NewComment> {
        match validate(&self.name, &self.comment, self.rating) {
            Ok(new) => {
                self.submit_status = RequestStatus::Pending;
                Some(new)
            }
            Err(_) => {
                self.error = Some(VALIDATION_MESSAGE.to_owned());
                self.success = None;
                None
            }
        }
    }

    /// Apply the result of a write for `new`.
    pub fn finish_submit(&mut self, new: NewComment, outcome: Result<(), StoreError>) {
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.comment.clear();
                self.rating = 0;
                self.error = None;
                self.success = Some(SUBMIT_SUCCESS_MESSAGE.to_owned());
                self.average = next_average(self.average, self.comments.len(), new.rating);
                self.comments.push(new.into());
                self.submit_status = RequestStatus::Succeeded;
            }
            Err(e) => {
                leptos::logging::error!("Error saving comment: {e}");
                self.error = Some(SUBMIT_FAILURE_MESSAGE.to_owned());
                self.success = None;
                self.submit_status = RequestStatus::Failed;
            }
        }
    }
}

// =============================================================================
// CYCLES
// =============================================================================

/// Fetch the whole collection into `board`.
pub async fn load_all<S, C>(store: &S, board: &C)
where
    S: CommentStore,
    C: StateCell<CommentBoardState>,
{
    board.with_mut(CommentBoardState::begin_load);
    let outcome = store.list_comments().await;
    board.with_mut(|b| b.finish_load(outcome));
}

/// Validate the form in `board` and, if it passes, write one record.
pub async fn submit<S, C>(store: &S, board: &C)
where
    S: CommentStore,
    C: StateCell<CommentBoardState>,
{
    let Some(Some(new)) = board.with_mut(CommentBoardState::begin_submit) else {
        return;
    };
    let outcome = store.add_comment(&new).await;
    board.with_mut(|b| b.finish_submit(new, outcome));
}
