//! Star glyph rendering for ratings and the average score.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

use crate::state::comments::MAX_RATING;

pub const FILLED_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';

/// Number of filled stars for `rating`, clamped to `0..=5`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn filled_count(rating: i64) -> usize {
    rating.clamp(0, i64::from(MAX_RATING)) as usize
}

/// `rating` filled stars followed by `5 - rating` empty ones.
pub fn stars(rating: i64) -> String {
    let filled = filled_count(rating);
    let empty = usize::from(MAX_RATING) - filled;
    std::iter::repeat_n(FILLED_STAR, filled)
        .chain(std::iter::repeat_n(EMPTY_STAR, empty))
        .collect()
}

/// Average rounded to the nearest whole star, as used for display.
#[allow(clippy::cast_possible_truncation)]
pub fn rounded_average(average: f64) -> i64 {
    if average.is_finite() { average.round() as i64 } else { 0 }
}

/// Average rounded to one decimal, ties away from zero (`2.25` -> `2.3`).
pub fn one_decimal(average: f64) -> f64 {
    (average * 10.0).round() / 10.0
}

/// Label for the average score, e.g. `★★★★☆ (3.7)`.
pub fn average_label(average: f64) -> String {
    format!("{} ({:.1})", stars(rounded_average(average)), one_decimal(average))
}
