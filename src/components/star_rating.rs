//! Star widgets: a clickable picker for the form and a read-only display.

use leptos::prelude::*;

use crate::state::comments::MAX_RATING;
use crate::util::stars::{FILLED_STAR, stars};

/// Five clickable stars. Stars up to `value` are highlighted; clicking star
/// `n` reports `n`.
#[component]
pub fn StarPicker(#[prop(into)] value: Signal<u8>, on_select: Callback<u8>) -> impl IntoView {
    view! {
        <div class="star-picker" role="radiogroup" aria-label="Rating">
            {(1..=MAX_RATING)
                .map(|star| {
                    view! {
                        <span
                            class="star-picker__star"
                            class:star-picker__star--active=move || star <= value.get()
                            role="radio"
                            aria-checked=move || (star == value.get()).to_string()
                            on:click=move |_| on_select.run(star)
                        >
                            {FILLED_STAR.to_string()}
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Filled and empty stars for a stored rating.
#[component]
pub fn StarDisplay(rating: i64) -> impl IntoView {
    view! { <span class="star-display">{stars(rating)}</span> }
}
