//! Comment/rating form with the average score and the list of prior entries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The collection is fetched once when the board mounts. Submits write one
//! document each and append locally on success; other clients' writes only
//! show up after a reload.

use leptos::prelude::*;

use crate::components::star_rating::{StarDisplay, StarPicker};
use crate::net::comments::FirestoreStore;
use crate::state::comments::CommentBoardState;
use crate::state::ui::UiState;
use crate::util::stars::average_label;

/// Form, average score, and comment list for the configured collection.
#[component]
pub fn CommentBoard() -> impl IntoView {
    let board = expect_context::<RwSignal<CommentBoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let store = expect_context::<FirestoreStore>();

    let requested_load = RwSignal::new(false);
    let load_store = store.clone();
    Effect::new(move || {
        if requested_load.get_untracked() {
            return;
        }
        requested_load.set(true);

        #[cfg(feature = "hydrate")]
        {
            let store = load_store.clone();
            leptos::task::spawn_local(async move {
                crate::state::comments::load_all(&store, &board).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &load_store;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                crate::state::comments::submit(&store, &board).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &store;
        }
    };

    let rating = Signal::derive(move || board.with(|b| b.rating));
    let on_select = Callback::new(move |star: u8| board.update(|b| b.rating = star));

    view! {
        <div class="comment-board" class:comment-board--dark=move || !ui.get().theme.is_light()>
            <h2 class="comment-board__title">"Leave a Comment"</h2>
            <p class="comment-board__average">
                <strong>"Average Rating:"</strong>
                " "
                {move || average_label(board.with(|b| b.average))}
            </p>

            <form class="comment-board__form" on:submit=on_submit>
                <div class="comment-board__field">
                    <label for="comment-board-name">"Name:"</label>
                    <input
                        id="comment-board-name"
                        class="comment-board__input"
                        type="text"
                        prop:value=move || board.with(|b| b.name.clone())
                        on:input=move |ev| board.update(|b| b.name = event_target_value(&ev))
                    />
                </div>
                <div class="comment-board__field">
                    <label for="comment-board-comment">"Comment:"</label>
                    <textarea
                        id="comment-board-comment"
                        class="comment-board__input"
                        rows="4"
                        prop:value=move || board.with(|b| b.comment.clone())
                        on:input=move |ev| board.update(|b| b.comment = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="comment-board__field">
                    <label>"Rating:"</label>
                    <StarPicker value=rating on_select=on_select/>
                </div>

                {move || {
                    board.with(|b| b.error.clone())
                        .map(|error| view! { <p class="comment-board__error">{error}</p> })
                }}
                {move || {
                    board.with(|b| b.success.clone())
                        .map(|success| view! { <p class="comment-board__success">{success}</p> })
                }}

                <button class="btn btn--primary comment-board__submit" type="submit">
                    "Submit"
                </button>
            </form>

            <div class="comment-board__comments">
                <h3>"Comments"</h3>
                {move || {
                    let comments = board.with(|b| b.comments.clone());
                    if comments.is_empty() {
                        return view! { <p class="comment-board__empty">"No comments yet."</p> }.into_any();
                    }

                    view! {
                        <ul class="comment-board__list">
                            {comments
                                .into_iter()
                                .map(|record| {
                                    view! {
                                        <li class="comment-board__item">
                                            <p class="comment-board__item-header">
                                                <strong>{record.name}</strong>
                                                " "
                                                <StarDisplay rating=record.rating/>
                                            </p>
                                            <p class="comment-board__item-text">{record.comment}</p>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
