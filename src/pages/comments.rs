//! Guest comments and ratings page.

use leptos::prelude::*;

use crate::components::comment_board::CommentBoard;

#[component]
pub fn CommentsPage() -> impl IntoView {
    view! {
        <div class="comments-page">
            <CommentBoard/>
        </div>
    }
}
