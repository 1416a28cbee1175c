//! Chatbot page.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <h1 class="chat-page__title">"🤖 Gemini Flash Chatbot"</h1>
            <ChatPanel/>
        </div>
    }
}
