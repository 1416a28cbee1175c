//! Chat panel relaying user text to the inference route.

use leptos::prelude::*;

use crate::net::chat::HttpChatBackend;
use crate::state::chat::{ChatState, Sender};

/// Transcript plus an input row. Each send issues one request; nothing
/// prevents a second send while the first is still pending.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let backend = expect_context::<HttpChatBackend>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.loading));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                crate::state::chat::send(&backend, &chat, &text).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&backend, text);
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|msg| {
                            let is_user = msg.sender == Sender::User;
                            let is_assistant = msg.sender == Sender::Assistant;
                            view! {
                                <div
                                    class="chat-panel__row"
                                    class:chat-panel__row--user=is_user
                                    class:chat-panel__row--assistant=is_assistant
                                >
                                    <div class="chat-panel__bubble">{msg.text}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    chat.get()
                        .loading
                        .then(|| view! { <div class="chat-panel__loading">"AI sedang mengetik..."</div> })
                }}
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Tulis pertanyaanmu di sini..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary chat-panel__send" type="submit">
                    "Kirim 🚀"
                </button>
            </form>
        </div>
    }
}
