//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ServiceConfig;
use crate::net::chat::HttpChatBackend;
use crate::net::comments::FirestoreStore;
use crate::pages::{chat::ChatPage, comments::CommentsPage};
use crate::state::{chat::ChatState, comments::CommentBoardState, ui::Theme, ui::UiState};
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides widget state, service clients, and theme state, then routes `/`
/// to the chat page and `/comments` to the comment board.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ServiceConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::error!("service config: {e}; comment store disabled");
        ServiceConfig::fallback()
    });

    let chat = RwSignal::new(ChatState::default());
    let comments = RwSignal::new(CommentBoardState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(chat);
    provide_context(comments);
    provide_context(ui);
    provide_context(HttpChatBackend::new(config.chat_endpoint));
    provide_context(FirestoreStore::new(config.store));

    // Browser-only: the server always renders the light scheme.
    Effect::new(move || {
        ui.update(|u| u.theme = Theme::from_prefers_light(theme::prefers_light()));
        theme::watch(move |light| ui.update(|u| u.theme = Theme::from_prefers_light(light)));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/feedback-widgets.css"/>
        <Title text="Feedback Widgets"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("comments") view=CommentsPage/>
            </Routes>
        </Router>
    }
}
