//! Colour scheme detection.
//!
//! Reads `prefers-color-scheme: light` and can follow changes to it for the
//! rest of the page session. Requires a browser environment.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

#[cfg(feature = "hydrate")]
fn light_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(LIGHT_QUERY).ok().flatten()
}

/// Whether the system currently prefers a light scheme. `true` outside the
/// browser.
pub fn prefers_light() -> bool {
    #[cfg(feature = "hydrate")]
    {
        light_query().map_or(true, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

/// Call `on_change` with the new preference whenever it changes.
///
/// The listener stays registered for the page session.
pub fn watch(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = light_query() else {
            return;
        };
        let listener = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        });
        if mq
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("theme: could not watch {LIGHT_QUERY}");
            return;
        }
        listener.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}
