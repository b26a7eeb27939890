//! Scroll-position effects that are not observer-based.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const HERO_PARALLAX_RATE: f64 = -0.5;

/// Parallax drift for the hero banner. Skipped silently when the hero is
/// not in the document.
pub fn install() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let window_handle = window.clone();

    let callback = Closure::wrap(Box::new(move || {
        let document = match window_handle.document() {
            Some(document) => document,
            None => return,
        };
        let hero = document
            .query_selector(".hero")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(hero) = hero {
            let scrolled = window_handle.scroll_y().unwrap_or(0.0);
            let _ = hero.style().set_property(
                "transform",
                &format!("translateY({}px)", scrolled * HERO_PARALLAX_RATE),
            );
        }
    }) as Box<dyn FnMut()>);

    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    callback.forget();
}
