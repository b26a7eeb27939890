//! Light/dark theme, persisted in localStorage under the `theme` key.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";
const DEFAULT_THEME: &str = "light";
const SPIN_MS: u32 = 300;

fn stored_theme() -> String {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
        .flatten()
        .unwrap_or_else(|| DEFAULT_THEME.to_string())
}

fn set_document_theme(theme: &str) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

/// Apply the persisted preference before the first paint of the page body.
pub fn apply_saved_theme() {
    set_document_theme(&stored_theme());
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        let current = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|root| root.get_attribute("data-theme"))
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        let next = if current == "light" { "dark" } else { "light" };

        set_document_theme(next);
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            let _ = storage.set_item(STORAGE_KEY, next);
        }

        if let Some(button) = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        {
            let _ = button.style().set_property("transform", "rotate(360deg)");
            Timeout::new(SPIN_MS, move || {
                let _ = button.style().set_property("transform", "rotate(0deg)");
            })
            .forget();
        }
    });

    html! {
        <button id="theme-toggle" class="theme-toggle" {onclick} aria-label="Toggle theme">
            {"◐"}
        </button>
    }
}
