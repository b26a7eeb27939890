//! Floating action buttons: chat (stub), phone call, newsletter shortcut.

use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;

const BOUNCE_MS: u32 = 500;
const FORM_GLOW_MS: u32 = 2_000;

#[function_component(FloatingButtons)]
pub fn floating_buttons() -> Html {
    // Chat is a stub until support goes live.
    let on_chat = Callback::from(|e: MouseEvent| {
        log!("chat support requested");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Chat support will be available soon! 💬");
        }
        if let Some(button) = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        {
            let _ = button.style().set_property("animation", "bounce 0.5s");
            Timeout::new(BOUNCE_MS, move || {
                let _ = button.style().remove_property("animation");
            })
            .forget();
        }
    });

    let on_call = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .location()
                .set_href(&format!("tel:{}", config::SUPPORT_PHONE));
        }
    });

    let on_newsletter = Callback::from(|_: MouseEvent| {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };
        if let Some(footer_form) = document.query_selector(".footer-form").ok().flatten() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            footer_form.scroll_into_view_with_scroll_into_view_options(&options);
        }
        if let Some(wrapper) = document
            .query_selector(".form-wrapper")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = wrapper
                .style()
                .set_property("box-shadow", "0 0 20px rgba(33, 150, 243, 0.5)");
            Timeout::new(FORM_GLOW_MS, move || {
                let _ = wrapper.style().remove_property("box-shadow");
            })
            .forget();
        }
    });

    html! {
        <div class="floating-buttons">
            <button id="chat-bot" class="floating-btn" onclick={on_chat} aria-label="Chat with us">
                {"💬"}
            </button>
            <button id="phone-call" class="floating-btn" onclick={on_call} aria-label="Call us">
                {"📞"}
            </button>
            <button id="newsletter" class="floating-btn" onclick={on_newsletter} aria-label="Newsletter">
                {"✉"}
            </button>
        </div>
    }
}
