//! Site header: mobile drawer, smooth-scroll navigation, sticky state,
//! active-link highlight and the go-top button.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;

use crate::theme::ThemeToggle;

const STICKY_OFFSET: f64 = 200.0;
const HIGHLIGHT_OFFSET: f64 = 150.0;
const NAV_FADE_MS: u32 = 200;

const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("destination", "Destinations"),
    ("packages", "Packages"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

/// Fade the main content slightly, then smooth-scroll to the section.
fn smooth_scroll_to(section_id: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    let main = document
        .query_selector("main")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(main) = &main {
        let _ = main.style().set_property("opacity", "0.7");
        let _ = main.style().set_property("transform", "translateY(10px)");
    }

    let section_id = section_id.to_string();
    Timeout::new(NAV_FADE_MS, move || {
        if let Some(target) = document.get_element_by_id(&section_id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        if let Some(main) = &main {
            let _ = main.style().set_property("opacity", "1");
            let _ = main.style().set_property("transform", "translateY(0)");
        }
    })
    .forget();
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_section = use_state(|| "home".to_string());

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_handle = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_handle.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y >= STICKY_OFFSET);

                    // Last section whose top has passed the highlight line
                    // wins, matching reading order.
                    let mut current = "home".to_string();
                    if let Ok(sections) = document.query_selector_all("section[id]") {
                        for i in 0..sections.length() {
                            if let Some(section) = sections
                                .get(i)
                                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                            {
                                if scroll_y >= section.offset_top() as f64 - HIGHLIGHT_OFFSET {
                                    if let Some(id) = section.get_attribute("id") {
                                        current = id;
                                    }
                                }
                            }
                        }
                    }
                    active_section.set(current);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let go_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let nav_items = NAV_LINKS.iter().map(|(id, label)| {
        let on_click = {
            let menu_open = menu_open.clone();
            let id = *id;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                smooth_scroll_to(id);
            })
        };
        let link_class = if *active_section == *id {
            "navbar-link active"
        } else {
            "navbar-link"
        };
        html! {
            <li>
                <a href={format!("#{}", id)} class={link_class} onclick={on_click}>
                    {*label}
                </a>
            </li>
        }
    });

    html! {
        <>
            <header class={classes!("header", (*is_scrolled).then(|| "active"))}>
                <div class="header-content">
                    <a href="#home" class="logo" onclick={{
                        let menu_open = menu_open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            menu_open.set(false);
                            smooth_scroll_to("home");
                        })
                    }}>
                        {"WanderWise"}
                    </a>

                    <button class="nav-open-btn" onclick={toggle_menu.clone()} aria-label="Open menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>

                    <nav class={classes!("navbar", (*menu_open).then(|| "active"))}>
                        <button class="nav-close-btn" onclick={close_menu.clone()} aria-label="Close menu">
                            {"✕"}
                        </button>
                        <ul class="navbar-list">
                            { for nav_items }
                        </ul>
                        <ThemeToggle />
                    </nav>
                </div>
            </header>

            <div
                class={classes!("overlay", (*menu_open).then(|| "active"))}
                onclick={close_menu}
            ></div>

            <a
                href="#home"
                class={classes!("go-top", (*is_scrolled).then(|| "active"))}
                onclick={go_top}
                aria-label="Back to top"
            >
                {"▲"}
            </a>
        </>
    }
}
