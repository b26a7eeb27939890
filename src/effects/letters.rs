//! Letter-by-letter text reveal.
//!
//! Splits a heading's text into indexed `span.letter` nodes so CSS can
//! stagger them, with effect variants selected through `data-letter-effect`.
//! Initialisation is deferred until the loading overlay is gone; section and
//! card titles are additionally re-triggered as they scroll into view.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const LETTER_STEP_MS: u32 = 80;
const COMPLETE_EXTRA_MS: u32 = 500;
const HOVER_SETUP_DELAY_MS: u32 = 2_000;

/// Non-breaking space keeps blank glyphs visible inside their spans.
pub fn display_char(c: char) -> char {
    if c == ' ' {
        '\u{a0}'
    } else {
        c
    }
}

/// Extra marker class for characters that get their own styling.
pub fn letter_class(c: char) -> Option<&'static str> {
    if c.is_ascii_uppercase() {
        Some("letter-capital")
    } else if matches!(c, '!' | '?' | '.') {
        Some("letter-punctuation")
    } else {
        None
    }
}

fn animate_element(document: &Document, element: &Element, effect: &str) {
    let classes = element.class_list();
    if classes.contains("letter-animated") {
        return;
    }

    let text: String = element
        .text_content()
        .unwrap_or_default()
        .trim()
        .to_string();
    element.set_text_content(Some(""));
    let _ = classes.add_1("letter-animate");
    if effect != "fadeUp" {
        let _ = classes.add_1(&format!("letter-{}", effect));
    }

    for (index, c) in text.chars().enumerate() {
        let span = match document.create_element("span") {
            Ok(span) => span,
            Err(_) => continue,
        };
        span.set_text_content(Some(&display_char(c).to_string()));
        let _ = span.class_list().add_1("letter");
        if let Some(marker) = letter_class(c) {
            let _ = span.class_list().add_1(marker);
        }
        if let Some(html) = span.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("--i", &index.to_string());
            if c == ' ' {
                let _ = html.style().set_property("min-width", "0.3em");
            }
        }
        let _ = element.append_child(&span);
    }

    let _ = classes.add_1("letter-animated");

    let element = element.clone();
    let hold = text.chars().count() as u32 * LETTER_STEP_MS + COMPLETE_EXTRA_MS;
    Timeout::new(hold, move || {
        let _ = element.class_list().add_1("animation-complete");
    })
    .forget();
}

fn animate_all(document: &Document, selector: &str, effect: &str) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                animate_element(document, &el, effect);
            }
        }
    }
}

/// Tag the scroll-triggered targets with their effect and delay.
fn mark_scroll_targets(document: &Document) {
    let targets: [(&str, &str, u32); 3] = [
        (".section-title", "glow", 200),
        (".card-title", "slide", 300),
        (".section-subtitle", "premium", 100),
    ];
    for (selector, effect, delay) in targets {
        if let Ok(list) = document.query_selector_all(selector) {
            for i in 0..list.length() {
                if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                    let _ = el.set_attribute("data-letter-effect", effect);
                    let _ = el.set_attribute("data-letter-delay", &delay.to_string());
                }
            }
        }
    }
}

fn observe_scroll_targets(document: &Document) {
    let doc = document.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if target.class_list().contains("letter-animated") {
                    continue;
                }
                let effect = target
                    .get_attribute("data-letter-effect")
                    .unwrap_or_else(|| "fadeUp".to_string());
                let delay = target
                    .get_attribute("data-letter-delay")
                    .and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or(0);
                observer.unobserve(&target);
                let doc = doc.clone();
                Timeout::new(delay, move || {
                    animate_element(&doc, &target, &effect);
                })
                .forget();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.3));
    options.set_root_margin("0px 0px -100px 0px");

    if let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        let selectors = [
            ".section-title:not(.hero-title)",
            ".card-title",
            ".section-subtitle",
        ];
        for selector in selectors {
            if let Ok(list) = document.query_selector_all(selector) {
                for i in 0..list.length() {
                    if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok())
                    {
                        observer.observe(&el);
                    }
                }
            }
        }
    }
    callback.forget();
}

/// Titles on the navbar and buttons re-run the split on first hover.
fn setup_hover_animations(document: &Document) {
    let doc = document.clone();
    Timeout::new(HOVER_SETUP_DELAY_MS, move || {
        if let Ok(list) = doc.query_selector_all(".navbar-link, .btn") {
            for i in 0..list.length() {
                let el = match list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                    Some(el) => el,
                    None => continue,
                };
                let doc = doc.clone();
                let target = el.clone();
                let on_enter = Closure::wrap(Box::new(move || {
                    if !target.class_list().contains("letter-animated") {
                        animate_element(&doc, &target, "fadeUp");
                    }
                }) as Box<dyn FnMut()>);
                let _ = el.add_event_listener_with_callback(
                    "mouseenter",
                    on_enter.as_ref().unchecked_ref(),
                );
                on_enter.forget();
            }
        }
    })
    .forget();
}

/// Deferred initialisation, invoked by the loading sequencer's hide step.
pub fn initialize(document: &Document) {
    animate_all(document, ".hero-title", "fadeUp");
    mark_scroll_targets(document);
}

/// One-time wiring at page mount: scroll observer and hover re-triggers.
pub fn install(document: &Document) {
    observe_scroll_targets(document);
    setup_hover_animations(document);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_non_breaking() {
        assert_eq!(display_char(' '), '\u{a0}');
        assert_eq!(display_char('W'), 'W');
    }

    #[test]
    fn capitals_and_punctuation_get_marker_classes() {
        assert_eq!(letter_class('W'), Some("letter-capital"));
        assert_eq!(letter_class('!'), Some("letter-punctuation"));
        assert_eq!(letter_class('?'), Some("letter-punctuation"));
        assert_eq!(letter_class('.'), Some("letter-punctuation"));
        assert_eq!(letter_class('a'), None);
        assert_eq!(letter_class(' '), None);
    }
}
