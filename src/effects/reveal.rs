//! Scroll-triggered reveal effects, driven by IntersectionObserver.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::loader::sequence::{LETTER_INIT_DELAY_MS, SECTION_STAGGER_MS};

use super::letters;

const STAGGER_CHILD_MS: u32 = 100;

fn for_each_element<F: FnMut(Element)>(document: &Document, selector: &str, mut f: F) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                f(el);
            }
        }
    }
}

fn observe_all(document: &Document, observer: &IntersectionObserver, selector: &str) {
    for_each_element(document, selector, |el| observer.observe(&el));
}

fn new_observer<F>(threshold: f64, root_margin: &str, on_entry: F) -> Option<IntersectionObserver>
where
    F: Fn(IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(entry, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok();
    callback.forget();
    observer
}

/// Wire the three observers: section reveal with staggered children, card
/// entrance, and image fade-in.
pub fn install(document: &Document) {
    // Sections: mark visible and release the child animations one by one.
    if let Some(observer) = new_observer(0.1, "0px 0px -50px 0px", |entry, _| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        let _ = target.class_list().add_2("section-transition", "visible");
        let _ = target.class_list().add_1("in-view");
        if let Ok(children) = target
            .query_selector_all(".animate-text, .popular-card, .package-card, .gallery-item")
        {
            for i in 0..children.length() {
                if let Some(child) = children
                    .get(i)
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                {
                    Timeout::new(i * STAGGER_CHILD_MS, move || {
                        let style = child.style();
                        let _ = style.set_property("animation-play-state", "running");
                        let _ = style.set_property("opacity", "1");
                        let _ = style.set_property("transform", "translateY(0)");
                    })
                    .forget();
                }
            }
        }
    }) {
        for_each_element(document, "section", |el| {
            let _ = el.class_list().add_1("section-transition");
            observer.observe(&el);
        });
        observe_all(document, &observer, ".section-animate");
    }

    // Cards and footer blocks slide in a little later in the viewport.
    if let Some(observer) = new_observer(0.1, "0px 0px -100px 0px", |entry, _| {
        if entry.is_intersecting() {
            let _ = entry.target().class_list().add_1("animate-in");
        }
    }) {
        observe_all(
            document,
            &observer,
            ".popular-card, .package-card, .gallery-item, .footer-brand, .footer-contact, .footer-form",
        );
    }

    // Images fade in once and are then left alone.
    if let Some(observer) = new_observer(0.0, "0px", |entry, observer| {
        if entry.is_intersecting() {
            let target = entry.target();
            let _ = target.class_list().add_1("loaded");
            observer.unobserve(&target);
        }
    }) {
        observe_all(document, &observer, "img[src]");
    }

    // Late-arriving images still get their entrance once the bytes land.
    for_each_element(document, "img", |el| {
        if let Ok(img) = el.dyn_into::<HtmlElement>() {
            let target = img.clone();
            let on_load = Closure::wrap(Box::new(move || {
                let _ = target
                    .style()
                    .set_property("animation", "imageLoad 0.6s ease forwards");
            }) as Box<dyn FnMut()>);
            let _ =
                img.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
            on_load.forget();
        }
    });
}

/// Entrance handoff from the loading sequencer: staggered section reveal,
/// then the deferred letter animations.
pub fn trigger_entrance(document: &Document) {
    let mut index = 0u32;
    for_each_element(document, ".section-animate", |el| {
        Timeout::new(index * SECTION_STAGGER_MS, move || {
            let _ = el.class_list().add_1("in-view");
        })
        .forget();
        index += 1;
    });

    let document = document.clone();
    Timeout::new(LETTER_INIT_DELAY_MS, move || {
        letters::initialize(&document);
    })
    .forget();
}
