//! Hover and click micro-interactions: button/card lift, 3D tilt, ripple.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

const RIPPLE_LIFETIME_MS: u32 = 600;
const TILT_MAX_DEG: f64 = 5.0;

fn for_each_html<F: FnMut(HtmlElement)>(document: &Document, selector: &str, mut f: F) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list
                .get(i)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                f(el);
            }
        }
    }
}

fn on_event<F: FnMut() + 'static>(el: &HtmlElement, event: &str, handler: F) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn on_mouse_event<F: FnMut(MouseEvent) + 'static>(el: &HtmlElement, event: &str, handler: F) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn lift_on_hover(
    document: &Document,
    selector: &str,
    transform: &'static str,
    shadow: &'static str,
    resting_shadow: &'static str,
) {
    for_each_html(document, selector, |el| {
        let enter = el.clone();
        on_event(&el, "mouseenter", move || {
            let style = enter.style();
            let _ = style.set_property("transition", "all 0.3s ease");
            let _ = style.set_property("transform", transform);
            let _ = style.set_property("box-shadow", shadow);
        });
        let leave = el.clone();
        on_event(&el, "mouseleave", move || {
            let style = leave.style();
            let _ = style.set_property("transform", "translateY(0) scale(1)");
            let _ = style.set_property("box-shadow", resting_shadow);
        });
    });
}

fn layer(el: &Element, selector: &str) -> Option<HtmlElement> {
    el.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn tilt_on_mousemove(document: &Document) {
    for_each_html(document, ".parallax-hover", |el| {
        let target = el.clone();
        on_mouse_event(&el, "mousemove", move |event| {
            let rect = target.get_bounding_client_rect();
            let x = event.client_x() as f64 - rect.left();
            let y = event.client_y() as f64 - rect.top();
            let center_x = rect.width() / 2.0;
            let center_y = rect.height() / 2.0;
            let rotate_x = (y - center_y) / center_y * TILT_MAX_DEG;
            let rotate_y = (center_x - x) / center_x * TILT_MAX_DEG;

            if let Some(bg) = layer(&target, ".parallax-bg, .wander-hover-image") {
                let _ = bg.style().set_property(
                    "transform",
                    &format!(
                        "translate3d({}px, {}px, 0) scale(1.05)",
                        (x - center_x) / 10.0,
                        (y - center_y) / 10.0
                    ),
                );
            }
            if let Some(content) = layer(&target, ".parallax-content, .card-content") {
                let _ = content.style().set_property(
                    "transform",
                    &format!(
                        "translate3d({}px, {}px, 0)",
                        (x - center_x) / 20.0,
                        (y - center_y) / 20.0
                    ),
                );
            }
            let _ = target.style().set_property(
                "transform",
                &format!(
                    "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
                    rotate_x, rotate_y
                ),
            );
        });

        let target = el.clone();
        on_event(&el, "mouseleave", move || {
            if let Some(bg) = layer(&target, ".parallax-bg, .wander-hover-image") {
                let _ = bg.style().remove_property("transform");
            }
            if let Some(content) = layer(&target, ".parallax-content, .card-content") {
                let _ = content.style().remove_property("transform");
            }
            let _ = target.style().remove_property("transform");
        });
    });
}

fn ripple_on_click(document: &Document) {
    let doc = document.clone();
    for_each_html(document, ".btn, .overlay-button, .card-btn", move |el| {
        let button = el.clone();
        let doc = doc.clone();
        on_mouse_event(&el, "click", move |event| {
            let ripple = match doc.create_element("span") {
                Ok(el) => el,
                Err(_) => return,
            };
            let rect = button.get_bounding_client_rect();
            let size = rect.width().max(rect.height());
            let x = event.client_x() as f64 - rect.left() - size / 2.0;
            let y = event.client_y() as f64 - rect.top() - size / 2.0;
            let _ = ripple.set_attribute(
                "style",
                &format!(
                    "position: absolute; width: {size}px; height: {size}px; \
                     left: {x}px; top: {y}px; background: rgba(255, 255, 255, 0.3); \
                     border-radius: 50%; transform: scale(0); \
                     animation: ripple 0.6s ease-out; pointer-events: none;"
                ),
            );

            let style = button.style();
            let _ = style.set_property("position", "relative");
            let _ = style.set_property("overflow", "hidden");
            let _ = button.append_child(&ripple);

            Timeout::new(RIPPLE_LIFETIME_MS, move || {
                ripple.remove();
            })
            .forget();
        });
    });
}

pub fn install(document: &Document) {
    lift_on_hover(
        document,
        ".btn",
        "translateY(-2px) scale(1.02)",
        "0 8px 25px rgba(0,0,0,0.15)",
        "none",
    );
    lift_on_hover(
        document,
        ".popular-card, .package-card",
        "translateY(-10px) scale(1.02)",
        "0 20px 40px rgba(0,0,0,0.1)",
        "0 5px 15px rgba(0,0,0,0.08)",
    );
    tilt_on_mousemove(document);
    ripple_on_click(document);
}
