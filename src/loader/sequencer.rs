//! DOM side of the loading sequence.
//!
//! `PageLoader` binds a [`LoadSequence`] to the overlay markup rendered by
//! [`crate::loader::overlay`]: it owns every interval and timeout, mutates
//! the anchor elements, and hands the page over to the entrance effects once
//! the overlay is gone. Anchors are looked up once at mount; any missing
//! anchor simply disables the sub-activity that needed it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Document, HtmlElement};

use super::sequence::{
    LoadSequence, LoaderVariant, Phase, COMPLETION_HOLD_MS, COMPLETION_TEXT, FADE_OUT_MS,
    MESSAGE_FADE_MS, MESSAGE_ROTATION_MS, PROGRESS_TICK_MS, QUOTE_FADE_MS, QUOTE_ROTATION_MS,
    READY_POLL_MS, VARIANT_CYCLE_MS,
};
use super::LoaderConfig;
use crate::effects;

/// Shared slot for the mounted sequencer. Timer callbacks and the
/// [`LoaderControls`](super::LoaderControls) surface all reach the instance
/// through this handle, and tolerate it being empty.
pub type SharedLoader = Rc<RefCell<Option<PageLoader>>>;

struct Anchors {
    overlay: Option<HtmlElement>,
    percentage: Option<HtmlElement>,
    text: Option<HtmlElement>,
    progress: Option<HtmlElement>,
    message: Option<HtmlElement>,
}

impl Anchors {
    fn locate(document: &Document) -> Self {
        Self {
            overlay: by_id(document, "page-loader"),
            percentage: by_selector(document, ".loader-percentage"),
            text: by_selector(document, ".loader-text"),
            progress: by_selector(document, ".loader-progress"),
            message: by_selector(document, ".loader-message"),
        }
    }
}

fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn by_selector(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Every timer the sequencer starts is retained here so completion can
/// cancel all of them exactly once. Dropping a handle clears the underlying
/// browser timer.
#[derive(Default)]
struct Timers {
    quotes: Option<Interval>,
    quote_fade: Option<Timeout>,
    messages: Option<Interval>,
    message_fade: Option<Timeout>,
    progress: Option<Interval>,
    ready_poll: Option<Interval>,
    variant_cycle: Option<Interval>,
    safety: Option<Timeout>,
    hide_delay: Option<Timeout>,
    removal: Option<Timeout>,
}

impl Timers {
    fn cancel_running(&mut self) {
        self.quotes = None;
        self.quote_fade = None;
        self.messages = None;
        self.message_fade = None;
        self.progress = None;
        self.ready_poll = None;
        self.variant_cycle = None;
        self.safety = None;
    }
}

pub struct PageLoader {
    sequence: LoadSequence,
    variant: LoaderVariant,
    anchors: Anchors,
    timers: Timers,
}

impl PageLoader {
    /// Locate the overlay anchors, start the sequence and install it into
    /// `shared`. Safe to call with any of the anchors missing.
    pub fn mount(shared: &SharedLoader, config: LoaderConfig) {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };

        let mut loader = PageLoader {
            sequence: LoadSequence::new(config.min_loading_time_ms),
            variant: LoaderVariant::Spinner,
            anchors: Anchors::locate(&document),
            timers: Timers::default(),
        };
        loader.sequence.begin(js_sys::Date::now());
        loader.apply_variant(LoaderVariant::Spinner);
        lock_body_scroll(&document);

        info!(
            "loading sequence started (floor {}ms)",
            config.min_loading_time_ms
        );

        *shared.borrow_mut() = Some(loader);

        let handle = shared.clone();
        let quotes = Interval::new(QUOTE_ROTATION_MS, move || Self::rotate_quote(&handle));
        let handle = shared.clone();
        let messages = Interval::new(MESSAGE_ROTATION_MS, move || Self::rotate_message(&handle));
        let handle = shared.clone();
        let progress = Interval::new(PROGRESS_TICK_MS, move || Self::tick_progress(&handle));
        let handle = shared.clone();
        let ready_poll = Interval::new(READY_POLL_MS, move || Self::poll_ready(&handle));
        let handle = shared.clone();
        let safety = Timeout::new(config.safety_timeout_ms, move || {
            warn!("loading gate never passed, forcing the page visible");
            Self::complete(&handle);
        });
        let variant_cycle = config.variant_cycling.then(|| {
            let handle = shared.clone();
            Interval::new(VARIANT_CYCLE_MS, move || Self::cycle_variant(&handle))
        });

        if let Some(loader) = shared.borrow_mut().as_mut() {
            loader.timers.quotes = Some(quotes);
            loader.timers.messages = Some(messages);
            loader.timers.progress = Some(progress);
            loader.timers.ready_poll = Some(ready_poll);
            loader.timers.safety = Some(safety);
            loader.timers.variant_cycle = variant_cycle;
        }
    }

    fn rotate_quote(shared: &SharedLoader) {
        let mut slot = shared.borrow_mut();
        let loader = match slot.as_mut() {
            Some(loader) => loader,
            None => return,
        };
        if loader.sequence.phase() != Phase::Running {
            return;
        }
        let el = match &loader.anchors.text {
            Some(el) => el.clone(),
            None => return,
        };
        let next = loader.sequence.next_quote();
        let _ = el.style().set_property("opacity", "0");
        let swap = el.clone();
        loader.timers.quote_fade = Some(Timeout::new(QUOTE_FADE_MS, move || {
            swap.set_text_content(Some(next));
            let _ = swap.style().set_property("opacity", "1");
        }));
    }

    fn rotate_message(shared: &SharedLoader) {
        let mut slot = shared.borrow_mut();
        let loader = match slot.as_mut() {
            Some(loader) => loader,
            None => return,
        };
        if loader.sequence.phase() != Phase::Running {
            return;
        }
        let el = match &loader.anchors.message {
            Some(el) => el.clone(),
            None => return,
        };
        let next = loader.sequence.next_message();
        let _ = el.style().set_property("opacity", "0");
        let swap = el.clone();
        loader.timers.message_fade = Some(Timeout::new(MESSAGE_FADE_MS, move || {
            swap.set_text_content(Some(next));
            let _ = swap.style().set_property("opacity", "0.8");
        }));
    }

    fn tick_progress(shared: &SharedLoader) {
        let mut slot = shared.borrow_mut();
        let loader = match slot.as_mut() {
            Some(loader) => loader,
            None => return,
        };
        let capped = loader
            .sequence
            .advance_progress(js_sys::Math::random(), js_sys::Math::random());
        let percent = loader.sequence.progress();
        loader.render_progress(percent);
        if capped {
            // The simulation holds at the cap until the real gate passes.
            loader.timers.progress = None;
        }
    }

    fn poll_ready(shared: &SharedLoader) {
        let ready = web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.ready_state() == "complete")
            .unwrap_or(false);
        let fire = {
            let slot = shared.borrow();
            match slot.as_ref() {
                Some(loader) => {
                    loader.sequence.phase() == Phase::Running
                        && loader.sequence.gate_satisfied(js_sys::Date::now(), ready)
                }
                None => false,
            }
        };
        if fire {
            Self::complete(shared);
        }
    }

    fn cycle_variant(shared: &SharedLoader) {
        let mut slot = shared.borrow_mut();
        if let Some(loader) = slot.as_mut() {
            let next = loader.variant.next();
            loader.apply_variant(next);
        }
    }

    /// The completion transition. Fires at most once per page view, whatever
    /// the trigger: the ready poll, the safety timeout or a manual override.
    /// Side effects run in a fixed order: cancel timers, force 100%, swap in
    /// the completion text, schedule the hide step.
    pub fn complete(shared: &SharedLoader) {
        let mut slot = shared.borrow_mut();
        let loader = match slot.as_mut() {
            Some(loader) => loader,
            None => return,
        };
        if !loader.sequence.begin_completion() {
            return;
        }
        loader.timers.cancel_running();
        loader.render_progress(loader.sequence.progress());
        if let Some(text) = &loader.anchors.text {
            text.set_text_content(Some(COMPLETION_TEXT));
            let _ = text.style().set_property("opacity", "1");
        }
        info!("loading complete");
        let handle = shared.clone();
        loader.timers.hide_delay = Some(Timeout::new(COMPLETION_HOLD_MS, move || {
            Self::hide(&handle);
        }));
    }

    /// The hide step: exit transition, delayed removal of the overlay,
    /// restored scrolling, entrance effects. Only runs after the completion
    /// transition; the phase guard keeps the lifecycle from skipping ahead.
    pub fn hide(shared: &SharedLoader) {
        let mut slot = shared.borrow_mut();
        let loader = match slot.as_mut() {
            Some(loader) => loader,
            None => return,
        };
        if !loader.sequence.mark_hidden() {
            return;
        }
        let overlay = loader.anchors.overlay.clone();
        match overlay {
            Some(overlay) => {
                let _ = overlay.class_list().add_1("fade-out");
                loader.timers.removal = Some(Timeout::new(FADE_OUT_MS, move || {
                    overlay.remove();
                    reveal_page();
                }));
            }
            None => reveal_page(),
        }
    }

    pub fn force_complete(shared: &SharedLoader) {
        debug!("manual completion requested");
        Self::complete(shared);
    }

    pub fn set_text(&self, text: &str) {
        if let Some(el) = &self.anchors.text {
            el.set_text_content(Some(text));
        }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(el) = &self.anchors.message {
            el.set_text_content(Some(message));
        }
    }

    /// Swap the visual variant. Out-of-range indices leave it unchanged.
    pub fn set_loader_type(&mut self, index: u32) {
        match LoaderVariant::from_index(index) {
            Some(variant) => self.apply_variant(variant),
            None => debug!("ignoring unknown loader variant {}", index),
        }
    }

    pub fn variant_index(&self) -> u32 {
        self.variant.index()
    }

    /// Re-display the overlay for a manual loading phase. A no-op once the
    /// overlay has been removed from the document.
    pub fn show(&self) {
        if let Some(overlay) = &self.anchors.overlay {
            let _ = overlay.style().set_property("display", "flex");
            let _ = overlay.class_list().remove_1("fade-out");
        }
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            lock_body_scroll(&document);
        }
    }

    fn apply_variant(&mut self, variant: LoaderVariant) {
        if let Some(overlay) = &self.anchors.overlay {
            let classes = overlay.class_list();
            for known in LoaderVariant::ALL {
                let _ = classes.remove_1(known.class_name());
            }
            let _ = classes.add_1(variant.class_name());
        }
        self.variant = variant;
    }

    fn render_progress(&self, percent: f64) {
        if let Some(bar) = &self.anchors.progress {
            let _ = bar.style().set_property("width", &format!("{}%", percent));
        }
        if let Some(label) = &self.anchors.percentage {
            label.set_text_content(Some(&format!("{}%", percent.round() as u32)));
        }
    }
}

fn lock_body_scroll(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("fade");
        let _ = body.style().set_property("overflow", "hidden");
    }
}

/// Final stage of the hide sequence: give the page back to the user and
/// kick off the entrance effects.
fn reveal_page() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = classes.remove_1("fade");
        let _ = classes.add_1("loaded");
        let _ = classes.add_1("page-loaded");
        let _ = body.style().set_property("overflow", "auto");
    }
    effects::reveal::trigger_entrance(&document);
}
