//! Explicit control surface for the loading sequence.
//!
//! The composition root creates one `LoaderControls`, mounts the sequencer
//! into it after the first render, and shares the handle through a
//! `ContextProvider`. Every method is a thin pass-through that tolerates the
//! sequencer not existing yet (or anymore).

use std::cell::RefCell;
use std::rc::Rc;

use super::sequencer::{PageLoader, SharedLoader};
use super::LoaderConfig;

#[derive(Clone)]
pub struct LoaderControls {
    inner: SharedLoader,
}

impl PartialEq for LoaderControls {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for LoaderControls {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderControls {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }

    /// Locate the overlay anchors and start the sequence. Called once by the
    /// composition root after the overlay markup is in the document.
    pub fn mount(&self, config: LoaderConfig) {
        PageLoader::mount(&self.inner, config);
    }

    /// Re-display the overlay for a manual loading phase.
    pub fn show(&self) {
        if let Some(loader) = self.inner.borrow().as_ref() {
            loader.show();
        }
    }

    /// Run the hide step. Only acts once the completion transition has run;
    /// use [`force_complete`](Self::force_complete) to dismiss the loader
    /// early without skipping a lifecycle step.
    pub fn hide(&self) {
        PageLoader::hide(&self.inner);
    }

    pub fn set_text(&self, text: &str) {
        if let Some(loader) = self.inner.borrow().as_ref() {
            loader.set_text(text);
        }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(loader) = self.inner.borrow().as_ref() {
            loader.set_message(message);
        }
    }

    /// Swap the loader's visual variant; out-of-range indices are ignored.
    pub fn set_loader_type(&self, index: u32) {
        if let Some(loader) = self.inner.borrow_mut().as_mut() {
            loader.set_loader_type(index);
        }
    }

    pub fn loader_type(&self) -> Option<u32> {
        self.inner.borrow().as_ref().map(|loader| loader.variant_index())
    }

    /// Escape hatch past the minimum-duration/ready gate. Still funnels into
    /// the same single-fire completion transition.
    pub fn force_complete(&self) {
        PageLoader::force_complete(&self.inner);
    }
}
