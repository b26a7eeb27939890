pub mod controls;
pub mod overlay;
pub mod sequence;
pub mod sequencer;

pub use controls::LoaderControls;
pub use overlay::LoaderOverlay;

use crate::config;

/// Tuning for one loading sequence. Defaults come from the build profile so
/// development reloads stay snappy while production keeps the full splash.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// The loader never finishes faster than this, however fast the page
    /// actually loads.
    pub min_loading_time_ms: f64,
    /// Rotate through the visual variants every few seconds.
    pub variant_cycling: bool,
    /// Upper bound after which the page is forced visible even if the
    /// completion gate never passes.
    pub safety_timeout_ms: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        let floor = config::min_loading_time_ms();
        Self {
            min_loading_time_ms: floor,
            variant_cycling: false,
            safety_timeout_ms: floor as u32 + 5_000,
        }
    }
}
