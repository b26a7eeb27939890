//! Pure state for the splash-screen loading sequence.
//!
//! Everything that decides *when* the loader advances, completes or hides
//! lives here, free of any DOM or timer handles, so the whole lifecycle can
//! be unit tested with synthetic clocks. The DOM side of the loader
//! (`sequencer`) owns the actual intervals and only calls into this module.

pub const ADVENTURE_QUOTES: [&str; 8] = [
    "Discover Your Next Adventure",
    "Adventure Awaits Your Arrival",
    "Journey Beyond Ordinary",
    "Explore Without Limits",
    "Create Unforgettable Memories",
    "Wanderlust Calls Your Name",
    "Embrace the Unknown",
    "Adventure is Out There",
];

pub const LOADING_MESSAGES: [&str; 5] = [
    "Preparing your journey to extraordinary places...",
    "Gathering the best travel experiences...",
    "Curating personalized adventures...",
    "Loading magical destinations...",
    "Connecting you to wanderlust...",
];

pub const COMPLETION_TEXT: &str = "Welcome to WanderWise!";

pub const QUOTE_ROTATION_MS: u32 = 1200;
pub const QUOTE_FADE_MS: u32 = 200;
pub const MESSAGE_ROTATION_MS: u32 = 2000;
pub const MESSAGE_FADE_MS: u32 = 300;
pub const PROGRESS_TICK_MS: u32 = 150;
pub const READY_POLL_MS: u32 = 100;
pub const VARIANT_CYCLE_MS: u32 = 4000;
pub const COMPLETION_HOLD_MS: u32 = 800;
pub const FADE_OUT_MS: u32 = 500;
pub const SECTION_STAGGER_MS: u32 = 200;
pub const LETTER_INIT_DELAY_MS: u32 = 500;

/// Simulated progress never passes this before the completion transition.
pub const PROGRESS_CAP: f64 = 98.0;

/// Lifecycle of one page view. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completing,
    Hidden,
}

/// Visual style of the loader, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderVariant {
    Spinner,
    Dots,
    Bars,
}

impl LoaderVariant {
    pub const ALL: [LoaderVariant; 3] =
        [LoaderVariant::Spinner, LoaderVariant::Dots, LoaderVariant::Bars];

    /// External callers address variants 1..=3; anything else is rejected.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(LoaderVariant::Spinner),
            2 => Some(LoaderVariant::Dots),
            3 => Some(LoaderVariant::Bars),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        match self {
            LoaderVariant::Spinner => 1,
            LoaderVariant::Dots => 2,
            LoaderVariant::Bars => 3,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            LoaderVariant::Spinner => "loader-option-1",
            LoaderVariant::Dots => "loader-option-2",
            LoaderVariant::Bars => "loader-option-3",
        }
    }

    pub fn next(self) -> Self {
        match self {
            LoaderVariant::Spinner => LoaderVariant::Dots,
            LoaderVariant::Dots => LoaderVariant::Bars,
            LoaderVariant::Bars => LoaderVariant::Spinner,
        }
    }
}

/// State of a single loading sequence.
///
/// Invariants upheld here:
/// - `progress` is non-decreasing and capped at [`PROGRESS_CAP`] while
///   `Running`; it reaches 100 only inside [`begin_completion`].
/// - [`begin_completion`] fires at most once per sequence, no matter how
///   many timers or manual overrides race for it.
///
/// [`begin_completion`]: LoadSequence::begin_completion
#[derive(Debug, Clone)]
pub struct LoadSequence {
    phase: Phase,
    progress: f64,
    quote_index: usize,
    message_index: usize,
    started_at_ms: f64,
    min_duration_ms: f64,
}

impl LoadSequence {
    pub fn new(min_duration_ms: f64) -> Self {
        Self {
            phase: Phase::Idle,
            progress: 0.0,
            quote_index: 0,
            message_index: 0,
            started_at_ms: 0.0,
            min_duration_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Idle -> Running. Later calls are ignored; the start instant is set
    /// exactly once.
    pub fn begin(&mut self, now_ms: f64) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
            self.started_at_ms = now_ms;
        }
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.started_at_ms
    }

    /// One tick of the simulated progress curve. `r1` and `r2` are random
    /// draws in [0,1): the base increment lands in [2,10), and past 85 a
    /// further small increment in [0,2) flattens the curve. Returns `true`
    /// once the cap is reached and the tick timer should stop for good.
    pub fn advance_progress(&mut self, r1: f64, r2: f64) -> bool {
        if self.phase != Phase::Running {
            return true;
        }
        let mut next = self.progress + r1 * 8.0 + 2.0;
        if next > 85.0 {
            next += r2 * 2.0;
        }
        if next > PROGRESS_CAP {
            next = PROGRESS_CAP;
        }
        if next > self.progress {
            self.progress = next;
        }
        self.progress >= PROGRESS_CAP
    }

    /// Advance the quote cursor, wrapping after the last entry.
    pub fn next_quote(&mut self) -> &'static str {
        self.quote_index = (self.quote_index + 1) % ADVENTURE_QUOTES.len();
        ADVENTURE_QUOTES[self.quote_index]
    }

    /// Advance the message cursor, wrapping after the last entry.
    pub fn next_message(&mut self) -> &'static str {
        self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
        LOADING_MESSAGES[self.message_index]
    }

    /// The dual completion gate: minimum wall-clock time elapsed AND the
    /// document fully loaded. Pure and re-entrant; the poll may evaluate it
    /// any number of times with no side effects.
    pub fn gate_satisfied(&self, now_ms: f64, document_ready: bool) -> bool {
        document_ready && self.elapsed_ms(now_ms) >= self.min_duration_ms
    }

    /// Running -> Completing, forcing progress to 100. Returns `false` on
    /// every call after the first, which is what makes the completion
    /// transition single-fire.
    pub fn begin_completion(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Completing;
        self.progress = 100.0;
        true
    }

    /// Completing -> Hidden, once the exit transition has played out.
    pub fn mark_hidden(&mut self) -> bool {
        if self.phase != Phase::Completing {
            return false;
        }
        self.phase = Phase::Hidden;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(min_duration_ms: f64, now_ms: f64) -> LoadSequence {
        let mut seq = LoadSequence::new(min_duration_ms);
        seq.begin(now_ms);
        seq
    }

    #[test]
    fn progress_is_monotone_and_capped() {
        let mut seq = running(500.0, 0.0);
        let mut last = seq.progress();
        for _ in 0..200 {
            seq.advance_progress(0.97, 0.97);
            assert!(seq.progress() >= last);
            assert!(seq.progress() <= PROGRESS_CAP);
            last = seq.progress();
        }
        assert_eq!(seq.progress(), PROGRESS_CAP);
    }

    #[test]
    fn progress_tick_reports_when_cap_reached() {
        let mut seq = running(500.0, 0.0);
        let mut stopped = false;
        for _ in 0..200 {
            if seq.advance_progress(0.5, 0.5) {
                stopped = true;
                break;
            }
        }
        assert!(stopped);
        assert_eq!(seq.progress(), PROGRESS_CAP);
    }

    #[test]
    fn progress_jumps_to_100_only_at_completion() {
        let mut seq = running(500.0, 0.0);
        for _ in 0..50 {
            seq.advance_progress(0.99, 0.99);
            assert!(seq.progress() <= PROGRESS_CAP);
        }
        assert!(seq.begin_completion());
        assert_eq!(seq.progress(), 100.0);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut seq = running(500.0, 0.0);
        assert!(seq.begin_completion());
        // A manual override racing the automatic gate must not fire again.
        assert!(!seq.begin_completion());
        assert!(!seq.begin_completion());
        assert_eq!(seq.phase(), Phase::Completing);
    }

    #[test]
    fn completion_cannot_fire_before_start_or_after_hide() {
        let mut seq = LoadSequence::new(500.0);
        assert!(!seq.begin_completion());
        seq.begin(0.0);
        assert!(seq.begin_completion());
        assert!(seq.mark_hidden());
        assert!(!seq.begin_completion());
        assert!(!seq.mark_hidden());
    }

    #[test]
    fn gate_waits_for_minimum_duration() {
        // Document ready at t=0, floor of 500ms: nothing before t=500.
        let seq = running(500.0, 1000.0);
        assert!(!seq.gate_satisfied(1000.0, true));
        assert!(!seq.gate_satisfied(1499.0, true));
        assert!(seq.gate_satisfied(1500.0, true));
    }

    #[test]
    fn gate_waits_for_document_ready() {
        // Document becomes ready only at t=2000 with a 500ms floor:
        // completion begins at readiness, not earlier.
        let seq = running(500.0, 0.0);
        assert!(!seq.gate_satisfied(1900.0, false));
        assert!(seq.gate_satisfied(2000.0, true));
    }

    #[test]
    fn gate_is_reentrant_without_side_effects() {
        let seq = running(500.0, 0.0);
        for _ in 0..10 {
            assert!(!seq.gate_satisfied(100.0, true));
        }
        assert_eq!(seq.phase(), Phase::Running);
        assert_eq!(seq.progress(), 0.0);
    }

    #[test]
    fn quote_cursor_wraps_around() {
        let mut seq = running(500.0, 0.0);
        for expected in ADVENTURE_QUOTES.iter().cycle().skip(1).take(ADVENTURE_QUOTES.len() * 2) {
            assert_eq!(seq.next_quote(), *expected);
        }
    }

    #[test]
    fn message_cursor_wraps_around() {
        let mut seq = running(500.0, 0.0);
        for expected in LOADING_MESSAGES.iter().cycle().skip(1).take(LOADING_MESSAGES.len() * 2) {
            assert_eq!(seq.next_message(), *expected);
        }
    }

    #[test]
    fn variant_indices_round_trip() {
        for variant in LoaderVariant::ALL {
            assert_eq!(LoaderVariant::from_index(variant.index()), Some(variant));
        }
        assert_eq!(LoaderVariant::from_index(2), Some(LoaderVariant::Dots));
    }

    #[test]
    fn out_of_range_variant_is_rejected() {
        assert_eq!(LoaderVariant::from_index(0), None);
        assert_eq!(LoaderVariant::from_index(4), None);
        assert_eq!(LoaderVariant::from_index(9), None);
    }

    #[test]
    fn variant_cycling_visits_all_styles() {
        let mut variant = LoaderVariant::Spinner;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(variant);
            variant = variant.next();
        }
        assert_eq!(variant, LoaderVariant::Spinner);
        assert_eq!(seen, LoaderVariant::ALL.to_vec());
    }

    #[test]
    fn begin_sets_start_instant_once() {
        let mut seq = LoadSequence::new(500.0);
        seq.begin(1000.0);
        seq.begin(9999.0);
        assert_eq!(seq.elapsed_ms(1500.0), 500.0);
    }

    #[test]
    fn progress_tick_is_inert_outside_running() {
        let mut seq = LoadSequence::new(500.0);
        assert!(seq.advance_progress(0.5, 0.5));
        assert_eq!(seq.progress(), 0.0);
        seq.begin(0.0);
        seq.begin_completion();
        assert!(seq.advance_progress(0.5, 0.5));
        assert_eq!(seq.progress(), 100.0);
    }
}
