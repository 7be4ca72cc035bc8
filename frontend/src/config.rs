use log::Level;

use crate::i18n::Locale;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose binding logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Timings and distances shared by every section's entrance animations.
/// Durations are in seconds, distances in CSS pixels.
pub mod motion {
    pub const VIEWPORT_START: f64 = 0.8;
    pub const VIEWPORT_END: f64 = 0.2;
    pub const FOOTER_VIEWPORT_START: f64 = 0.9;

    pub const ENTRANCE_DURATION: f64 = 1.0;
    pub const CARD_DURATION: f64 = 0.8;
    pub const STAGGER_STEP: f64 = 0.2;

    pub const SLIDE_DISTANCE: f64 = 100.0;
    pub const TITLE_RISE: f64 = 50.0;
    pub const CARD_RISE: f64 = 100.0;

    pub const COUNTER_DURATION: f64 = 2.0;
    pub const HOVER_DURATION: f64 = 0.3;
    pub const ICON_HOVER_DURATION: f64 = 0.2;
    pub const LANGUAGE_FADE: f64 = 0.3;
    pub const PULSE_DURATION: f64 = 0.1;

    pub const SECTION_SCROLL_DURATION: f64 = 1.0;
    pub const HEADER_OFFSET: f64 = 80.0;

    pub const TICK_INTERVAL_MS: u32 = 16;
}
