//! Default timings and thresholds.

// ── Counters ────────────────────────────────────────────────────

/// Length of one count-up run, first frame to final value.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Fraction of a stats container that must be on screen before counting starts.
pub const COUNTER_THRESHOLD: f64 = 0.2;

// ── Typing ──────────────────────────────────────────────────────

/// Time per typed character.
pub const TYPING_SPEED_MS: f64 = 100.0;

/// Time per deleted character.
pub const DELETING_SPEED_MS: f64 = 50.0;

/// Hold time after a phrase is fully typed or fully deleted.
pub const PAUSE_MS: f64 = 1500.0;

/// Fraction of the hero that must be on screen for the typing effect to run.
pub const TYPING_THRESHOLD: f64 = 0.5;

/// Headline phrases cycled by the hero typing effect.
pub const DEFAULT_PHRASES: [&str; 4] = ["scale profits.", "drive traffic.", "optimize campaigns.", "build growth."];

// ── Reveal ──────────────────────────────────────────────────────

/// Cooldown window for the section-reveal callback.
pub const REVEAL_THROTTLE_MS: f64 = 150.0;

/// Fraction of a section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// ── Menu ────────────────────────────────────────────────────────

/// Delay before the mobile menu closes after one of its links is clicked.
pub const MENU_CLOSE_DELAY_MS: u32 = 300;

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";
