//! Host-independent motion core for the marketing site's page behaviors.
//!
//! Everything in this crate is plain state driven by explicit millisecond
//! timestamps and explicit [`visibility::Visibility`] signals. The browser
//! adapter (`pagefx`) owns `requestAnimationFrame`, `IntersectionObserver`
//! and the DOM; it feeds timestamps and transitions in and writes the
//! resulting text and styles back out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`throttle`] | Drop-not-queue rate limiter for the section-reveal callback |
//! | [`visibility`] | Visibility signal, one-shot reveal tracking, one-shot group trigger |
//! | [`counter`] | Count-up formatting, animation clock, per-element one-shot runs |
//! | [`typing`] | Typing/deleting phrase cycler for the hero headline |
//! | [`theme`] | Light/dark preference model |
//! | [`menu`] | Mobile navigation open/closed model |
//! | [`config`] | Tunable durations, thresholds and phrases |
//! | [`consts`] | Default values shared by the modules above |
//! | [`error`] | Error type for configuration loading |

pub mod config;
pub mod consts;
pub mod counter;
pub mod error;
pub mod menu;
pub mod theme;
pub mod throttle;
pub mod typing;
pub mod visibility;

pub use error::MotionError;
