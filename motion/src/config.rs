//! Tunable timings, thresholds and phrases.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! reproduces the stock page. The browser adapter reads an optional JSON blob
//! from the page; [`MotionConfig::from_json`] parses and validates it in one
//! step so callers never hold an unchecked config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::MotionError;
use crate::consts::{
    COUNTER_DURATION_MS, COUNTER_THRESHOLD, DEFAULT_PHRASES, DELETING_SPEED_MS, MENU_CLOSE_DELAY_MS, PAUSE_MS,
    REVEAL_THRESHOLD, REVEAL_THROTTLE_MS, TYPING_SPEED_MS, TYPING_THRESHOLD,
};
use crate::typing::{PhraseCycler, TypingTimings, check_duration};
use crate::visibility::check_threshold;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    pub counter: CounterConfig,
    pub typing: TypingConfig,
    pub reveal: RevealConfig,
    pub menu: MenuConfig,
    /// `log` level name for the browser console.
    pub log_level: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter: CounterConfig::default(),
            typing: TypingConfig::default(),
            reveal: RevealConfig::default(),
            menu: MenuConfig::default(),
            log_level: "warn".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    pub duration_ms: f64,
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { duration_ms: COUNTER_DURATION_MS, threshold: COUNTER_THRESHOLD }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    pub typing_speed_ms: f64,
    pub deleting_speed_ms: f64,
    pub pause_ms: f64,
    pub threshold: f64,
    pub phrases: Vec<String>,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: TYPING_SPEED_MS,
            deleting_speed_ms: DELETING_SPEED_MS,
            pause_ms: PAUSE_MS,
            threshold: TYPING_THRESHOLD,
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

impl TypingConfig {
    #[must_use]
    pub fn timings(&self) -> TypingTimings {
        TypingTimings {
            typing_speed_ms: self.typing_speed_ms,
            deleting_speed_ms: self.deleting_speed_ms,
            pause_ms: self.pause_ms,
        }
    }

    pub fn cycler(&self) -> Result<PhraseCycler, MotionError> {
        PhraseCycler::new(self.phrases.clone(), self.timings())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub throttle_ms: f64,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { throttle_ms: REVEAL_THROTTLE_MS, threshold: REVEAL_THRESHOLD }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    pub close_delay_ms: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { close_delay_ms: MENU_CLOSE_DELAY_MS }
    }
}

impl MotionConfig {
    /// Parse and validate a JSON config blob.
    pub fn from_json(raw: &str) -> Result<Self, MotionError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        check_duration("counter.duration_ms", self.counter.duration_ms)?;
        check_threshold("counter.threshold", self.counter.threshold)?;
        check_threshold("typing.threshold", self.typing.threshold)?;
        check_duration("reveal.throttle_ms", self.reveal.throttle_ms)?;
        check_threshold("reveal.threshold", self.reveal.threshold)?;
        self.typing.cycler()?;
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, MotionError> {
        log::LevelFilter::from_str(&self.log_level).map_err(|_| MotionError::UnknownLogLevel(self.log_level.clone()))
    }
}
