//! Typing/deleting phrase cycler for the hero headline.
//!
//! DESIGN
//! ======
//! The cycler types a phrase one character at a time, holds it, deletes it
//! faster than it was typed, holds the empty line, then moves to the next
//! phrase. It never ends. Time comes in only through [`PhraseCycler::tick`],
//! which the host calls once per animation frame while the hero is visible.
//!
//! All timing state lives on the cycler itself, so two cyclers on one page do
//! not share accumulators and tests need no global reset.
//!
//! TIME ACCOUNTING
//! ===============
//! Every tick's delta is added to `total_delay_ms` exactly once, before any
//! threshold check. A character step or the end of a pause resets the
//! accumulator to zero and discards whatever overshoot that tick carried.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::MotionError;
use crate::consts::{DELETING_SPEED_MS, PAUSE_MS, TYPING_SPEED_MS};
use crate::visibility::Visibility;

/// Per-character and pause durations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypingTimings {
    pub typing_speed_ms: f64,
    pub deleting_speed_ms: f64,
    pub pause_ms: f64,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self { typing_speed_ms: TYPING_SPEED_MS, deleting_speed_ms: DELETING_SPEED_MS, pause_ms: PAUSE_MS }
    }
}

impl TypingTimings {
    pub fn validate(&self) -> Result<(), MotionError> {
        check_duration("typing.typing_speed_ms", self.typing_speed_ms)?;
        check_duration("typing.deleting_speed_ms", self.deleting_speed_ms)?;
        check_duration("typing.pause_ms", self.pause_ms)?;
        Ok(())
    }
}

pub(crate) fn check_duration(field: &'static str, value: f64) -> Result<f64, MotionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MotionError::InvalidDuration { field, value })
    }
}

/// Which of the three visible behaviors the cycler is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
    Paused,
}

/// Cursor and timing state for one cycler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhraseCycleState {
    pub phrase_index: usize,
    /// Characters of the current phrase on screen.
    pub char_index: usize,
    pub is_deleting: bool,
    pub is_paused: bool,
    pub last_frame_ms: Option<f64>,
    pub total_delay_ms: f64,
}

impl Default for PhraseCycleState {
    fn default() -> Self {
        Self {
            phrase_index: 0,
            char_index: 0,
            is_deleting: false,
            is_paused: false,
            last_frame_ms: None,
            total_delay_ms: 0.0,
        }
    }
}

/// What the host should do with its pending animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// Request a frame; the cycler just started.
    Start,
    /// Cancel any pending frame; the cycler just stopped.
    Stop,
    /// Leave the current frame loop alone.
    Unchanged,
}

/// Result of one [`PhraseCycler::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Request another frame.
    pub reschedule: bool,
    /// The displayed text changed and should be written out.
    pub text_changed: bool,
}

impl Tick {
    const HALT: Self = Self { reschedule: false, text_changed: false };
    const IDLE: Self = Self { reschedule: true, text_changed: false };
    const STEP: Self = Self { reschedule: true, text_changed: true };
}

#[derive(Debug)]
pub struct PhraseCycler {
    phrases: Vec<String>,
    timings: TypingTimings,
    state: PhraseCycleState,
    observing: bool,
}

impl PhraseCycler {
    /// Build a cycler. Fails on an empty list, an empty phrase, or a
    /// non-positive timing.
    pub fn new(phrases: Vec<String>, timings: TypingTimings) -> Result<Self, MotionError> {
        if phrases.is_empty() {
            return Err(MotionError::NoPhrases);
        }
        if let Some(index) = phrases.iter().position(String::is_empty) {
            return Err(MotionError::EmptyPhrase { index });
        }
        timings.validate()?;
        Ok(Self { phrases, timings, state: PhraseCycleState::default(), observing: false })
    }

    #[must_use]
    pub fn state(&self) -> &PhraseCycleState {
        &self.state
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.state.is_paused {
            Phase::Paused
        } else if self.state.is_deleting {
            Phase::Deleting
        } else {
            Phase::Typing
        }
    }

    fn current_phrase(&self) -> &str {
        &self.phrases[self.state.phrase_index]
    }

    /// Text currently on screen.
    #[must_use]
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.state.char_index)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    /// Start on visible, stop on hidden.
    ///
    /// Stopping clears frame timing only; the phrase, cursor and direction are
    /// kept so a later start resumes mid-phrase.
    pub fn on_visibility_change(&mut self, visibility: Visibility) -> FrameRequest {
        match visibility {
            Visibility::Visible if self.observing => FrameRequest::Unchanged,
            Visibility::Visible => {
                self.observing = true;
                log::debug!("phrase cycler resumed at phrase {} char {}", self.state.phrase_index, self.state.char_index);
                FrameRequest::Start
            }
            Visibility::Hidden => {
                self.observing = false;
                self.state.last_frame_ms = None;
                self.state.total_delay_ms = 0.0;
                log::debug!("phrase cycler paused");
                FrameRequest::Stop
            }
        }
    }

    /// Advance to frame time `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Tick {
        if !self.observing {
            return Tick::HALT;
        }

        let last = self.state.last_frame_ms.unwrap_or(now_ms);
        let delta = (now_ms - last).max(0.0);
        self.state.last_frame_ms = Some(now_ms);
        self.state.total_delay_ms += delta;

        if self.state.is_paused {
            if self.state.total_delay_ms >= self.timings.pause_ms {
                self.state.is_paused = false;
                self.state.total_delay_ms = 0.0;
            }
            return Tick::IDLE;
        }

        let speed = if self.state.is_deleting { self.timings.deleting_speed_ms } else { self.timings.typing_speed_ms };
        if self.state.total_delay_ms < speed {
            return Tick::IDLE;
        }
        self.state.total_delay_ms = 0.0;
        self.step();
        Tick::STEP
    }

    fn step(&mut self) {
        if self.state.is_deleting {
            self.state.char_index = self.state.char_index.saturating_sub(1);
            if self.state.char_index == 0 {
                self.state.is_deleting = false;
                self.state.phrase_index = (self.state.phrase_index + 1) % self.phrases.len();
                self.state.is_paused = true;
            }
        } else {
            self.state.char_index += 1;
            if self.state.char_index >= self.current_phrase().chars().count() {
                self.state.is_deleting = true;
                self.state.is_paused = true;
            }
        }
    }
}
