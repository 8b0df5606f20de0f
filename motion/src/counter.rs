//! Count-up animation for headline statistics.
//!
//! A counter element carries an integer target and a display format. When its
//! group scrolls into view it runs once: each animation frame maps elapsed time
//! to linear progress, progress to an integer value, and the value to display
//! text. The last frame always renders the formatted target itself, so the
//! final text never depends on floating-point drift in intermediate frames.
//!
//! TRADE-OFFS
//! ==========
//! Targets that do not parse as integers are not rejected. They render as
//! `NaN` plus the format suffix, which keeps one bad attribute from disabling
//! the rest of the group.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::visibility::{OneShotTrigger, Transition, Visibility};

// =============================================================================
// FORMAT
// =============================================================================

/// Display format selected by a counter's `data-format` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountFormat {
    /// Bare integer.
    #[default]
    Plain,
    /// `K+`: value in thousands, rounded.
    Thousands,
    /// `B+`: value in billions, rounded.
    Billions,
    /// `%`: integer followed by a percent sign.
    Percent,
    /// `+`: integer followed by a plus sign.
    Plus,
}

impl CountFormat {
    /// Map a raw attribute value. Absent or unknown tags render as plain numbers.
    #[must_use]
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("K+") => Self::Thousands,
            Some("B+") => Self::Billions,
            Some("%") => Self::Percent,
            Some("+") => Self::Plus,
            _ => Self::Plain,
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Thousands => "K+",
            Self::Billions => "B+",
            Self::Percent => "%",
            Self::Plus => "+",
        }
    }

    fn divisor(self) -> Option<u64> {
        match self {
            Self::Thousands => Some(1_000),
            Self::Billions => Some(1_000_000_000),
            Self::Plain | Self::Percent | Self::Plus => None,
        }
    }
}

/// Parse a `data-target` attribute the way browsers parse integer attributes:
/// leading whitespace and sign are accepted, and parsing stops at the first
/// non-digit. `None` means not-a-number.
#[must_use]
pub fn parse_target(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let Ok(magnitude) = rest[..digits_len].parse::<i64>() else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Format `value` for display. `None` renders as `NaN`.
#[must_use]
pub fn format_count(value: Option<i64>, format: CountFormat) -> String {
    let Some(value) = value else {
        return format!("NaN{}", format.suffix());
    };
    let shown = match format.divisor() {
        Some(divisor) => round_div(value, divisor),
        None => value,
    };
    format!("{shown}{}", format.suffix())
}

/// Integer division rounding half away from zero.
fn round_div(value: i64, divisor: u64) -> i64 {
    let quotient = (value.unsigned_abs() + divisor / 2) / divisor;
    let quotient = i64::try_from(quotient).unwrap_or(i64::MAX);
    if value < 0 { -quotient } else { quotient }
}

// =============================================================================
// CLOCK
// =============================================================================

/// Maps frame timestamps to linear progress in `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct AnimationClock {
    duration_ms: f64,
    start_ms: Option<f64>,
    progress: f64,
}

impl AnimationClock {
    #[must_use]
    pub fn new(duration_ms: f64) -> Self {
        Self { duration_ms, start_ms: None, progress: 0.0 }
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Advance to frame time `now_ms`. The first call fixes the start time.
    ///
    /// Progress never decreases, even if the host hands back an earlier
    /// timestamp.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let start = *self.start_ms.get_or_insert(now_ms);
        let raw = if self.duration_ms > 0.0 { (now_ms - start) / self.duration_ms } else { 1.0 };
        let clamped = if raw.is_nan() { self.progress } else { raw.clamp(0.0, 1.0) };
        self.progress = self.progress.max(clamped);
        self.progress
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

/// Everything needed to render a counter at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayState {
    pub target: Option<i64>,
    pub format: CountFormat,
    pub progress: f64,
}

impl DisplayState {
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.progress >= 1.0
    }

    /// Integer shown at this progress: `floor(progress * target)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn value(&self) -> Option<i64> {
        let target = self.target?;
        if self.is_final() {
            return Some(target);
        }
        Some((self.progress * target as f64).floor() as i64)
    }

    #[must_use]
    pub fn text(&self) -> String {
        format_count(self.value(), self.format)
    }
}

// =============================================================================
// RUN
// =============================================================================

/// One frame's output from a [`CounterRun`].
#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    /// No further frames should be scheduled.
    pub done: bool,
}

/// A single count-up from zero to the target.
#[derive(Clone, Copy, Debug)]
pub struct CounterRun {
    target: Option<i64>,
    format: CountFormat,
    clock: AnimationClock,
}

impl CounterRun {
    #[must_use]
    pub fn new(target: Option<i64>, format: CountFormat, duration_ms: f64) -> Self {
        Self { target, format, clock: AnimationClock::new(duration_ms) }
    }

    #[must_use]
    pub fn display(&self) -> DisplayState {
        DisplayState { target: self.target, format: self.format, progress: self.clock.progress() }
    }

    pub fn tick(&mut self, now_ms: f64) -> CounterFrame {
        self.clock.advance(now_ms);
        let display = self.display();
        CounterFrame { text: display.text(), done: display.is_final() }
    }
}

// =============================================================================
// ELEMENTS
// =============================================================================

/// A counter on the page, identified by its position in its group.
///
/// `animated` mirrors the `animated` class on the page element, so an element
/// that is already marked (by markup or by another group) never runs again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterElement {
    pub target: Option<i64>,
    pub format: CountFormat,
    animated: bool,
}

impl CounterElement {
    #[must_use]
    pub fn new(target: Option<i64>, format: CountFormat, animated: bool) -> Self {
        Self { target, format, animated }
    }

    /// Build from raw `data-target` / `data-format` attribute values and
    /// whether the element is already marked animated.
    #[must_use]
    pub fn from_attrs(target: Option<&str>, format: Option<&str>, animated: bool) -> Self {
        Self::new(parse_target(target), CountFormat::from_attr(format), animated)
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Start this element's run. Returns `None` if it has already started.
    ///
    /// The flag is set before the run is handed out, so a second call made
    /// before the first run finishes is a no-op.
    pub fn animate(&mut self, duration_ms: f64) -> Option<CounterRun> {
        if self.is_animated() {
            return None;
        }
        self.animated = true;
        Some(CounterRun::new(self.target, self.format, duration_ms))
    }
}

/// Counters that start together when their container first becomes visible.
#[derive(Debug)]
pub struct CounterGroup {
    trigger: OneShotTrigger,
    members: Vec<CounterElement>,
    duration_ms: f64,
}

impl CounterGroup {
    #[must_use]
    pub fn new(members: Vec<CounterElement>, duration_ms: f64) -> Self {
        Self { trigger: OneShotTrigger::new(), members, duration_ms }
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.trigger.has_fired()
    }

    /// Feed a container transition. On the first visible one, returns a run
    /// for every member that has not already animated, keyed by member index.
    pub fn on_visibility_change(&mut self, visibility: Visibility) -> Vec<(usize, CounterRun)> {
        if !self.trigger.on_visibility_change(visibility) {
            return Vec::new();
        }
        self.start_members()
    }

    /// Feed one intersection batch for the container. Same result as
    /// [`Self::on_visibility_change`] applied to each record in turn.
    pub fn on_batch<K, I>(&mut self, batch: I) -> Vec<(usize, CounterRun)>
    where
        I: IntoIterator<Item = Transition<K>>,
    {
        if !self.trigger.on_batch(batch) {
            return Vec::new();
        }
        self.start_members()
    }

    fn start_members(&mut self) -> Vec<(usize, CounterRun)> {
        let duration_ms = self.duration_ms;
        let runs: Vec<_> = self
            .members
            .iter_mut()
            .enumerate()
            .filter_map(|(i, member)| member.animate(duration_ms).map(|run| (i, run)))
            .collect();
        log::debug!("counter group fired: {} of {} members started", runs.len(), self.members.len());
        runs
    }
}
