//! Leading-edge throttling for high-frequency callbacks.
//!
//! DESIGN
//! ======
//! A single cooldown window per throttle. The first call after the window has
//! elapsed runs immediately; every call inside the window is dropped. There is
//! no queue and no trailing call.
//!
//! The window can end two ways: by timestamp (`now - last >= window`) or by an
//! explicit [`Throttle::release`], which the browser adapter calls from the one
//! timer it arms per executed call. Either is sufficient on its own.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Cooldown gate. Timestamps are milliseconds on any monotonic clock.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    window_ms: f64,
    last_fired_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self { window_ms, last_fired_ms: None }
    }

    /// Whether a call at `now_ms` would be dropped.
    #[must_use]
    pub fn is_cooling(&self, now_ms: f64) -> bool {
        self.last_fired_ms
            .is_some_and(|last| now_ms - last < self.window_ms)
    }

    /// Admit or drop a call at `now_ms`. Admitting starts a new window.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if self.is_cooling(now_ms) {
            log::trace!("throttle: dropped call inside {}ms window", self.window_ms);
            return false;
        }
        self.last_fired_ms = Some(now_ms);
        true
    }

    /// End the current window early.
    pub fn release(&mut self) {
        self.last_fired_ms = None;
    }
}

/// A callback paired with its own [`Throttle`].
pub struct Throttled<F> {
    callback: F,
    throttle: Throttle,
}

/// Wrap `callback` so it runs at most once per `window_ms`.
pub fn wrap<F>(callback: F, window_ms: f64) -> Throttled<F> {
    Throttled { callback, throttle: Throttle::new(window_ms) }
}

impl<F> Throttled<F> {
    pub fn release(&mut self) {
        self.throttle.release();
    }

    /// Invoke the callback with `arg` unless inside the cooldown window.
    ///
    /// Returns whether the callback ran.
    pub fn call<A>(&mut self, now_ms: f64, arg: A) -> bool
    where
        F: FnMut(A),
    {
        if !self.throttle.admit(now_ms) {
            return false;
        }
        (self.callback)(arg);
        true
    }
}
