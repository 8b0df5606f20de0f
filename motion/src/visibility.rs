//! Visibility signals and the one-shot trackers built on them.
//!
//! The browser reports intersection changes as batches of records. This module
//! reduces each record to a [`Transition`] and leaves "what happens next" to
//! small trackers:
//!
//! - [`RevealTracker`] reveals each watched element the first time it
//!   intersects, then stops watching it, except for one pinned element.
//! - [`OneShotTrigger`] fires once for a watched region, ever.
//!
//! Components that run continuously (the phrase cycler) take the raw
//! [`Visibility`] signal through their own `on_visibility_change`.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::collections::HashSet;
use std::hash::Hash;

/// Two-state visibility signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn from_intersecting(is_intersecting: bool) -> Self {
        if is_intersecting { Self::Visible } else { Self::Hidden }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// One record from an intersection batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<K> {
    pub target: K,
    pub visibility: Visibility,
}

impl<K> Transition<K> {
    #[must_use]
    pub fn new(target: K, is_intersecting: bool) -> Self {
        Self { target, visibility: Visibility::from_intersecting(is_intersecting) }
    }
}

/// Validate an observer threshold.
pub fn check_threshold(field: &'static str, value: f64) -> Result<f64, crate::MotionError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(crate::MotionError::InvalidThreshold { field, value })
    }
}

// =============================================================================
// REVEAL
// =============================================================================

/// Instruction to apply the terminal reveal style to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal<K> {
    pub target: K,
    /// Whether the host should stop observing `target`.
    pub unwatch: bool,
}

/// Tracks which elements still need their one-shot fade-in.
#[derive(Debug)]
pub struct RevealTracker<K> {
    watched: HashSet<K>,
    pinned: Option<K>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    /// `pinned` stays watched after it is revealed because another observer
    /// owns its completion.
    #[must_use]
    pub fn new(pinned: Option<K>) -> Self {
        Self { watched: HashSet::new(), pinned }
    }

    pub fn watch(&mut self, target: K) {
        self.watched.insert(target);
    }

    /// Process one intersection batch.
    ///
    /// Records for elements already unwatched are ignored; the host may deliver
    /// records queued before it stopped observing.
    pub fn on_batch<I>(&mut self, batch: I) -> Vec<Reveal<K>>
    where
        I: IntoIterator<Item = Transition<K>>,
    {
        let mut reveals = Vec::new();
        for Transition { target, visibility } in batch {
            if !visibility.is_visible() || !self.watched.contains(&target) {
                continue;
            }
            let pinned = self.pinned.as_ref() == Some(&target);
            if !pinned {
                self.watched.remove(&target);
            }
            reveals.push(Reveal { target, unwatch: !pinned });
        }
        reveals
    }
}

// =============================================================================
// ONE-SHOT TRIGGER
// =============================================================================

/// Fires exactly once, on the first visible transition it sees.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneShotTrigger {
    fired: bool,
}

impl OneShotTrigger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns `true` only for the transition that fires the trigger.
    pub fn on_visibility_change(&mut self, visibility: Visibility) -> bool {
        if self.fired || !visibility.is_visible() {
            return false;
        }
        self.fired = true;
        true
    }

    /// Process a batch; returns `true` if any record fired the trigger.
    pub fn on_batch<K, I>(&mut self, batch: I) -> bool
    where
        I: IntoIterator<Item = Transition<K>>,
    {
        let mut fired = false;
        for transition in batch {
            fired |= self.on_visibility_change(transition.visibility);
        }
        fired
    }
}
