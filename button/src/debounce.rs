//! Filter contact bounce out of raw button samples.

use crate::Millis;

/// Accept level changes only once they stay stable for a while.
///
/// Call `update` with every raw sample. It returns the new level when a
/// change got accepted. A change that reverts before the debounce time
/// elapses is dropped and never shows up in `level`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    raw: bool,
    level: bool,
    candidate_since: Option<Millis>,
    last_transition: Option<Millis>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, raw: bool, now: Millis, debounce_ms: u32) -> Option<bool> {
        self.raw = raw;

        if raw == self.level {
            self.candidate_since = None;
            return None;
        }

        let since = *self.candidate_since.get_or_insert(now);
        if now.saturating_sub(since) < Millis::from(debounce_ms) {
            return None;
        }

        self.level = raw;
        self.candidate_since = None;
        self.last_transition = Some(now);
        Some(raw)
    }

    /// The last accepted level.
    #[must_use]
    pub fn level(&self) -> bool {
        self.level
    }

    /// The last sample, unfiltered.
    #[must_use]
    pub fn raw(&self) -> bool {
        self.raw
    }

    #[must_use]
    pub fn last_transition(&self) -> Option<Millis> {
        self.last_transition
    }
}
