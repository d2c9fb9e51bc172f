//! Timing thresholds shared by buttons.

use core::fmt;

/// Timing thresholds driving debouncing and click classification.
///
/// A configuration is never modified by a button. It is meant to be created
/// once and then shared by reference between as many buttons as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// A level change must stay stable at least this long to be accepted.
    pub debounce_ms: u32,
    /// The longest gap between a release and the next press for the two
    /// clicks to be counted as a double click.
    pub click_ms: u32,
    /// The press held at least this long is a long press.
    pub long_press_ms: u32,
}

/// Configuration used by buttons constructed through [`crate::Button::new`].
pub static DEFAULT_CONFIG: ButtonConfig = ButtonConfig::DEFAULT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    LongPressWithinDebounce,
    ClickWindowWithinDebounce,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LongPressWithinDebounce => {
                write!(f, "long press threshold must be longer than debounce")
            }
            Self::ClickWindowWithinDebounce => {
                write!(f, "click window must be longer than debounce")
            }
        }
    }
}

impl ButtonConfig {
    pub const DEFAULT: Self = Self {
        debounce_ms: 50,
        click_ms: 250,
        long_press_ms: 750,
    };

    /// Build a configuration where every event type can still occur.
    ///
    /// A release is accepted no sooner than `debounce_ms` after the press
    /// and the same holds for a press following a release. Thresholds that
    /// do not exceed the debounce would therefore silence clicks or double
    /// clicks completely.
    ///
    /// # Errors
    ///
    /// Returns `Error::LongPressWithinDebounce` when `long_press_ms` is not
    /// longer than `debounce_ms`, and `Error::ClickWindowWithinDebounce`
    /// when `click_ms` is not longer than `debounce_ms`.
    pub const fn new(debounce_ms: u32, click_ms: u32, long_press_ms: u32) -> Result<Self, Error> {
        if long_press_ms <= debounce_ms {
            return Err(Error::LongPressWithinDebounce);
        }
        if click_ms <= debounce_ms {
            return Err(Error::ClickWindowWithinDebounce);
        }
        Ok(Self {
            debounce_ms,
            click_ms,
            long_press_ms,
        })
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_defaults_are_requested_they_match_the_shared_default() {
        assert_eq!(ButtonConfig::default(), DEFAULT_CONFIG);
        assert_eq!(DEFAULT_CONFIG.debounce_ms, 50);
        assert_eq!(DEFAULT_CONFIG.click_ms, 250);
        assert_eq!(DEFAULT_CONFIG.long_press_ms, 750);
    }

    #[test]
    fn when_thresholds_exceed_debounce_it_builds_config() {
        let config = ButtonConfig::new(10, 200, 500).unwrap();
        assert_eq!(config.debounce_ms, 10);
        assert_eq!(config.click_ms, 200);
        assert_eq!(config.long_press_ms, 500);
    }

    #[test]
    fn when_long_press_is_within_debounce_it_fails() {
        assert_eq!(
            ButtonConfig::new(50, 250, 50),
            Err(Error::LongPressWithinDebounce)
        );
    }

    #[test]
    fn when_click_window_is_within_debounce_it_fails() {
        assert_eq!(
            ButtonConfig::new(50, 20, 750),
            Err(Error::ClickWindowWithinDebounce)
        );
    }

    #[test]
    fn when_defaults_are_rebuilt_through_validation_they_pass() {
        let config = ButtonConfig::new(
            DEFAULT_CONFIG.debounce_ms,
            DEFAULT_CONFIG.click_ms,
            DEFAULT_CONFIG.long_press_ms,
        );
        assert_eq!(config, Ok(DEFAULT_CONFIG));
    }
}
