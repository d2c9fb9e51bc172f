//! Click detection for a single digital button, or a bank of them.
//!
//! The library does not touch any hardware. The caller samples the pin,
//! translates the electrical level into "is the button asserted" and passes
//! it together with the current time into [`Button::update`]. The button
//! filters contact bounce and reconstructs press, release, click, single
//! click, double click and long press events out of it.
//!
//! ```text
//!   [ Pin ] --(level)--> [ Debouncer ] --(transition)--> [ Phases ]
//!                                                            |
//!      [ Clock ] --(now)------------------------------------>+
//!                                                            V
//!                                                        {Events}
//! ```
//!
//! Events are one-shot. They are available right after the `update` that
//! produced them and each of them can be taken only once:
//!
//! ```
//! use multibutton::Button;
//!
//! let mut button = Button::new();
//! let mut now = 0;
//! for level in [true, true, false, false] {
//!     button.update(level, now);
//!     if button.take_clicked() {
//!         // React to the click.
//!     }
//!     now += 60;
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

pub mod bank;
pub mod button;
pub mod config;
pub mod debounce;
pub mod event;

mod log;

#[cfg(test)]
mod testlib;

pub use crate::bank::Buttons;
pub use crate::button::{Button, Phase};
pub use crate::config::{ButtonConfig, Error, DEFAULT_CONFIG};
pub use crate::event::{Event, Events};

/// Monotonic time in milliseconds, as provided by the caller's clock.
pub type Millis = u64;
