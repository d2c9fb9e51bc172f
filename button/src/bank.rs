//! Process a group of buttons over time.

use core::ops::{Index, IndexMut};

use crate::button::Button;
use crate::config::{ButtonConfig, DEFAULT_CONFIG};
use crate::event::Events;
use crate::Millis;

/// Stateful store of multiple buttons sampled together.
///
/// All the buttons share one configuration. The caller reads all the pins
/// at once and passes their levels in a single `update`.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons<'a, const N: usize> {
    buttons: [Button<'a>; N],
}

impl<const N: usize> Buttons<'static, N> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&DEFAULT_CONFIG)
    }
}

impl<const N: usize> Default for Buttons<'static, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> Buttons<'a, N> {
    #[must_use]
    pub fn with_config(config: &'a ButtonConfig) -> Self {
        Self {
            buttons: [Button::with_config(config); N],
        }
    }

    pub fn update(&mut self, levels: [bool; N], now: Millis) {
        for (button, level) in self.buttons.iter_mut().zip(levels) {
            button.update(level, now);
        }
    }

    /// Take pending events of all buttons, indexed the same way as buttons.
    pub fn take_events(&mut self) -> [Events; N] {
        let mut events = [Events::empty(); N];
        for (slot, button) in events.iter_mut().zip(self.buttons.iter_mut()) {
            *slot = button.take_events();
        }
        events
    }

    /// Whether any of the buttons is down.
    #[must_use]
    pub fn any_pressed(&self) -> bool {
        self.buttons.iter().any(Button::is_pressed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button<'a>> {
        self.buttons.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Button<'a>> {
        self.buttons.iter_mut()
    }
}

impl<'a, const N: usize> Index<usize> for Buttons<'a, N> {
    type Output = Button<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buttons[index]
    }
}

impl<'a, const N: usize> IndexMut<usize> for Buttons<'a, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buttons[index]
    }
}
