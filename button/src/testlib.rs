//! Drive buttons through scripted signals in tests.

use crate::button::Button;
use crate::config::ButtonConfig;
use crate::event::Event;
use crate::Millis;

/// Sampling period of the simulated control loop.
pub const TICK_MS: Millis = 1;

/// How many times each event was observed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub pressed: usize,
    pub released: usize,
    pub clicked: usize,
    pub single_clicked: usize,
    pub double_clicked: usize,
    pub long_pressed: usize,
}

impl Tally {
    pub fn count(&mut self, event: Event) {
        let counter = match event {
            Event::Pressed => &mut self.pressed,
            Event::Released => &mut self.released,
            Event::Clicked => &mut self.clicked,
            Event::SingleClicked => &mut self.single_clicked,
            Event::DoubleClicked => &mut self.double_clicked,
            Event::LongPressed => &mut self.long_pressed,
        };
        *counter += 1;
    }
}

/// A button sampled every `TICK_MS`, with all its events collected.
pub struct Simulator<'a> {
    pub button: Button<'a>,
    pub now: Millis,
    pub tally: Tally,
}

impl<'a> Simulator<'a> {
    pub fn new(config: &'a ButtonConfig) -> Self {
        Self {
            button: Button::with_config(config),
            now: 0,
            tally: Tally::default(),
        }
    }

    pub fn sample(&mut self, level: bool) {
        self.button.update(level, self.now);
        for event in self.button.take_events().iter() {
            self.tally.count(event);
        }
        self.now += TICK_MS;
    }

    /// Keep the level steady for the given time.
    pub fn hold(&mut self, level: bool, duration: Millis) {
        for _ in 0..duration / TICK_MS {
            self.sample(level);
        }
    }

    /// Chatter between levels, starting with the given one and flipping
    /// every `period` milliseconds.
    pub fn bounce(&mut self, level: bool, duration: Millis, period: Millis) {
        for i in 0..duration / TICK_MS {
            let flipped = (i * TICK_MS / period) % 2 == 1;
            self.sample(level != flipped);
        }
    }
}
