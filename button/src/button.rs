//! Manage button's state.

use crate::config::{ButtonConfig, DEFAULT_CONFIG};
use crate::debounce::Debouncer;
use crate::event::{Event, Events};
use crate::log;
use crate::Millis;

/// Use this to hold button's state over time.
///
/// Call `update` regularly with the current level of the button (`true`
/// meaning pressed) and the current time. Events recognized during that
/// update can be then taken through the `take_*` methods. Each event is
/// returned only once and all of them are discarded on the next `update`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button<'a> {
    config: &'a ButtonConfig,
    debouncer: Debouncer,
    phase: Phase,
    pending_clicks: u8,
    events: Events,
    last_update: Option<Millis>,
}

/// The current stage of click recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Idle,
    Pressed { since: Millis },
    LongPressed,
    WaitingForSecondClick { since: Millis },
}

impl Button<'static> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&DEFAULT_CONFIG)
    }
}

impl Default for Button<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn with_config(config: &'a ButtonConfig) -> Self {
        Self {
            config,
            debouncer: Debouncer::new(),
            phase: Phase::Idle,
            pending_clicks: 0,
            events: Events::empty(),
            last_update: None,
        }
    }

    /// Sample the button.
    ///
    /// The `now` must not go backwards. An update with a time older than
    /// the previous one is ignored.
    pub fn update(&mut self, down: bool, now: Millis) {
        if let Some(last_update) = self.last_update {
            if now < last_update {
                log::debug!("Ignoring time regression now={:?} last={:?}", now, last_update);
                return;
            }
        }
        self.last_update = Some(now);
        self.events.clear();

        let transition = self.debouncer.update(down, now, self.config.debounce_ms);
        if let Some(level) = transition {
            log::debug!("Accepted level={:?} at={:?}", level, now);
        }

        self.expire_timers(now);

        match (transition, self.phase) {
            (Some(true), Phase::Idle | Phase::WaitingForSecondClick { .. }) => self.press(now),
            (Some(false), Phase::Pressed { .. }) => self.release_click(now),
            (Some(false), Phase::LongPressed) => self.release_long_press(),
            _ => (),
        }
    }

    fn expire_timers(&mut self, now: Millis) {
        match self.phase {
            Phase::Pressed { since } => {
                if now.saturating_sub(since) >= Millis::from(self.config.long_press_ms) {
                    log::info!("Long press");
                    self.events.insert(Event::LongPressed);
                    self.phase = Phase::LongPressed;
                }
            }
            Phase::WaitingForSecondClick { since } => {
                if now.saturating_sub(since) >= Millis::from(self.config.click_ms) {
                    log::info!("Single click");
                    self.events.insert(Event::SingleClicked);
                    self.pending_clicks = 0;
                    self.phase = Phase::Idle;
                }
            }
            Phase::Idle | Phase::LongPressed => (),
        }
    }

    fn press(&mut self, now: Millis) {
        self.events.insert(Event::Pressed);
        self.phase = Phase::Pressed { since: now };
    }

    fn release_click(&mut self, now: Millis) {
        self.events.insert(Event::Released);
        self.events.insert(Event::Clicked);
        if self.pending_clicks == 0 {
            self.pending_clicks = 1;
            self.phase = Phase::WaitingForSecondClick { since: now };
        } else {
            log::info!("Double click");
            self.events.insert(Event::DoubleClicked);
            self.pending_clicks = 0;
            self.phase = Phase::Idle;
        }
    }

    fn release_long_press(&mut self) {
        self.events.insert(Event::Released);
        self.pending_clicks = 0;
        self.phase = Phase::Idle;
    }

    /// Whether the button is down, after debouncing.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.debouncer.level()
    }

    pub fn take_pressed(&mut self) -> bool {
        self.events.take(Event::Pressed)
    }

    pub fn take_released(&mut self) -> bool {
        self.events.take(Event::Released)
    }

    /// Any click, be it a single one or a half of a double click.
    pub fn take_clicked(&mut self) -> bool {
        self.events.take(Event::Clicked)
    }

    /// A click that was not followed by another within the click window.
    pub fn take_single_clicked(&mut self) -> bool {
        self.events.take(Event::SingleClicked)
    }

    pub fn take_double_clicked(&mut self) -> bool {
        self.events.take(Event::DoubleClicked)
    }

    pub fn take_long_pressed(&mut self) -> bool {
        self.events.take(Event::LongPressed)
    }

    /// Take all events that were not taken yet.
    pub fn take_events(&mut self) -> Events {
        let events = self.events;
        self.events.clear();
        events
    }

    /// Peek at events that were not taken yet, without clearing them.
    #[must_use]
    pub fn events(&self) -> Events {
        self.events
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Clicks awaiting to be paired into a double click.
    #[must_use]
    pub fn pending_clicks(&self) -> u8 {
        self.pending_clicks
    }

    /// Time of the last accepted (debounced) level change.
    #[must_use]
    pub fn last_transition(&self) -> Option<Millis> {
        self.debouncer.last_transition()
    }

    #[must_use]
    pub fn config(&self) -> &'a ButtonConfig {
        self.config
    }
}
