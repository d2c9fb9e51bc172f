//! One-shot events produced by a button.

/// Semantic event recognized from the button's signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Pressed,
    Released,
    /// Any short press followed by release, including both halves of a
    /// double click.
    Clicked,
    SingleClicked,
    DoubleClicked,
    LongPressed,
}

impl Event {
    pub const ALL: [Self; 6] = [
        Self::Pressed,
        Self::Released,
        Self::Clicked,
        Self::SingleClicked,
        Self::DoubleClicked,
        Self::LongPressed,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of events, each of them present at most once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Events(u8);

impl Events {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn contains(self, event: Event) -> bool {
        self.0 & event.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, event: Event) {
        self.0 |= event.bit();
    }

    /// Remove the event, returning whether it was present.
    pub fn take(&mut self, event: Event) -> bool {
        let present = self.contains(event);
        self.0 &= !event.bit();
        present
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn iter(self) -> impl Iterator<Item = Event> {
        Event::ALL.into_iter().filter(move |e| self.contains(*e))
    }
}

impl FromIterator<Event> for Events {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        let mut events = Self::empty();
        for event in iter {
            events.insert(event);
        }
        events
    }
}
