// License: MIT

use chrono::NaiveDateTime;

/// Inputs to the timer state machine.
///
/// Every event carries the wall-clock time it was observed at; the core never
/// reads the clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Display tick (1 second). Refreshes the live elapsed value.
    Tick {
        now: NaiveDateTime,
    },

    /// Idle-monitor tick (10 seconds). May force a pause.
    IdleCheck {
        now: NaiveDateTime,
    },

    /// User input observed by the presentation layer.
    UserActivity {
        now: NaiveDateTime,
    },

    StartTimer {
        now: NaiveDateTime,
    },

    PauseTimer {
        now: NaiveDateTime,
    },

    /// Close out the accumulated session into the history.
    ResetTimer {
        now: NaiveDateTime,
    },
}

impl Event {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Event::Tick { now }
            | Event::IdleCheck { now }
            | Event::UserActivity { now }
            | Event::StartTimer { now }
            | Event::PauseTimer { now }
            | Event::ResetTimer { now } => *now,
        }
    }
}
