// License: MIT

use chrono::{Duration, NaiveDateTime};

use crate::core::{
    action::Action,
    config::Config,
    error::{Error, StateError},
    events::Event,
    info::StatusSnapshot,
    state::State,
    utils::seconds_between,
};
use crate::store::record::SessionEntry;

/// The timer state machine.
///
/// Pure with respect to time and IO: every decision is made from the event's
/// timestamp and the given `State`, and side effects come back as `Action`s
/// for the runtime to execute.
pub struct Manager {
    cfg: Config,
}

impl Manager {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn handle_event(
        &mut self,
        state: &mut State,
        event: Event,
    ) -> Result<Vec<Action>, Error> {
        let now = event.now();
        let mut out = Vec::new();

        match event {
            Event::Tick { .. } => {
                // While running, the recomputed live value is authoritative.
                if state.running() {
                    if let Some(start) = state.start_time() {
                        state.set_accumulated_seconds(seconds_between(start, now));
                    }
                }
            }

            Event::IdleCheck { .. } => {
                let idle_for = seconds_between(state.last_activity(), now);

                if state.running() && idle_for > self.cfg.idle_threshold_seconds as f64 {
                    self.pause(state, now);

                    if self.cfg.notify_on_idle_pause {
                        out.push(Action::Notify {
                            message: "Timer paused due to inactivity".to_string(),
                        });
                    }
                }
            }

            Event::UserActivity { .. } => {
                state.touch_activity(now);
            }

            Event::StartTimer { .. } => {
                state.touch_activity(now);

                if state.running() {
                    return Err(Error::InvalidState(StateError::AlreadyRunning));
                }

                self.start(state, now);
            }

            Event::PauseTimer { .. } => {
                state.touch_activity(now);

                if !state.running() {
                    return Err(Error::InvalidState(StateError::NotRunning));
                }

                self.pause(state, now);
            }

            Event::ResetTimer { .. } => {
                state.touch_activity(now);

                if state.running() {
                    return Err(Error::InvalidState(StateError::ResetWhileRunning));
                }
                if state.accumulated_seconds() <= 0.0 {
                    return Err(Error::InvalidState(StateError::NothingToRecord));
                }

                self.reset(state, now);
            }
        }

        Ok(out)
    }

    /// Status projection for display. Today/total include the live session
    /// only while running; nothing here touches the record.
    pub fn snapshot(&self, state: &State, now: NaiveDateTime) -> StatusSnapshot {
        let session = if state.running() {
            match state.start_time() {
                Some(start) => seconds_between(start, now),
                None => state.accumulated_seconds(),
            }
        } else {
            state.accumulated_seconds()
        };

        let live = if state.running() { session } else { 0.0 };
        let record = state.record();

        StatusSnapshot::new(
            state.running(),
            !state.running() && state.paused_time().is_some(),
            session,
            record.today_seconds + live,
            record.total_seconds + live,
        )
    }

    /// Fold the final elapsed contribution into the cumulative totals.
    ///
    /// Closing while running or paused donates time to the lifetime totals
    /// but never appends a history entry; only an explicit reset does that.
    pub fn finalize_on_close(&self, state: &mut State, now: NaiveDateTime) {
        if state.running() {
            if let Some(start) = state.start_time() {
                let elapsed = seconds_between(start, now);
                let record = state.record_mut();
                record.total_seconds += elapsed;
                record.today_seconds += elapsed;
            }
        } else if state.paused_time().is_some() && state.accumulated_seconds() > 0.0 {
            let amount = state.accumulated_seconds();
            let record = state.record_mut();
            record.total_seconds += amount;
            record.today_seconds += amount;
        }
    }

    // ---------------- transitions ----------------

    fn start(&self, state: &mut State, now: NaiveDateTime) {
        if state.paused_time().is_some() {
            // Resume: rewind start_time so the elapsed value at this instant
            // equals the accumulated amount. The pause gap is not counted.
            let offset_ms = (state.accumulated_seconds() * 1000.0).round() as i64;
            state.set_start_time(Some(now - Duration::milliseconds(offset_ms)));
            state.set_paused_time(None);
        } else {
            state.set_start_time(Some(now));
        }

        state.set_running(true);
    }

    fn pause(&self, state: &mut State, now: NaiveDateTime) {
        state.set_running(false);
        state.set_paused_time(Some(now));

        // Missing start_time is not expected in normal flow; fall back to 0.
        let elapsed = match state.start_time() {
            Some(start) => seconds_between(start, now),
            None => 0.0,
        };
        state.set_accumulated_seconds(elapsed);
    }

    fn reset(&self, state: &mut State, now: NaiveDateTime) {
        let entry = SessionEntry {
            date: now.date(),
            duration: state.accumulated_seconds(),
            start_time: state.start_time(),
            end_time: now,
        };
        state.record_mut().sessions.push(entry);

        state.clear_session();
    }
}
