// License: MIT

use chrono::NaiveDateTime;

use crate::store::record::{LastSession, Record};

/// Live timer state plus the in-memory persisted record.
///
/// Invariant on the timer fields: exactly one of
/// - running with `start_time` set,
/// - not running with `paused_time` set,
/// - not running with neither set (fresh / just reset)
///
/// holds, with one exception: right after startup the timer is fresh but may
/// carry `accumulated_seconds` restored from the previous run's
/// `last_session`. Starting from that state begins a new interval, matching
/// the behavior this record format has always had.
#[derive(Debug, Clone)]
pub struct State {
    // Timer
    running: bool,
    start_time: Option<NaiveDateTime>,
    paused_time: Option<NaiveDateTime>,
    accumulated_seconds: f64,

    // Idle monitor
    last_activity: NaiveDateTime,

    // Persisted record, loaded once at startup, written at shutdown/export.
    record: Record,
}

impl State {
    pub fn new(now: NaiveDateTime, record: Record) -> Self {
        let accumulated_seconds = record.last_session.accumulated_seconds;

        Self {
            running: false,
            start_time: None,
            paused_time: None,
            accumulated_seconds,
            last_activity: now,
            record,
        }
    }

    // ---------------- getters ----------------

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.start_time
    }

    pub fn paused_time(&self) -> Option<NaiveDateTime> {
        self.paused_time
    }

    pub fn accumulated_seconds(&self) -> f64 {
        self.accumulated_seconds
    }

    pub fn last_activity(&self) -> NaiveDateTime {
        self.last_activity
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    // ---------------- setters ----------------

    pub fn set_running(&mut self, v: bool) {
        self.running = v;
    }

    pub fn set_start_time(&mut self, v: Option<NaiveDateTime>) {
        self.start_time = v;
    }

    pub fn set_paused_time(&mut self, v: Option<NaiveDateTime>) {
        self.paused_time = v;
    }

    pub fn set_accumulated_seconds(&mut self, v: f64) {
        self.accumulated_seconds = v;
    }

    pub fn touch_activity(&mut self, now: NaiveDateTime) {
        self.last_activity = now;
    }

    // ---------------- cycle control ----------------

    /// Return the timer to the fresh state after a session has been recorded.
    pub fn clear_session(&mut self) {
        self.running = false;
        self.start_time = None;
        self.paused_time = None;
        self.accumulated_seconds = 0.0;
    }

    /// Mirror the live timer fields into the record's `last_session` so the
    /// next startup can resume the accumulated amount.
    pub fn sync_last_session(&mut self) {
        self.record.last_session = LastSession {
            start_time: self.start_time,
            paused_time: self.paused_time,
            accumulated_seconds: self.accumulated_seconds,
        };
    }
}
