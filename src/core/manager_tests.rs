// License: MIT

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::action::Action;
use crate::core::config::Config;
use crate::core::error::{Error, StateError};
use crate::core::events::Event;
use crate::core::manager::Manager;
use crate::core::state::State;
use crate::store::record::{LastSession, Record};

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 27)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn t(secs: i64) -> NaiveDateTime {
    t0() + chrono::Duration::seconds(secs)
}

fn fresh() -> (Manager, State) {
    (
        Manager::new(Config::default()),
        State::new(t0(), Record::default()),
    )
}

#[test]
fn pause_captures_elapsed_interval() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();
    mgr.handle_event(&mut state, Event::PauseTimer { now: t(90) })
        .unwrap();

    assert!(!state.running());
    assert_eq!(state.accumulated_seconds(), 90.0);
    assert_eq!(state.paused_time(), Some(t(90)));
}

#[test]
fn second_pause_is_rejected_and_leaves_state_unchanged() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();
    mgr.handle_event(&mut state, Event::PauseTimer { now: t(90) })
        .unwrap();

    let err = mgr
        .handle_event(&mut state, Event::PauseTimer { now: t(95) })
        .unwrap_err();

    assert_eq!(err, Error::InvalidState(StateError::NotRunning));
    assert_eq!(state.accumulated_seconds(), 90.0);
    assert_eq!(state.paused_time(), Some(t(90)));
}

#[test]
fn resume_is_time_preserving() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();
    mgr.handle_event(&mut state, Event::PauseTimer { now: t(90) })
        .unwrap();

    // Resume 60 seconds later; a tick at the same instant must still read 90.
    mgr.handle_event(&mut state, Event::StartTimer { now: t(150) })
        .unwrap();
    mgr.handle_event(&mut state, Event::Tick { now: t(150) })
        .unwrap();

    assert!(state.running());
    assert!(state.paused_time().is_none());
    assert_eq!(state.accumulated_seconds(), 90.0);
}

#[test]
fn pause_resume_pause_accumulates_only_running_intervals() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();
    mgr.handle_event(&mut state, Event::PauseTimer { now: t(90) })
        .unwrap();
    mgr.handle_event(&mut state, Event::StartTimer { now: t(150) })
        .unwrap();
    mgr.handle_event(&mut state, Event::PauseTimer { now: t(200) })
        .unwrap();

    // 90s before the pause + 50s after the resume; the 60s gap is not counted.
    assert_eq!(state.accumulated_seconds(), 140.0);

    mgr.handle_event(&mut state, Event::ResetTimer { now: t(210) })
        .unwrap();

    let sessions = &state.record().sessions;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].duration, 140.0);
    assert_eq!(sessions[0].date, t(210).date());
    assert_eq!(sessions[0].end_time, t(210));
    assert_eq!(state.accumulated_seconds(), 0.0);
    assert!(state.start_time().is_none());
    assert!(state.paused_time().is_none());
}

#[test]
fn start_while_running_is_rejected_and_preserves_start_time() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();

    let err = mgr
        .handle_event(&mut state, Event::StartTimer { now: t(30) })
        .unwrap_err();

    assert_eq!(err, Error::InvalidState(StateError::AlreadyRunning));
    assert_eq!(state.start_time(), Some(t(0)));
}

#[test]
fn reset_while_running_is_rejected() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();
    mgr.handle_event(&mut state, Event::Tick { now: t(50) })
        .unwrap();

    let err = mgr
        .handle_event(&mut state, Event::ResetTimer { now: t(50) })
        .unwrap_err();

    assert_eq!(err, Error::InvalidState(StateError::ResetWhileRunning));
    assert!(state.running());
    assert_eq!(state.accumulated_seconds(), 50.0);
    assert!(state.record().sessions.is_empty());
}

#[test]
fn reset_with_nothing_accumulated_appends_no_entry() {
    let (mut mgr, mut state) = fresh();

    let err = mgr
        .handle_event(&mut state, Event::ResetTimer { now: t(5) })
        .unwrap_err();

    assert_eq!(err, Error::InvalidState(StateError::NothingToRecord));
    assert!(state.record().sessions.is_empty());
}

#[test]
fn tick_refreshes_live_elapsed_value() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();
    mgr.handle_event(&mut state, Event::Tick { now: t(1) })
        .unwrap();
    assert_eq!(state.accumulated_seconds(), 1.0);

    mgr.handle_event(&mut state, Event::Tick { now: t(42) })
        .unwrap();
    assert_eq!(state.accumulated_seconds(), 42.0);
}

#[test]
fn snapshot_projects_live_session_into_today_and_total_only_while_running() {
    let mut record = Record::default();
    record.total_seconds = 1000.0;
    record.today_seconds = 200.0;

    let mut mgr = Manager::new(Config::default());
    let mut state = State::new(t0(), record);

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();

    let snap = mgr.snapshot(&state, t(60));
    assert!(snap.running);
    assert_eq!(snap.session_seconds, 60.0);
    assert_eq!(snap.today_seconds, 260.0);
    assert_eq!(snap.total_seconds, 1060.0);
    assert_eq!(snap.session, "00:01:00");

    // The projection is display-only; the stored totals are untouched.
    assert_eq!(state.record().today_seconds, 200.0);
    assert_eq!(state.record().total_seconds, 1000.0);

    mgr.handle_event(&mut state, Event::PauseTimer { now: t(60) })
        .unwrap();

    let snap = mgr.snapshot(&state, t(300));
    assert!(!snap.running);
    assert!(snap.paused);
    assert_eq!(snap.session_seconds, 60.0);
    assert_eq!(snap.today_seconds, 200.0);
    assert_eq!(snap.total_seconds, 1000.0);
}

#[test]
fn finalize_while_running_adds_live_elapsed_but_no_entry() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();

    mgr.finalize_on_close(&mut state, t(120));

    assert_eq!(state.record().total_seconds, 120.0);
    assert_eq!(state.record().today_seconds, 120.0);
    assert!(state.record().sessions.is_empty());
}

#[test]
fn finalize_while_paused_adds_accumulated_amount() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();
    mgr.handle_event(&mut state, Event::PauseTimer { now: t(75) })
        .unwrap();

    mgr.finalize_on_close(&mut state, t(500));

    assert_eq!(state.record().total_seconds, 75.0);
    assert_eq!(state.record().today_seconds, 75.0);
    assert!(state.record().sessions.is_empty());
}

#[test]
fn finalize_on_fresh_state_adds_nothing() {
    let (mut mgr, mut state) = fresh();

    mgr.finalize_on_close(&mut state, t(10));

    assert_eq!(state.record().total_seconds, 0.0);
    assert_eq!(state.record().today_seconds, 0.0);
}

#[test]
fn idle_check_pauses_after_threshold_and_notifies() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();

    // Under the threshold: nothing happens.
    let actions = mgr
        .handle_event(&mut state, Event::IdleCheck { now: t(300) })
        .unwrap();
    assert!(actions.is_empty());
    assert!(state.running());

    let actions = mgr
        .handle_event(&mut state, Event::IdleCheck { now: t(301) })
        .unwrap();
    assert_eq!(
        actions,
        vec![Action::Notify {
            message: "Timer paused due to inactivity".to_string()
        }]
    );
    assert!(!state.running());
    assert_eq!(state.accumulated_seconds(), 301.0);
}

#[test]
fn activity_defers_idle_pause() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();
    mgr.handle_event(&mut state, Event::UserActivity { now: t(200) })
        .unwrap();

    let actions = mgr
        .handle_event(&mut state, Event::IdleCheck { now: t(350) })
        .unwrap();

    assert!(actions.is_empty());
    assert!(state.running());
}

#[test]
fn idle_check_is_a_no_op_while_not_running() {
    let (mut mgr, mut state) = fresh();

    let actions = mgr
        .handle_event(&mut state, Event::IdleCheck { now: t(1000) })
        .unwrap();

    assert!(actions.is_empty());
    assert!(!state.running());
    assert!(state.paused_time().is_none());
}

#[test]
fn accumulated_time_is_restored_from_last_session() {
    let mut record = Record::default();
    record.last_session = LastSession {
        start_time: None,
        paused_time: Some(t(-3600)),
        accumulated_seconds: 480.0,
    };

    let state = State::new(t0(), record);

    assert!(!state.running());
    assert_eq!(state.accumulated_seconds(), 480.0);
    // The stored timestamps feed the rollover check only; the live timer
    // starts fresh.
    assert!(state.start_time().is_none());
    assert!(state.paused_time().is_none());
}

#[test]
fn sync_last_session_mirrors_live_timer_into_record() {
    let (mut mgr, mut state) = fresh();

    mgr.handle_event(&mut state, Event::StartTimer { now: t(0) })
        .unwrap();
    mgr.handle_event(&mut state, Event::PauseTimer { now: t(30) })
        .unwrap();

    state.sync_last_session();

    let last = &state.record().last_session;
    assert_eq!(last.start_time, Some(t(0)));
    assert_eq!(last.paused_time, Some(t(30)));
    assert_eq!(last.accumulated_seconds, 30.0);
}
