// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A command was rejected because it is invalid in the current state.
    ///
    /// The timer fields are left untouched when one of these is returned;
    /// the runtime surfaces them as plain replies, never as failures.
    InvalidState(StateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// start while the timer is already counting.
    AlreadyRunning,

    /// pause while the timer is not counting.
    NotRunning,

    /// reset while the timer is still counting; pause first.
    ResetWhileRunning,

    /// reset with nothing accumulated; there is no session to record.
    NothingToRecord,
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::AlreadyRunning =>
                write!(f, "timer is already running"),
            StateError::NotRunning =>
                write!(f, "timer is not running"),
            StateError::ResetWhileRunning =>
                write!(f, "timer is running; pause before resetting"),
            StateError::NothingToRecord =>
                write!(f, "no accumulated time to record"),
        }
    }
}

impl std::error::Error for Error {}
