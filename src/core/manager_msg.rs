// License: MIT

use std::path::PathBuf;

use tokio::sync::oneshot;

use crate::core::events::Event;

/// Messages consumed by the daemon loop.
///
/// `Event` carries the periodic ticks and internally generated inputs;
/// everything else is a presentation-layer command awaiting a reply.
#[derive(Debug)]
pub enum ManagerMsg {
    Event(Event),

    StartTimer {
        reply: oneshot::Sender<Result<String, String>>,
    },

    PauseTimer {
        reply: oneshot::Sender<Result<String, String>>,
    },

    ResetTimer {
        reply: oneshot::Sender<Result<String, String>>,
    },

    /// User input observed by the presentation layer.
    Activity {
        reply: oneshot::Sender<Result<String, String>>,
    },

    GetStatus {
        json: bool,
        reply: oneshot::Sender<String>,
    },

    GetHistory {
        json: bool,
        reply: oneshot::Sender<String>,
    },

    /// Write the full in-memory record to a user-chosen destination.
    Export {
        path: PathBuf,
        reply: oneshot::Sender<Result<String, String>>,
    },

    StopDaemon {
        reply: oneshot::Sender<Result<String, String>>,
    },
}
