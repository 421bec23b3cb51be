// License: MIT

pub mod activity;
pub mod export;
pub mod history;
pub mod pause;
pub mod reset;
pub mod start;
pub mod status;
pub mod stop;

use tokio::sync::oneshot;

/// Format a command reply for the wire. Errors are prefixed so the client can
/// route them to stderr.
pub(super) async fn await_result(
    rx: oneshot::Receiver<Result<String, String>>,
) -> String {
    match rx.await {
        Ok(Ok(msg)) => msg,
        Ok(Err(e)) => format!("ERROR: {e}"),
        Err(_) => "ERROR: no response from daemon".to_string(),
    }
}
