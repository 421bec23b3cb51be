// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::manager_msg::ManagerMsg;

/// Handle `tally stop`.
///
/// Semantics:
/// - Ask the daemon to exit cleanly (final totals are folded and saved).
/// - Reply once the daemon has acknowledged the request.
pub async fn handle(tx: &mpsc::Sender<ManagerMsg>) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(ManagerMsg::StopDaemon { reply: reply_tx })
        .await
        .is_err()
    {
        return "ERROR: daemon not running".to_string();
    }

    super::await_result(reply_rx).await
}
