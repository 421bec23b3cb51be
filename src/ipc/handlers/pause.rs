// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::manager_msg::ManagerMsg;

/// Handle `tally pause`.
pub async fn handle(tx: &mpsc::Sender<ManagerMsg>) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(ManagerMsg::PauseTimer { reply: reply_tx })
        .await
        .is_err()
    {
        return "ERROR: daemon not running".to_string();
    }

    super::await_result(reply_rx).await
}
