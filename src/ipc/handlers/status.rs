// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::manager_msg::ManagerMsg;

/// Handle `tally status [--json]`.
pub async fn handle(tx: &mpsc::Sender<ManagerMsg>, json: bool) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(ManagerMsg::GetStatus {
            json,
            reply: reply_tx,
        })
        .await
        .is_err()
    {
        return "ERROR: daemon not running".to_string();
    }

    match reply_rx.await {
        Ok(rendered) => rendered,
        Err(_) => "ERROR: no response from daemon".to_string(),
    }
}
