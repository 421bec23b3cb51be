// License: MIT

use std::path::PathBuf;

use tokio::sync::{mpsc, oneshot};

use crate::core::manager_msg::ManagerMsg;

/// Handle `tally export <path>`.
pub async fn handle(tx: &mpsc::Sender<ManagerMsg>, path: &str) -> String {
    if path.is_empty() {
        return "ERROR: export requires a destination path".to_string();
    }

    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(ManagerMsg::Export {
            path: PathBuf::from(path),
            reply: reply_tx,
        })
        .await
        .is_err()
    {
        return "ERROR: daemon not running".to_string();
    }

    super::await_result(reply_rx).await
}
