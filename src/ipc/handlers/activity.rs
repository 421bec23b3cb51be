// License: MIT

use tokio::sync::{mpsc, oneshot};

use crate::core::manager_msg::ManagerMsg;

/// Handle `tally activity`: the presentation layer reporting user input,
/// which defers the idle auto-pause.
pub async fn handle(tx: &mpsc::Sender<ManagerMsg>) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(ManagerMsg::Activity { reply: reply_tx })
        .await
        .is_err()
    {
        return "ERROR: daemon not running".to_string();
    }

    super::await_result(reply_rx).await
}
