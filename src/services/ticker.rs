// License: MIT

use crate::core::events::Event;
use crate::core::manager_msg::ManagerMsg;
use crate::core::utils::now;
use crate::tdebug;

use tokio::sync::mpsc::Sender;
use tokio::time::{sleep, Duration};

/// Display tick: refreshes the live elapsed value once per interval.
pub async fn run_ticker(tx: Sender<ManagerMsg>, period: Duration) {
    tdebug!("ticker", "display tick started ({:?})", period);

    loop {
        sleep(period).await;

        // If the daemon is gone, stop.
        if tx
            .send(ManagerMsg::Event(Event::Tick { now: now() }))
            .await
            .is_err()
        {
            tdebug!("ticker", "display tick stopping (receiver dropped)");
            break;
        }
    }
}

/// Idle-monitor tick. Re-arms unconditionally; the pause decision itself
/// lives in the state machine.
pub async fn run_idle_ticker(tx: Sender<ManagerMsg>, period: Duration) {
    tdebug!("ticker", "idle check started ({:?})", period);

    loop {
        sleep(period).await;

        if tx
            .send(ManagerMsg::Event(Event::IdleCheck { now: now() }))
            .await
            .is_err()
        {
            tdebug!("ticker", "idle check stopping (receiver dropped)");
            break;
        }
    }
}
