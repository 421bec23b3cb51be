// License: MIT

use crate::cli::Args;
use crate::core::{config::Config, utils};
use crate::daemon::Daemon;
use crate::{store, tinfo, twarn};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    crate::log::set_verbose(args.verbose);

    tinfo!("tally", "starting (log at {})", crate::log::log_path().display());

    let store_path = args
        .store
        .unwrap_or_else(store::default_store_path);

    // Load is best-effort: corrupt or unreadable data degrades to an empty
    // record with a warning, never a refusal to start.
    let loaded = store::load(&store_path, utils::now().date());
    if let Some(warning) = &loaded.warning {
        twarn!("store", "{warning}; starting with an empty record");
    }

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let mut daemon = Daemon::new(loaded.record, store_path, Config::default());

    let mut daemon_task = tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move { daemon.run(shutdown_rx, shutdown_tx).await }
    });

    tokio::select! {
        res = &mut daemon_task => {
            match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e),
                Err(join_err) => Err(Box::new(join_err) as AnyError),
            }
        }

        _ = tokio::signal::ctrl_c() => {
            tinfo!("tally", "received Ctrl+C, shutting down");
            let _ = shutdown_tx.send(true);

            match daemon_task.await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e),
                Err(join_err) => Err(Box::new(join_err)),
            }
        }
    }
}
