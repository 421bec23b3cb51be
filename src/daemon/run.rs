// License: MIT

use std::path::Path;

use tokio::sync::{mpsc, watch};
use tokio::time::Duration;

use crate::core::{
    events::Event,
    info,
    manager_msg::ManagerMsg,
    utils::{self, format_hms},
};
use crate::{store, tdebug, tinfo, twarn};

use super::{AnyError, Daemon};

impl Daemon {
    pub async fn run(
        &mut self,
        mut shutdown: watch::Receiver<bool>,
        shutdown_tx: watch::Sender<bool>,
    ) -> Result<(), AnyError> {
        tinfo!("daemon", "starting");

        let (tx, mut rx) = mpsc::channel::<ManagerMsg>(256);

        // Commands are the only external input; without the socket the daemon
        // is unreachable, so a bind failure is fatal.
        crate::ipc::server::spawn_ipc_server(tx.clone()).await?;

        let cfg = *self.manager.config();
        tokio::spawn(crate::services::ticker::run_ticker(
            tx.clone(),
            Duration::from_secs(cfg.tick_seconds),
        ));
        tokio::spawn(crate::services::ticker::run_idle_ticker(
            tx.clone(),
            Duration::from_secs(cfg.idle_check_seconds),
        ));

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        tinfo!("daemon", "stopping (shutdown requested)");
                        break;
                    }
                }

                maybe = rx.recv() => {
                    let Some(msg) = maybe else {
                        tinfo!("daemon", "stopping (event channel closed)");
                        break;
                    };

                    match msg {
                        ManagerMsg::Event(event) => {
                            let actions = self
                                .manager
                                .handle_event(&mut self.state, event)
                                .unwrap_or_else(|e| {
                                    tdebug!("daemon", "event rejected: {e}");
                                    Vec::new()
                                });

                            for action in actions {
                                self.exec_action(action);
                            }
                        }

                        ManagerMsg::StartTimer { reply } => {
                            let res = self.command(Event::StartTimer { now: utils::now() })
                                .map(|_| "Timer started".to_string());
                            let _ = reply.send(res);
                        }

                        ManagerMsg::PauseTimer { reply } => {
                            let res = self.command(Event::PauseTimer { now: utils::now() })
                                .map(|_| {
                                    format!(
                                        "Timer paused at {}",
                                        format_hms(self.state.accumulated_seconds())
                                    )
                                });
                            let _ = reply.send(res);
                        }

                        ManagerMsg::ResetTimer { reply } => {
                            let duration = self.state.accumulated_seconds();
                            let res = self.command(Event::ResetTimer { now: utils::now() })
                                .map(|_| {
                                    format!("Session of {} recorded", format_hms(duration))
                                });
                            let _ = reply.send(res);
                        }

                        ManagerMsg::Activity { reply } => {
                            let res = self.command(Event::UserActivity { now: utils::now() })
                                .map(|_| "ok".to_string());
                            let _ = reply.send(res);
                        }

                        ManagerMsg::GetStatus { json, reply } => {
                            let snap = self.manager.snapshot(&self.state, utils::now());
                            let rendered = if json {
                                serde_json::to_string_pretty(&snap)
                                    .unwrap_or_else(|e| format!("ERROR: encode status: {e}"))
                            } else {
                                snap.pretty_text()
                            };
                            let _ = reply.send(rendered);
                        }

                        ManagerMsg::GetHistory { json, reply } => {
                            let rendered = if json {
                                info::render_history_json(self.state.record())
                            } else {
                                info::render_history(self.state.record())
                            };
                            let _ = reply.send(rendered);
                        }

                        ManagerMsg::Export { path, reply } => {
                            let res = self.export_record(&path);
                            let _ = reply.send(res);
                        }

                        ManagerMsg::StopDaemon { reply } => {
                            let _ = reply.send(Ok("Stopping tally daemon".to_string()));
                            let _ = shutdown_tx.send(true);
                        }
                    }
                }
            }
        }

        self.shutdown_save();
        crate::ipc::server::cleanup_socket();

        Ok(())
    }

    fn command(&mut self, event: Event) -> Result<(), String> {
        match self.manager.handle_event(&mut self.state, event) {
            Ok(actions) => {
                for action in actions {
                    self.exec_action(action);
                }
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        }
    }

    fn export_record(&self, path: &Path) -> Result<String, String> {
        match store::export(path, self.state.record()) {
            Ok(()) => {
                tinfo!("store", "exported record to {}", path.display());
                Ok(format!("Exported data to {}", path.display()))
            }
            Err(e) => {
                twarn!("store", "export failed: {e:#}");
                Err(format!("export failed: {e:#}"))
            }
        }
    }

    /// Fold the final elapsed contribution into the totals and write the
    /// record out. A write failure is a warning; in-memory state is already
    /// final and shutdown proceeds regardless.
    fn shutdown_save(&mut self) {
        let now = utils::now();

        self.manager.finalize_on_close(&mut self.state, now);
        self.state.sync_last_session();

        match store::save(&self.store_path, self.state.record()) {
            Ok(()) => tinfo!(
                "store",
                "saved {} (total {})",
                self.store_path.display(),
                format_hms(self.state.record().total_seconds)
            ),
            Err(e) => twarn!("store", "save failed: {e:#}"),
        }
    }
}
