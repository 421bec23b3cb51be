// License: MIT

use std::fs;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{UnixListener, UnixStream},
    sync::mpsc,
    time::{timeout, Duration},
};

use crate::core::manager_msg::ManagerMsg;
use crate::{tdebug, terror, tinfo};

use super::handlers;

/// Bind the control socket and spawn the accept loop.
///
/// An existing socket that still answers means another daemon owns it; a
/// socket nobody answers on is left over from a crash and is removed.
pub async fn spawn_ipc_server(tx: mpsc::Sender<ManagerMsg>) -> Result<(), String> {
    let path = crate::ipc::socket_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("create {}: {e}", parent.display()))?;
    }

    if path.exists() {
        if UnixStream::connect(&path).await.is_ok() {
            return Err("another tally daemon is already running".to_string());
        }
        let _ = fs::remove_file(&path);
    }

    let listener = UnixListener::bind(&path)
        .map_err(|e| format!("bind {}: {e}", path.display()))?;

    tinfo!("ipc", "listening on {}", path.display());

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut stream, _addr)) => {
                    let tx = tx.clone();

                    tokio::spawn(async move {
                        let result = timeout(Duration::from_secs(10), async {
                            if let Err(e) = handle_connection(&mut stream, &tx).await {
                                terror!("ipc", "connection error: {}", e);
                            }
                        })
                        .await;

                        if result.is_err() {
                            terror!("ipc", "connection timed out after 10 seconds");
                        }

                        let _ = stream.shutdown().await;
                    });
                }
                Err(e) => terror!("ipc", "failed to accept connection: {}", e),
            }
        }
    });

    Ok(())
}

/// Remove the control socket on clean shutdown.
pub fn cleanup_socket() {
    if let Ok(path) = crate::ipc::socket_path() {
        let _ = fs::remove_file(path);
    }
}

async fn handle_connection(
    stream: &mut UnixStream,
    tx: &mpsc::Sender<ManagerMsg>,
) -> std::io::Result<()> {
    let mut buf = vec![0u8; 1024];
    let n = stream.read(&mut buf).await?;

    if n == 0 {
        return Ok(());
    }

    let cmd = String::from_utf8_lossy(&buf[..n]).trim().to_string();
    tdebug!("ipc", "received command: {}", cmd);

    let response = route_command(&cmd, tx).await;

    stream.write_all(response.as_bytes()).await?;
    stream.flush().await?;

    Ok(())
}

/// Routes incoming commands to appropriate handlers.
async fn route_command(cmd: &str, tx: &mpsc::Sender<ManagerMsg>) -> String {
    match cmd {
        "start" => handlers::start::handle(tx).await,
        "pause" => handlers::pause::handle(tx).await,
        "reset" => handlers::reset::handle(tx).await,
        "activity" => handlers::activity::handle(tx).await,
        "stop" => handlers::stop::handle(tx).await,

        cmd if cmd.starts_with("status") => {
            let json = cmd.contains("--json");
            handlers::status::handle(tx, json).await
        }

        cmd if cmd.starts_with("history") => {
            let json = cmd.contains("--json");
            handlers::history::handle(tx, json).await
        }

        cmd if cmd.starts_with("export ") => {
            let path = cmd.strip_prefix("export ").unwrap_or("").trim();
            handlers::export::handle(tx, path).await
        }

        _ => format!("ERROR: unknown command '{cmd}'"),
    }
}
