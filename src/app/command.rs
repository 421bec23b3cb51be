// License: MIT

use std::path::PathBuf;

use crate::cli::{Args, Command};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    // command mode: args.command is Some
    let cmd = args.command.as_ref().expect("command mode");

    match cmd {
        Command::Start => send_simple("start", "Timer started").await,
        Command::Pause => send_simple("pause", "Timer paused").await,
        Command::Reset => send_simple("reset", "Session recorded").await,
        Command::Activity => send_simple("activity", "ok").await,
        Command::Stop => send_simple("stop", "Stopping tally daemon").await,

        Command::Status { json } => {
            let msg = if *json { "status --json" } else { "status" };
            send_simple(msg, "").await
        }

        Command::History { json } => {
            let msg = if *json { "history --json" } else { "history" };
            send_simple(msg, "").await
        }

        Command::Export { path } => {
            // The daemon resolves relative paths against its own cwd, so
            // absolutize here where the user's cwd is known.
            let absolute = absolutize(path)?;
            let msg = format!("export {}", absolute.display());
            send_simple(&msg, "Exported").await
        }
    }
}

async fn send_simple(msg: &str, fallback: &str) -> Result<(), AnyError> {
    match crate::ipc::client::send_raw(msg).await {
        Ok(resp) => {
            let out = resp.trim_end();
            if out.starts_with("ERROR:") {
                eprintln!("tally: {}", out.trim_start_matches("ERROR:").trim());
                std::process::exit(1);
            } else if out.is_empty() {
                if !fallback.is_empty() {
                    println!("{fallback}");
                }
            } else {
                println!("{out}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("tally: {e}");
            std::process::exit(1);
        }
    }
}

fn absolutize(path: &PathBuf) -> Result<PathBuf, AnyError> {
    if path.is_absolute() {
        Ok(path.clone())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
