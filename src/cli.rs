// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tally study timer"
)]
pub struct Args {
    /// Override the store file (defaults to the user data directory).
    #[arg(short, long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Start or resume the timer")]
    Start,

    #[command(about = "Pause the timer")]
    Pause,

    #[command(about = "Record the accumulated session and reset the timer")]
    Reset,

    #[command(about = "Display session, today and total times")]
    Status {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Display recorded sessions, most recent first")]
    History {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Export the full record to a chosen file")]
    Export {
        path: PathBuf,
    },

    #[command(about = "Report user activity, deferring the idle auto-pause")]
    Activity,

    #[command(about = "Stop the running tally daemon, saving totals")]
    Stop,
}
