// License: MIT

mod actions;
mod run;

use std::path::PathBuf;

use crate::core::{config::Config, manager::Manager, state::State, utils};
use crate::store::record::Record;
use crate::tdebug;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub struct Daemon {
    manager: Manager,
    state: State,
    store_path: PathBuf,
}

impl Daemon {
    pub fn new(record: Record, store_path: PathBuf, cfg: Config) -> Self {
        let now = utils::now();

        tdebug!(
            "daemon",
            "total={:.0}s today={:.0}s sessions={} carried={:.0}s store={}",
            record.total_seconds,
            record.today_seconds,
            record.sessions.len(),
            record.last_session.accumulated_seconds,
            store_path.display(),
        );

        Self {
            manager: Manager::new(cfg),
            state: State::new(now, record),
            store_path,
        }
    }
}
