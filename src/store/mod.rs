// License: MIT

pub mod normalize;
pub mod record;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use eyre::{Result, WrapErr};

use self::record::Record;

/// Outcome of loading the store. Loading never fails: any problem falls back
/// to an all-zero default record, with a warning for the user.
#[derive(Debug)]
pub struct Loaded {
    pub record: Record,
    pub warning: Option<String>,
}

pub fn default_store_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    path.push("tally");
    path.push("tally.json");
    path
}

/// Read the record, normalize it, and apply the day-rollover policy.
///
/// A missing file is the normal first-run case and yields defaults silently;
/// unreadable or malformed content also yields defaults but carries a
/// warning. Rollover is checked here only, so a daemon left running across
/// midnight keeps counting into the old "today" until the next restart.
pub fn load(path: &Path, today: NaiveDate) -> Loaded {
    if !path.exists() {
        return Loaded {
            record: Record::default(),
            warning: None,
        };
    }

    match try_load(path) {
        Ok(mut record) => {
            apply_day_rollover(&mut record, today);
            Loaded {
                record,
                warning: None,
            }
        }
        Err(e) => Loaded {
            record: Record::default(),
            warning: Some(format!("failed to load {}: {e:#}", path.display())),
        },
    }
}

fn try_load(path: &Path) -> Result<Record> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("read {}", path.display()))?;

    let raw: serde_json::Value =
        serde_json::from_str(&text).wrap_err("parse store file")?;

    let normalized = normalize::normalize(raw);

    serde_json::from_value(normalized).wrap_err("decode store record")
}

/// Reset the "today" accumulator if the last recorded activity predates
/// today. Prefers the last session's start time, falls back to its pause
/// time; with neither there is nothing to compare against.
pub fn apply_day_rollover(record: &mut Record, today: NaiveDate) {
    let last_date = record
        .last_session
        .start_time
        .or(record.last_session.paused_time)
        .map(|t| t.date());

    if let Some(date) = last_date {
        if date < today {
            record.today_seconds = 0.0;
        }
    }
}

/// Write the record to its fixed path. The caller is expected to have synced
/// `last_session` from the live timer first.
pub fn save(path: &Path, record: &Record) -> Result<()> {
    write_record(path, record).wrap_err_with(|| format!("save {}", path.display()))
}

/// Write the full in-memory record, verbatim, to a user-chosen destination.
pub fn export(path: &Path, record: &Record) -> Result<()> {
    write_record(path, record).wrap_err_with(|| format!("export to {}", path.display()))
}

fn write_record(path: &Path, record: &Record) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("create {}", parent.display()))?;
        }
    }

    let text = serde_json::to_string_pretty(record).wrap_err("encode record")?;
    fs::write(path, text).wrap_err("write file")?;
    Ok(())
}
