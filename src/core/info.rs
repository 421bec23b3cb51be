// License: MIT

use serde::Serialize;

use crate::core::utils::format_hms;
use crate::store::record::{Record, DATE_FORMAT};

/// Snapshot returned from the daemon for `tally status`.
///
/// The `*_seconds` fields are the stable JSON contract; the formatted strings
/// mirror them for display. Today/total are projections: stored cumulative
/// values plus the live session if and only if the timer is running. They are
/// not persisted until reset or shutdown.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub running: bool,
    pub paused: bool,
    pub session_seconds: f64,
    pub today_seconds: f64,
    pub total_seconds: f64,
    pub session: String,
    pub today: String,
    pub total: String,
}

impl StatusSnapshot {
    pub fn new(
        running: bool,
        paused: bool,
        session_seconds: f64,
        today_seconds: f64,
        total_seconds: f64,
    ) -> Self {
        Self {
            running,
            paused,
            session_seconds,
            today_seconds,
            total_seconds,
            session: format_hms(session_seconds),
            today: format_hms(today_seconds),
            total: format_hms(total_seconds),
        }
    }

    /// CLI-facing output for `tally status`.
    pub fn pretty_text(&self) -> String {
        let mode = if self.running {
            "running"
        } else if self.paused {
            "paused"
        } else {
            "stopped"
        };

        format!(
            "Timer:   {mode}\nSession: {}\nToday:   {}\nTotal:   {}",
            self.session, self.today, self.total
        )
    }
}

/// Session history, most recent first, for `tally history`.
pub fn render_history(record: &Record) -> String {
    if record.sessions.is_empty() {
        return "No recorded sessions".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:<10} {:<20} {:<20}\n",
        "Date", "Duration", "Start", "End"
    ));

    for entry in record.sessions.iter().rev() {
        let start = entry
            .start_time
            .map(|t| t.format(DATE_FORMAT).to_string())
            .unwrap_or_default();

        out.push_str(&format!(
            "{:<12} {:<10} {:<20} {:<20}\n",
            entry.date.format("%Y-%m-%d"),
            format_hms(entry.duration),
            start,
            entry.end_time.format(DATE_FORMAT),
        ));
    }

    out.trim_end().to_string()
}

pub fn render_history_json(record: &Record) -> String {
    let newest_first: Vec<_> = record.sessions.iter().rev().collect();
    serde_json::to_string_pretty(&newest_first)
        .unwrap_or_else(|e| format!("ERROR: failed to encode history: {e}"))
}
