// License: MIT

/// Runtime knobs for the timer core.
///
/// There is deliberately no config file or environment surface; these exist
/// so tests can tighten the intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Inactivity duration after which a running timer is auto-paused.
    pub idle_threshold_seconds: u64,

    /// How often the idle monitor wakes up.
    pub idle_check_seconds: u64,

    /// How often the display tick fires.
    pub tick_seconds: u64,

    /// Whether an idle auto-pause surfaces a desktop notification.
    pub notify_on_idle_pause: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            idle_threshold_seconds: 300,
            idle_check_seconds: 10,
            tick_seconds: 1,
            notify_on_idle_pause: true,
        }
    }
}
