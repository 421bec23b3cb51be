// License: MIT

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Notify the user (runtime decides how: notify-send, dbus, etc.)
    Notify {
        message: String,
    },

    /// For debugging / testing: no-op marker.
    #[cfg(test)]
    Noop,
}
