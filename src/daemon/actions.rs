// License: MIT

use crate::core::action::Action;
use crate::core::utils::escape_single_quotes;
use crate::tinfo;

use super::Daemon;

impl Daemon {
    pub(super) fn exec_action(&mut self, action: Action) {
        match action {
            Action::Notify { message } => {
                tinfo!("daemon", "notify: {}", message);
                let _ = std::process::Command::new("sh")
                    .arg("-lc")
                    .arg(format!(
                        "notify-send -a Tally '{}'",
                        escape_single_quotes(&message)
                    ))
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn();
            }

            #[cfg(test)]
            Action::Noop => {}
        }
    }
}
