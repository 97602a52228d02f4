//! Read-only view of the controller state handed to observers

use serde::{Deserialize, Serialize};

use super::Mode;

/// Public snapshot of the controller.
///
/// `timer_seconds_remaining` is only populated while the timer is set or
/// running; outside those modes the underlying counter is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub light_on: bool,
    pub temperature_celsius: i32,
    pub timer_seconds_remaining: Option<u32>,
}

impl Snapshot {
    /// Format the remaining timer as `mm:ss`, if the timer is active
    pub fn timer_display(&self) -> Option<String> {
        self.timer_seconds_remaining
            .map(|secs| format!("{:02}:{:02}", secs / 60, secs % 60))
    }
}
