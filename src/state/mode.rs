//! Controller mode

use std::fmt;

use serde::{Deserialize, Serialize};

/// The single active state of the controller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Idle,
    LightOn,
    LightOff,
    TempAdjust,
    TimerSet,
    TimerRunning,
    TimerExpired,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Idle,
        Mode::LightOn,
        Mode::LightOff,
        Mode::TempAdjust,
        Mode::TimerSet,
        Mode::TimerRunning,
        Mode::TimerExpired,
    ];

    /// Stable name used in logs and rendered output
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::LightOn => "light_on",
            Mode::LightOff => "light_off",
            Mode::TempAdjust => "temp_adjust",
            Mode::TimerSet => "timer_set",
            Mode::TimerRunning => "timer_running",
            Mode::TimerExpired => "timer_expired",
        }
    }

    /// Whether the timer countdown is meaningful in this mode
    pub fn is_timer_active(self) -> bool {
        matches!(self, Mode::TimerSet | Mode::TimerRunning)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
