//! The household automation state machine
//!
//! One light, a temperature setpoint with a short "adjusting" window, and a
//! countdown timer. Commands and ticks are total: an input that makes no
//! sense in the current mode is ignored rather than rejected. Subscribers
//! are called synchronously after every command that changed a field, and
//! only then.

use tracing::{debug, info};

use super::{Mode, Snapshot, SubscriptionId, Subscribers};
use crate::error::ControllerError;

/// Temperature the controller starts at
pub const INITIAL_TEMPERATURE: i32 = 22;
/// Lowest temperature reachable by decrementing
pub const MIN_TEMPERATURE: i32 = 5;
/// Ticks spent in `TempAdjust` before falling back to `Idle`
pub const TEMP_ADJUST_TICKS: u32 = 3;

/// Result of a command: whether it changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fields {
    mode: Mode,
    light_on: bool,
    temperature_celsius: i32,
    temp_adjust_ticks_remaining: u32,
    timer_seconds_remaining: u32,
}

impl Fields {
    fn initial() -> Self {
        Self {
            mode: Mode::Idle,
            light_on: false,
            temperature_celsius: INITIAL_TEMPERATURE,
            temp_adjust_ticks_remaining: 0,
            timer_seconds_remaining: 0,
        }
    }

    fn enter_temp_adjust(&mut self) {
        // A running timer keeps its mode; only the temperature moves.
        if self.mode == Mode::TimerRunning {
            return;
        }
        self.mode = Mode::TempAdjust;
        self.temp_adjust_ticks_remaining = TEMP_ADJUST_TICKS;
    }

    fn advance(&mut self) {
        match self.mode {
            Mode::TempAdjust => {
                self.temp_adjust_ticks_remaining = self.temp_adjust_ticks_remaining.saturating_sub(1);
                if self.temp_adjust_ticks_remaining == 0 {
                    self.mode = Mode::Idle;
                }
            }
            Mode::TimerRunning => {
                if self.timer_seconds_remaining > 0 {
                    self.timer_seconds_remaining -= 1;
                } else {
                    self.light_on = false;
                    self.mode = Mode::TimerExpired;
                }
            }
            Mode::TimerExpired => self.mode = Mode::Idle,
            Mode::Idle | Mode::LightOn | Mode::LightOff | Mode::TimerSet => {}
        }
    }
}

/// Owner of all mutable automation state
#[derive(Debug)]
pub struct AutomationController {
    fields: Fields,
    subscribers: Subscribers,
}

impl AutomationController {
    /// Create a controller in its initial configuration: idle, light off, 22°C
    pub fn new() -> Self {
        Self {
            fields: Fields::initial(),
            subscribers: Subscribers::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.fields.mode
    }

    pub fn light_on(&self) -> bool {
        self.fields.light_on
    }

    pub fn temperature_celsius(&self) -> i32 {
        self.fields.temperature_celsius
    }

    /// Remaining timer seconds, only while the timer is set or running
    pub fn timer_seconds_remaining(&self) -> Option<u32> {
        self.fields
            .mode
            .is_timer_active()
            .then_some(self.fields.timer_seconds_remaining)
    }

    /// Remaining adjust ticks, only while in `TempAdjust`
    pub fn temp_adjust_ticks_remaining(&self) -> Option<u32> {
        (self.fields.mode == Mode::TempAdjust).then_some(self.fields.temp_adjust_ticks_remaining)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.fields.mode,
            light_on: self.fields.light_on,
            temperature_celsius: self.fields.temperature_celsius,
            timer_seconds_remaining: self.timer_seconds_remaining(),
        }
    }

    /// Register a callback run after every change.
    ///
    /// Callbacks receive the post-change snapshot and must not call back into
    /// the controller.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Flip the light. Interrupts whatever mode was active.
    pub fn toggle_light(&mut self) -> Outcome {
        self.apply("toggle_light", |f| {
            f.light_on = !f.light_on;
            f.mode = if f.light_on { Mode::LightOn } else { Mode::LightOff };
        })
    }

    pub fn increase_temperature(&mut self) -> Outcome {
        self.apply("increase_temperature", |f| {
            f.temperature_celsius = f.temperature_celsius.saturating_add(1);
            f.enter_temp_adjust();
        })
    }

    /// Lower the temperature by one degree, never below [`MIN_TEMPERATURE`]
    pub fn decrease_temperature(&mut self) -> Outcome {
        self.apply("decrease_temperature", |f| {
            f.temperature_celsius = (f.temperature_celsius - 1).max(MIN_TEMPERATURE);
            f.enter_temp_adjust();
        })
    }

    /// Arm the timer with `seconds`, overriding any timer or adjust in progress.
    ///
    /// Negative durations are rejected and leave the state untouched.
    pub fn set_timer(&mut self, seconds: i64) -> Result<Outcome, ControllerError> {
        if seconds < 0 {
            return Err(ControllerError::NegativeTimer(seconds));
        }
        let seconds = u32::try_from(seconds).map_err(|_| ControllerError::TimerTooLong(seconds))?;

        Ok(self.apply("set_timer", |f| {
            f.timer_seconds_remaining = seconds;
            f.mode = Mode::TimerSet;
        }))
    }

    /// Start an armed timer and switch the light on. Ignored unless `TimerSet`.
    pub fn confirm_timer(&mut self) -> Outcome {
        self.apply("confirm_timer", |f| {
            if f.mode == Mode::TimerSet {
                f.mode = Mode::TimerRunning;
                f.light_on = true;
            }
        })
    }

    /// Advance time-dependent modes by one period
    pub fn tick(&mut self) -> Outcome {
        self.apply("tick", Fields::advance)
    }

    fn apply<F>(&mut self, action: &str, updater: F) -> Outcome
    where
        F: FnOnce(&mut Fields),
    {
        let before = self.fields;
        let mut next = before;
        updater(&mut next);

        if next == before {
            debug!(action, mode = %before.mode, "command had no effect");
            return Outcome::Ignored;
        }

        debug_assert!(next.temperature_celsius >= MIN_TEMPERATURE);
        self.fields = next;

        if before.mode != next.mode {
            info!(action, from = %before.mode, to = %next.mode, "mode changed");
        } else {
            debug!(action, mode = %next.mode, "state updated");
        }

        let snapshot = self.snapshot();
        self.subscribers.notify(&snapshot);
        Outcome::Applied
    }
}

impl Default for AutomationController {
    fn default() -> Self {
        Self::new()
    }
}
