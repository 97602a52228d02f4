//! Shared application state wrapping the controller

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use super::{AutomationController, Outcome, Snapshot};
use crate::error::ControllerError;

/// Capacity of the snapshot broadcast channel
const CHANNEL_CAPACITY: usize = 64;

/// Serializes access to the controller across tasks and fans its change
/// notifications out to async observers.
#[derive(Debug)]
pub struct AppState {
    controller: Mutex<AutomationController>,
    /// Snapshots published after every change
    pub state_change_tx: broadcast::Sender<Snapshot>,
    pub start_time: Instant,
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Create the shared state around a fresh controller
    pub fn new() -> Self {
        Self::with_controller(AutomationController::new())
    }

    pub fn with_controller(mut controller: AutomationController) -> Self {
        let (state_change_tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        let tx = state_change_tx.clone();
        controller.subscribe(move |snapshot| {
            // Sending only fails when nobody is listening.
            if tx.send(*snapshot).is_err() {
                debug!("No observers for state change");
            }
        });

        Self {
            controller: Mutex::new(controller),
            state_change_tx,
            start_time: Instant::now(),
            last_action: Mutex::new(None),
        }
    }

    /// Subscribe to snapshots published after each change
    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.state_change_tx.subscribe()
    }

    fn lock(&self) -> Result<MutexGuard<'_, AutomationController>, ControllerError> {
        self.controller
            .lock()
            .map_err(|e| ControllerError::LockPoisoned(e.to_string()))
    }

    /// Run a command against the controller and record it if it took effect
    pub fn update<F>(&self, action: &str, command: F) -> Result<(Outcome, Snapshot), ControllerError>
    where
        F: FnOnce(&mut AutomationController) -> Result<Outcome, ControllerError>,
    {
        let mut controller = self.lock()?;
        let outcome = command(&mut controller)?;
        let snapshot = controller.snapshot();
        drop(controller);

        if outcome.is_applied() {
            match self.last_action.lock() {
                Ok(mut last) => *last = Some((action.to_string(), Utc::now())),
                Err(e) => warn!("Failed to record last action: {}", e),
            }
        }

        Ok((outcome, snapshot))
    }

    pub fn toggle_light(&self) -> Result<(Outcome, Snapshot), ControllerError> {
        self.update("toggle_light", |c| Ok(c.toggle_light()))
    }

    pub fn increase_temperature(&self) -> Result<(Outcome, Snapshot), ControllerError> {
        self.update("increase_temperature", |c| Ok(c.increase_temperature()))
    }

    pub fn decrease_temperature(&self) -> Result<(Outcome, Snapshot), ControllerError> {
        self.update("decrease_temperature", |c| Ok(c.decrease_temperature()))
    }

    pub fn set_timer(&self, seconds: i64) -> Result<(Outcome, Snapshot), ControllerError> {
        self.update("set_timer", |c| c.set_timer(seconds))
    }

    pub fn confirm_timer(&self) -> Result<(Outcome, Snapshot), ControllerError> {
        self.update("confirm_timer", |c| Ok(c.confirm_timer()))
    }

    /// Advance the controller by one tick. Ticks are not recorded as actions.
    pub fn tick(&self) -> Result<(Outcome, Snapshot), ControllerError> {
        let mut controller = self.lock()?;
        let outcome = controller.tick();
        Ok((outcome, controller.snapshot()))
    }

    pub fn snapshot(&self) -> Result<Snapshot, ControllerError> {
        self.lock().map(|c| c.snapshot())
    }

    /// Name and time of the last command that changed state
    pub fn last_action(&self) -> Option<(String, DateTime<Utc>)> {
        self.last_action.lock().ok().and_then(|last| last.clone())
    }

    /// Uptime formatted as `1h 2m 3s`
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience alias for the state shared between tasks
pub type SharedState = Arc<AppState>;
