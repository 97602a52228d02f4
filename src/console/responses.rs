//! Console response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Outcome, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Applied,
    Ignored,
    Error,
}

impl From<Outcome> for ResponseStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Applied => ResponseStatus::Applied,
            Outcome::Ignored => ResponseStatus::Ignored,
        }
    }
}

/// Reply to a single console command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub snapshot: Option<Snapshot>,
}

impl CommandResponse {
    pub fn new(status: ResponseStatus, message: String, snapshot: Option<Snapshot>) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            snapshot,
        }
    }

    pub fn from_outcome(outcome: Outcome, message: String, snapshot: Snapshot) -> Self {
        Self::new(outcome.into(), message, Some(snapshot))
    }

    pub fn error(message: String) -> Self {
        Self::new(ResponseStatus::Error, message, None)
    }
}

/// Full status including runtime metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub snapshot: Snapshot,
    pub uptime: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Notification printed by the view whenever the controller changes
#[derive(Debug, Clone, Serialize)]
pub struct StateChangedEvent {
    pub event: &'static str,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

impl StateChangedEvent {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            event: "state_changed",
            timestamp: Utc::now(),
            snapshot,
        }
    }
}
