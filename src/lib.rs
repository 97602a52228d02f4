//! House Automaton - a small household automation controller
//!
//! A deterministic state machine over a light, a temperature setpoint and a
//! countdown timer, driven by discrete commands and periodic ticks. The
//! runtime pieces (clock, console, view) sit around the controller and only
//! talk to it through [`state::AppState`].

pub mod config;
pub mod console;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConsoleError, ControllerError};
pub use state::{AppState, AutomationController, Mode, Outcome, Snapshot};
pub use utils::signals::shutdown_signal;
