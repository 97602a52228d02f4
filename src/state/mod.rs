//! State management module
//!
//! The automation state machine, the snapshot it exposes to observers, and
//! the shared wrapper used by the runtime tasks.

pub mod mode;
pub mod snapshot;
pub mod subscribers;
pub mod controller;
pub mod app_state;

// Re-export main types
pub use mode::Mode;
pub use snapshot::Snapshot;
pub use subscribers::{SubscriptionId, Subscribers};
pub use controller::{AutomationController, Outcome, INITIAL_TEMPERATURE, MIN_TEMPERATURE, TEMP_ADJUST_TICKS};
pub use app_state::{AppState, SharedState};
