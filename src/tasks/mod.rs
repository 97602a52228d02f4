//! Background tasks module
//!
//! The clock abstraction and the task that turns clock ticks into
//! controller ticks.

pub mod clock;
pub mod ticker;

// Re-export main items
pub use clock::{Clock, IntervalClock, ManualClock, ManualClockHandle};
pub use ticker::ticker_task;
