//! Periodic tick background task

use tracing::{debug, error, info};

use super::Clock;
use crate::state::SharedState;

/// Background task feeding ticks from `clock` into the controller until the
/// clock stops. Returns the number of ticks delivered.
pub async fn ticker_task<C: Clock>(state: SharedState, mut clock: C) -> u64 {
    info!("Starting ticker task");

    let mut delivered = 0;
    while clock.next_tick().await {
        match state.tick() {
            Ok((outcome, snapshot)) => {
                delivered += 1;
                if outcome.is_applied() {
                    debug!(
                        "Tick {} advanced state: mode={}, timer={:?}",
                        delivered, snapshot.mode, snapshot.timer_seconds_remaining
                    );
                }
            }
            Err(e) => {
                error!("Failed to deliver tick: {}", e);
                break;
            }
        }
    }

    info!("Ticker task stopped after {} ticks", delivered);
    delivered
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        state::{AppState, Mode},
        tasks::ManualClock,
    };

    #[tokio::test]
    async fn should_expire_timer_on_tick_after_countdown() {
        let state = Arc::new(AppState::new());
        state.set_timer(3).unwrap();
        state.confirm_timer().unwrap();

        let (clock, handle) = ManualClock::new();
        handle.advance_by(4);
        drop(handle);

        let delivered = ticker_task(Arc::clone(&state), clock).await;

        assert_eq!(delivered, 4);
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.mode, Mode::TimerExpired);
        assert!(!snapshot.light_on);
    }

    #[tokio::test]
    async fn should_publish_each_effective_tick() {
        let state = Arc::new(AppState::new());
        state.increase_temperature().unwrap();
        let mut rx = state.subscribe();

        let (clock, handle) = ManualClock::new();
        handle.advance_by(5);
        drop(handle);
        ticker_task(Arc::clone(&state), clock).await;

        let mut modes = Vec::new();
        while let Ok(snapshot) = rx.try_recv() {
            modes.push(snapshot.mode);
        }
        assert_eq!(modes, vec![Mode::TempAdjust, Mode::TempAdjust, Mode::Idle]);
    }
}
