//! Tick sources driving the controller

use std::{future::Future, time::Duration};
use tokio::{
    sync::mpsc,
    time::{interval, Interval, MissedTickBehavior},
};

/// Something that produces evenly spaced ticks.
pub trait Clock: Send {
    /// Wait for the next tick. Returns `false` once the clock has stopped.
    fn next_tick(&mut self) -> impl Future<Output = bool> + Send;
}

/// Wall-clock ticks at a fixed period
#[derive(Debug)]
pub struct IntervalClock {
    interval: Interval,
}

impl IntervalClock {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl Clock for IntervalClock {
    async fn next_tick(&mut self) -> bool {
        // The first tick of a tokio interval completes immediately.
        self.interval.tick().await;
        true
    }
}

/// Clock advanced by hand through a [`ManualClockHandle`].
///
/// Stops once every handle has been dropped and pending ticks are drained.
#[derive(Debug)]
pub struct ManualClock {
    rx: mpsc::UnboundedReceiver<()>,
}

/// Sender side of a [`ManualClock`]
#[derive(Debug, Clone)]
pub struct ManualClockHandle {
    tx: mpsc::UnboundedSender<()>,
}

impl ManualClock {
    pub fn new() -> (Self, ManualClockHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, ManualClockHandle { tx })
    }
}

impl ManualClockHandle {
    /// Queue one tick. Returns `false` if the clock is gone.
    pub fn advance(&self) -> bool {
        self.tx.send(()).is_ok()
    }

    /// Queue `n` ticks
    pub fn advance_by(&self, n: usize) -> bool {
        (0..n).all(|_| self.advance())
    }
}

impl Clock for ManualClock {
    async fn next_tick(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_yield_queued_ticks_then_stop() {
        let (mut clock, handle) = ManualClock::new();
        assert!(handle.advance_by(2));
        drop(handle);

        assert!(clock.next_tick().await);
        assert!(clock.next_tick().await);
        assert!(!clock.next_tick().await);
    }

    #[tokio::test]
    async fn should_report_closed_clock_to_handle() {
        let (clock, handle) = ManualClock::new();
        drop(clock);
        assert!(!handle.advance());
    }

    #[tokio::test]
    async fn should_keep_configured_period() {
        let mut clock = IntervalClock::new(Duration::from_millis(5));
        assert_eq!(clock.period(), Duration::from_millis(5));
        assert!(clock.next_tick().await);
    }
}
