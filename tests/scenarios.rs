use std::sync::{Arc, Mutex};

use house_automaton::{
    state::{AppState, AutomationController, Mode, Outcome, Snapshot, TEMP_ADJUST_TICKS},
    tasks::{ticker_task, ManualClock},
    ControllerError,
};

fn counting(controller: &mut AutomationController) -> Arc<Mutex<usize>> {
    let count = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&count);
    controller.subscribe(move |_| *counter.lock().unwrap() += 1);
    count
}

#[test]
fn timer_expires_exactly_one_tick_after_countdown_reaches_zero() {
    for seconds in [0u32, 1, 2, 7] {
        let mut controller = AutomationController::new();
        controller.set_timer(i64::from(seconds)).unwrap();
        controller.confirm_timer();

        for tick in 1..=seconds {
            controller.tick();
            assert_eq!(controller.mode(), Mode::TimerRunning, "tick {tick} of {seconds}");
            assert_eq!(controller.timer_seconds_remaining(), Some(seconds - tick));
        }

        controller.tick();
        assert_eq!(controller.mode(), Mode::TimerExpired, "timer of {seconds}s");
        assert!(!controller.light_on());

        controller.tick();
        assert_eq!(controller.mode(), Mode::Idle);
    }
}

#[test]
fn temp_adjust_settles_after_fixed_window_and_stays_idle() {
    let mut controller = AutomationController::new();
    controller.increase_temperature();

    for _ in 0..TEMP_ADJUST_TICKS {
        assert_eq!(controller.mode(), Mode::TempAdjust);
        controller.tick();
    }
    assert_eq!(controller.mode(), Mode::Idle);

    let count = counting(&mut controller);
    assert_eq!(controller.tick(), Outcome::Ignored);
    assert_eq!(controller.mode(), Mode::Idle);
    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn temperature_edit_during_running_timer_keeps_countdown() {
    let mut controller = AutomationController::new();
    controller.set_timer(3).unwrap();
    controller.confirm_timer();
    controller.tick();

    controller.increase_temperature();
    controller.increase_temperature();
    controller.decrease_temperature();

    assert_eq!(controller.mode(), Mode::TimerRunning);
    assert_eq!(controller.temperature_celsius(), 23);
    assert_eq!(controller.timer_seconds_remaining(), Some(2));
}

#[test]
fn rearming_timer_overrides_running_countdown() {
    let mut controller = AutomationController::new();
    controller.set_timer(10).unwrap();
    controller.confirm_timer();
    controller.tick();

    assert_eq!(controller.set_timer(4), Ok(Outcome::Applied));
    assert_eq!(controller.mode(), Mode::TimerSet);
    assert_eq!(controller.timer_seconds_remaining(), Some(4));
    // The light stays as the confirmation left it.
    assert!(controller.light_on());
}

// Policy: negative durations are rejected, not clamped.
#[test]
fn negative_timer_is_rejected_and_silent() {
    let mut controller = AutomationController::new();
    controller.toggle_light();
    let count = counting(&mut controller);
    let before = controller.snapshot();

    assert_eq!(controller.set_timer(-1), Err(ControllerError::NegativeTimer(-1)));
    assert_eq!(controller.snapshot(), before);
    assert_eq!(*count.lock().unwrap(), 0);
}

// Policy: notifications fire only when a command changed something.
#[test]
fn ignored_commands_do_not_notify() {
    let mut controller = AutomationController::new();
    let count = counting(&mut controller);

    assert_eq!(controller.confirm_timer(), Outcome::Ignored);
    assert_eq!(controller.tick(), Outcome::Ignored);
    controller.set_timer(5).unwrap();
    assert_eq!(controller.set_timer(5), Ok(Outcome::Ignored));
    assert_eq!(controller.tick(), Outcome::Ignored);

    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn every_subscriber_sees_the_same_snapshot() {
    let mut controller = AutomationController::new();
    let first: Arc<Mutex<Vec<Snapshot>>> = Arc::default();
    let second: Arc<Mutex<Vec<Snapshot>>> = Arc::default();
    for sink in [&first, &second] {
        let sink = Arc::clone(sink);
        controller.subscribe(move |snapshot| sink.lock().unwrap().push(*snapshot));
    }

    controller.set_timer(1).unwrap();
    controller.confirm_timer();

    let first = first.lock().unwrap();
    assert_eq!(*first, *second.lock().unwrap());
    assert_eq!(first.len(), 2);
    assert_eq!(first[1].mode, Mode::TimerRunning);
    assert_eq!(first[1].timer_seconds_remaining, Some(1));
}

#[tokio::test]
async fn injected_clock_drives_full_timer_cycle() {
    let state = Arc::new(AppState::new());
    let mut rx = state.subscribe();
    state.set_timer(2).unwrap();
    state.confirm_timer().unwrap();

    let (clock, handle) = ManualClock::new();
    let ticker = tokio::spawn(ticker_task(Arc::clone(&state), clock));
    handle.advance_by(4);
    drop(handle);
    assert_eq!(ticker.await.unwrap(), 4);

    let mut modes = Vec::new();
    while let Ok(snapshot) = rx.try_recv() {
        modes.push(snapshot.mode);
    }
    assert_eq!(
        modes,
        vec![
            Mode::TimerSet,
            Mode::TimerRunning,
            Mode::TimerRunning,
            Mode::TimerRunning,
            Mode::TimerExpired,
            Mode::Idle,
        ]
    );
}
