use std::time::Duration;

use dial_timer::{
    format_digital_clock, picker::TimeField, state::TimerPhase, Intent, IntervalTickSource,
    SimulatedTickSource, TimerController,
};
use tokio::sync::mpsc;

fn run_for(controller: &mut TimerController<SimulatedTickSource>, clock: &SimulatedTickSource, ms: u64) {
    for event in clock.advance(ms) {
        controller.handle_tick(event);
    }
}

#[test]
fn brush_teeth_preset_counts_down_to_zero() {
    let clock = SimulatedTickSource::new();
    let mut controller = TimerController::new(clock.clone());

    controller.dispatch(Intent::PresetTapped(0));
    assert_eq!(controller.state().selected_duration_ms(), 120_000);

    controller.dispatch(Intent::StartStopTapped);
    run_for(&mut controller, &clock, 119_000);
    let state = controller.state();
    assert_eq!(state.remaining_ms, 1_000);
    assert!(state.is_running);
    assert_eq!(state.formatted_remaining(), "00:00:01");

    run_for(&mut controller, &clock, 1_000);
    let state = controller.state();
    assert_eq!(state.remaining_ms, 0);
    assert!(state.is_expired);
    assert!(!state.is_running);
    assert_eq!(state.phase(), TimerPhase::Expired);
}

#[test]
fn hand_washing_dialed_manually_then_stopped() {
    let clock = SimulatedTickSource::new();
    let mut controller = TimerController::new(clock.clone());

    for (field, value) in [
        (TimeField::Hour, 0),
        (TimeField::Minute, 0),
        (TimeField::Second, 20),
    ] {
        controller.dispatch(Intent::FieldScrollSettled { field, value });
    }
    assert_eq!(controller.state().selected_action_id, None);

    controller.start();
    let state = controller.stop();
    assert_eq!(state.remaining_ms, 20_000);
    assert!(!state.is_running);
    assert!(clock.advance(30_000).is_empty());
}

#[test]
fn digital_clock_format() {
    assert_eq!(format_digital_clock(3_661_000), "01:01:01");
}

#[tokio::test(start_paused = true)]
async fn interval_source_drives_controller_to_expiry() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut controller = TimerController::new(IntervalTickSource::new(tx));
    controller.set_sec(3);
    controller.start();

    while let Some(event) = rx.recv().await {
        let before = controller.state().remaining_ms;
        controller.handle_tick(event);
        assert!(controller.state().remaining_ms <= before);
        if !controller.state().is_running {
            break;
        }
    }

    let state = controller.state();
    assert!(state.is_expired);
    assert_eq!(state.remaining_ms, 0);
}

#[tokio::test(start_paused = true)]
async fn restart_leaves_a_single_live_countdown() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut controller = TimerController::new(IntervalTickSource::new(tx));
    controller.set_sec(2);
    controller.start();
    controller.start();
    assert_eq!(controller.ticker().live_count(), 1);

    let live = controller.active_source();
    let mut finished = 0;
    while let Ok(Some(event)) = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await {
        assert_eq!(Some(event.source()), live);
        controller.handle_tick(event);
        if !controller.state().is_running {
            finished += 1;
        }
    }
    assert_eq!(finished, 1);
}
