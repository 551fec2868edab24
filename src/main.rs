//! Dial Timer - a countdown timer with preset actions
//!
//! This is the main entry point for the dial-timer terminal application.

use tokio::sync::mpsc;
use tracing::info;

use dial_timer::{
    config::Config,
    controller::TimerController,
    tasks::{renderer_task, run_session},
    ticker::IntervalTickSource,
    view::render_presets,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, stdout carries the timer display
    tracing_subscriber::fmt()
        .with_env_filter(format!("dial_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    if config.list_presets {
        println!("{}", render_presets());
        return Ok(());
    }

    let intents = config.initial_intents()?;

    info!("Starting dial-timer v1.0.0");

    let (tick_tx, tick_rx) = mpsc::unbounded_channel();
    let mut controller = TimerController::new(IntervalTickSource::new(tick_tx));

    let renderer = tokio::spawn(renderer_task(
        controller.subscribe(),
        config.output_format(),
    ));

    for intent in intents {
        controller.dispatch(intent);
    }

    let end = run_session(controller, tick_rx, config.session_options()).await;
    info!("Session ended: {:?}", end);

    // The controller is gone, so the store is closed and the renderer drains
    if let Err(e) = renderer.await {
        tracing::error!("Renderer task failed: {}", e);
    }

    Ok(())
}
