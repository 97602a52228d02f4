//! House Automaton - interactive household automation controller
//!
//! Reads commands from stdin, ticks the controller on a fixed period and
//! prints every state change.

use std::sync::Arc;
use anyhow::Context;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;

use house_automaton::{
    config::Config,
    console::{run_console, view_task},
    state::AppState,
    tasks::{ticker_task, IntervalClock},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout only carries console output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!("house_automaton={}", config.log_level()))
        .init();

    info!("Starting house-automaton v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: tick={}ms, ticker={}, json={}",
        config.tick_ms, !config.no_ticker, config.json
    );

    let state = Arc::new(AppState::new());
    let format = config.output_format();

    // The view observes every change published by the controller
    let view = tokio::spawn(view_task(state.subscribe(), format));

    let ticker = if config.no_ticker {
        info!("Periodic ticker disabled");
        None
    } else {
        let clock = IntervalClock::new(config.tick_period());
        Some(tokio::spawn(ticker_task(Arc::clone(&state), clock)))
    };

    let console = run_console(&state, BufReader::new(stdin()), stdout(), format);

    let interrupted = tokio::select! {
        result = console => {
            result.context("console I/O failed")?;
            false
        }
        signal = shutdown_signal() => {
            signal.context("failed to install signal handler")?;
            true
        }
    };

    if let Some(ticker) = ticker {
        ticker.abort();
    }
    view.abort();

    info!("Controller stopped");

    // A pending stdin read would otherwise hold the runtime open
    if interrupted {
        std::process::exit(0);
    }
    Ok(())
}
