//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::console::OutputFormat;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "house-automaton")]
#[command(about = "A deterministic household automation controller driven by commands and periodic ticks")]
#[command(version)]
pub struct Config {
    /// Tick period in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Disable the periodic ticker; time only advances with `tick`
    #[arg(long)]
    pub no_ticker: bool,

    /// Print replies and state changes as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json { OutputFormat::Json } else { OutputFormat::Text }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
