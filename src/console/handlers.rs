//! Console command handlers

use tracing::{info, warn};

use super::{
    commands::{ConsoleCommand, HELP},
    responses::{CommandResponse, StatusResponse},
};
use crate::state::{AppState, Outcome, Snapshot};

/// What the console should print (or do) after a command
#[derive(Debug, Clone)]
pub enum Reply {
    Command(CommandResponse),
    Status(StatusResponse),
    Help(&'static str),
    Quit,
}

/// Dispatch one parsed command against the shared state
pub fn handle_command(state: &AppState, command: ConsoleCommand) -> Reply {
    let result = match command {
        ConsoleCommand::ToggleLight => state.toggle_light(),
        ConsoleCommand::IncreaseTemperature => state.increase_temperature(),
        ConsoleCommand::DecreaseTemperature => state.decrease_temperature(),
        ConsoleCommand::SetTimer(seconds) => state.set_timer(seconds),
        ConsoleCommand::ConfirmTimer => state.confirm_timer(),
        ConsoleCommand::Tick => state.tick(),
        ConsoleCommand::Status => return status_reply(state),
        ConsoleCommand::Help => return Reply::Help(HELP),
        ConsoleCommand::Quit => return Reply::Quit,
    };

    match result {
        Ok((outcome, snapshot)) => {
            info!("Console command '{}' {:?}", command.name(), outcome);
            Reply::Command(CommandResponse::from_outcome(
                outcome,
                describe(command, outcome, &snapshot),
                snapshot,
            ))
        }
        Err(e) => {
            warn!("Console command '{}' rejected: {}", command.name(), e);
            Reply::Command(CommandResponse::error(e.to_string()))
        }
    }
}

fn status_reply(state: &AppState) -> Reply {
    match state.snapshot() {
        Ok(snapshot) => {
            let (last_action, last_action_time) = state.last_action().unzip();
            Reply::Status(StatusResponse {
                snapshot,
                uptime: state.uptime(),
                last_action,
                last_action_time,
            })
        }
        Err(e) => Reply::Command(CommandResponse::error(e.to_string())),
    }
}

fn describe(command: ConsoleCommand, outcome: Outcome, snapshot: &Snapshot) -> String {
    if outcome == Outcome::Ignored {
        return format!("'{}' has no effect in mode {}", command.name(), snapshot.mode);
    }

    match command {
        ConsoleCommand::ToggleLight => {
            format!("Light switched {}", if snapshot.light_on { "on" } else { "off" })
        }
        ConsoleCommand::IncreaseTemperature | ConsoleCommand::DecreaseTemperature => {
            format!("Temperature set to {}C", snapshot.temperature_celsius)
        }
        ConsoleCommand::SetTimer(seconds) => format!("Timer armed for {}s", seconds),
        ConsoleCommand::ConfirmTimer => "Timer started".to_string(),
        ConsoleCommand::Tick => format!("Ticked, now {}", snapshot.mode),
        ConsoleCommand::Status | ConsoleCommand::Help | ConsoleCommand::Quit => String::new(),
    }
}
