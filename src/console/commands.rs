//! Parsing of console command lines

use std::str::FromStr;

use crate::error::ConsoleError;

/// A command typed on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    ToggleLight,
    IncreaseTemperature,
    DecreaseTemperature,
    SetTimer(i64),
    ConfirmTimer,
    Tick,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  light | toggle     toggle the light
  temp+ | up         raise temperature by 1C
  temp- | down       lower temperature by 1C (min 5C)
  timer <seconds>    arm the countdown timer
  confirm | start    start an armed timer
  tick               advance time by one tick
  status             show current state
  help               show this help
  quit | exit        leave";

impl FromStr for ConsoleCommand {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ConsoleError::Empty)?.to_lowercase();
        let argument = words.next();

        let command = match name.as_str() {
            "light" | "toggle" => ConsoleCommand::ToggleLight,
            "temp+" | "up" => ConsoleCommand::IncreaseTemperature,
            "temp-" | "down" => ConsoleCommand::DecreaseTemperature,
            "timer" => {
                let raw = argument.ok_or(ConsoleError::MissingArgument("timer"))?;
                let seconds = raw
                    .parse::<i64>()
                    .map_err(|_| ConsoleError::InvalidNumber(raw.to_string()))?;
                if let Some(extra) = words.next() {
                    return Err(ConsoleError::UnexpectedArgument {
                        command: "timer",
                        argument: extra.to_string(),
                    });
                }
                return Ok(ConsoleCommand::SetTimer(seconds));
            }
            "confirm" | "start" => ConsoleCommand::ConfirmTimer,
            "tick" => ConsoleCommand::Tick,
            "status" => ConsoleCommand::Status,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            _ => return Err(ConsoleError::UnknownCommand(name)),
        };

        match argument {
            Some(extra) => Err(ConsoleError::UnexpectedArgument {
                command: command.name(),
                argument: extra.to_string(),
            }),
            None => Ok(command),
        }
    }
}

impl ConsoleCommand {
    /// Canonical command word
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleCommand::ToggleLight => "light",
            ConsoleCommand::IncreaseTemperature => "temp+",
            ConsoleCommand::DecreaseTemperature => "temp-",
            ConsoleCommand::SetTimer(_) => "timer",
            ConsoleCommand::ConfirmTimer => "confirm",
            ConsoleCommand::Tick => "tick",
            ConsoleCommand::Status => "status",
            ConsoleCommand::Help => "help",
            ConsoleCommand::Quit => "quit",
        }
    }
}
