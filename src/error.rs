//! Error types for the controller and the console surface

use thiserror::Error;

/// Errors reported synchronously by the controller or its shared wrapper.
///
/// The state machine itself never fails: these only cover rejected input and
/// a poisoned lock around the shared controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("timer duration must not be negative (got {0}s)")]
    NegativeTimer(i64),

    #[error("timer duration of {0}s is too long")]
    TimerTooLong(i64),

    #[error("failed to lock controller: {0}")]
    LockPoisoned(String),
}

/// Errors produced while parsing a console line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("command '{0}' requires an argument")]
    MissingArgument(&'static str),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("unexpected argument for '{command}': {argument}")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
}
