//! Passive view: renders snapshots and replies for the terminal

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{error, warn};

use super::{
    handlers::Reply,
    responses::{CommandResponse, ResponseStatus, StateChangedEvent},
};
use crate::state::Snapshot;

/// How console output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One-line status, e.g. `[timer_running] light=on temp=22C timer=00:05`
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut line = format!(
        "[{}] light={} temp={}C",
        snapshot.mode,
        if snapshot.light_on { "on" } else { "off" },
        snapshot.temperature_celsius
    );
    if let Some(timer) = snapshot.timer_display() {
        line.push_str(" timer=");
        line.push_str(&timer);
    }
    line
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        error!("Failed to serialize console output: {}", e);
        String::from("{}")
    })
}

/// Render a state change notification
pub fn render_change(format: OutputFormat, snapshot: &Snapshot) -> String {
    match format {
        OutputFormat::Text => render_snapshot(snapshot),
        OutputFormat::Json => to_json(&StateChangedEvent::new(*snapshot)),
    }
}

fn render_command(response: &CommandResponse) -> String {
    match response.status {
        ResponseStatus::Applied => format!("ok: {}", response.message),
        ResponseStatus::Ignored => format!("ignored: {}", response.message),
        ResponseStatus::Error => format!("error: {}", response.message),
    }
}

/// Render a command reply. `Quit` renders nothing.
pub fn render_reply(format: OutputFormat, reply: &Reply) -> Option<String> {
    let rendered = match (format, reply) {
        (_, Reply::Quit) => return None,
        (OutputFormat::Text, Reply::Command(response)) => render_command(response),
        (OutputFormat::Json, Reply::Command(response)) => to_json(response),
        (OutputFormat::Text, Reply::Status(status)) => {
            let mut text = render_snapshot(&status.snapshot);
            text.push_str(&format!("\nuptime: {}", status.uptime));
            if let (Some(action), Some(at)) = (&status.last_action, status.last_action_time) {
                text.push_str(&format!("\nlast action: {} at {}", action, at.to_rfc3339()));
            }
            text
        }
        (OutputFormat::Json, Reply::Status(status)) => to_json(status),
        (OutputFormat::Text, Reply::Help(help)) => help.to_string(),
        (OutputFormat::Json, Reply::Help(help)) => to_json(&serde_json::json!({ "help": help })),
    };
    Some(rendered)
}

/// Observer task printing every published snapshot until the channel closes
pub async fn view_task(mut rx: broadcast::Receiver<Snapshot>, format: OutputFormat) {
    loop {
        match rx.recv().await {
            Ok(snapshot) => println!("{}", render_change(format, &snapshot)),
            Err(RecvError::Lagged(skipped)) => {
                warn!("View fell behind, skipped {} updates", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Mode;

    fn running() -> Snapshot {
        Snapshot {
            mode: Mode::TimerRunning,
            light_on: true,
            temperature_celsius: 22,
            timer_seconds_remaining: Some(5),
        }
    }

    #[test]
    fn should_render_status_line() {
        assert_eq!(
            render_snapshot(&running()),
            "[timer_running] light=on temp=22C timer=00:05"
        );

        let idle = Snapshot {
            mode: Mode::Idle,
            light_on: false,
            temperature_celsius: 5,
            timer_seconds_remaining: None,
        };
        assert_eq!(render_snapshot(&idle), "[idle] light=off temp=5C");
    }

    #[test]
    fn should_render_change_as_flat_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render_change(OutputFormat::Json, &running())).unwrap();

        assert_eq!(json["event"], "state_changed");
        assert_eq!(json["mode"], "timer_running");
        assert_eq!(json["timer_seconds_remaining"], 5);
    }

    #[test]
    fn should_prefix_text_reply_with_status() {
        let reply = Reply::Command(CommandResponse::error("bad".to_string()));
        assert_eq!(
            render_reply(OutputFormat::Text, &reply).as_deref(),
            Some("error: bad")
        );
        assert!(render_reply(OutputFormat::Text, &Reply::Quit).is_none());
    }
}
