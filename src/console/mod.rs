//! Console module
//!
//! Local command surface: text commands in, rendered replies and state
//! changes out.

pub mod commands;
pub mod handlers;
pub mod responses;
pub mod view;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::state::AppState;
pub use commands::ConsoleCommand;
pub use handlers::{handle_command, Reply};
pub use view::{view_task, OutputFormat};

/// Read commands line by line until `quit` or end of input, writing each
/// reply to `output`.
pub async fn run_console<R, W>(
    state: &AppState,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<ConsoleCommand>() {
            Ok(command) => handle_command(state, command),
            Err(e) => Reply::Command(responses::CommandResponse::error(e.to_string())),
        };

        match view::render_reply(format, &reply) {
            Some(text) => {
                output.write_all(text.as_bytes()).await?;
                output.write_all(b"\n").await?;
                output.flush().await?;
            }
            None => {
                debug!("Quit requested from console");
                break;
            }
        }
    }

    Ok(())
}
