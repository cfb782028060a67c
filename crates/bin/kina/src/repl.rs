//! interactive command loop

use std::io::Write;

use kina_client::CommandClient;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Read commands line by line and print each reply as JSON.
///
/// Blank lines are skipped; `exit`, `quit` or end of input stop the loop.
/// Returns how many commands were sent.
pub async fn run<R, W>(client: &CommandClient, input: R, output: &mut W) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut sent = 0;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if matches!(command, "exit" | "quit") {
            break;
        }

        let payload = client.send_command(command).await;
        sent += 1;
        debug!(sent, "reply received");

        writeln!(output, "{}", serde_json::to_string_pretty(&payload)?)?;
    }

    writeln!(output)?;
    Ok(sent)
}
