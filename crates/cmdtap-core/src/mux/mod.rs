//! The stream multiplexer: one child process, two pipes, one live feed.
//!
//! [`run`] spawns a child with dedicated stdout/stderr pipes and drains both
//! concurrently. Every decoded line goes to two destinations: a shared
//! unbounded channel feeding the terminal writer, and the owning stream's
//! accumulator. The channel being unbounded decouples the child's I/O speed
//! from terminal rendering speed, so a slow terminal can never back up an OS
//! pipe buffer and stall the child.
//!
//! Ordering: within one stream, line order is preserved exactly as produced.
//! Across the two streams the interleaving reflects only relative task
//! scheduling, matching real concurrent process output.

mod drain;
mod writer;

use std::process::Stdio;

use tokio::io::BufReader;
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::style::LineStyle;

use drain::{LineEvent, Stream};

/// Everything captured from one child-process execution.
#[derive(Debug)]
pub struct Execution {
    /// The child's exit status. Non-zero is ordinary data, not an error.
    pub status: std::process::ExitStatus,
    /// Accumulated stdout text, mirrored live while the child ran.
    pub stdout: String,
    /// Accumulated stderr text: the result handed back to callers.
    pub stderr: String,
}

/// Run `program` with `args`, mirroring both output streams to the terminal
/// as they are produced and capturing each stream separately.
///
/// Arguments are passed literally to the process; no shell is involved. The
/// working directory and stdin are inherited from the calling process. The
/// only hard failure is [`Error::Spawn`].
pub async fn run(program: &str, args: &[String], style: &LineStyle) -> Result<Execution> {
    run_with_sink(program, args, style, tokio::io::stdout()).await
}

/// Same as [`run`] but with an injected output sink, so callers (and tests)
/// can capture the live feed instead of printing it.
pub async fn run_with_sink<W>(
    program: &str,
    args: &[String],
    style: &LineStyle,
    sink: W,
) -> Result<Execution>
where
    W: tokio::io::AsyncWrite + Unpin + Send + 'static,
{
    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;

    info!(program, pid = ?child.id(), "Child spawned");

    let stdout = child.stdout.take().ok_or(Error::Pipe { stream: "stdout" })?;
    let stderr = child.stderr.take().ok_or(Error::Pipe { stream: "stderr" })?;

    let (lines_tx, lines_rx) = mpsc::unbounded_channel::<LineEvent>();

    // All three workers start before the child necessarily produces output.
    let stdout_task = tokio::spawn(drain::drain(
        Stream::Stdout,
        BufReader::new(stdout),
        lines_tx.clone(),
    ));
    let stderr_task = tokio::spawn(drain::drain(
        Stream::Stderr,
        BufReader::new(stderr),
        lines_tx.clone(),
    ));
    let writer_task = tokio::spawn(writer::write_lines(lines_rx, style.clone(), sink));

    // The child can exit while buffered output is still unread; the joins
    // below guarantee both pipes are consumed to EOF regardless.
    let status = child.wait().await?;
    debug!(program, code = status.code().unwrap_or(-1), "Child exited");

    let stdout_lines = stdout_task.await?;
    let stderr_lines = stderr_task.await?;

    // Exactly one sentinel, after both drainers have returned. Joining the
    // writer afterwards guarantees the final line is flushed before we
    // hand the result back.
    let _ = lines_tx.send(LineEvent::Eof);
    writer_task.await?;

    Ok(Execution {
        status,
        stdout: stdout_lines.concat(),
        stderr: stderr_lines.concat(),
    })
}

/// Run `program` with `args` and return the text the child wrote to its
/// error stream over its lifetime, as a single string (empty if none).
///
/// If the child cannot be started at all, the failure is printed to this
/// process's stderr and the process terminates with status 2. A child that
/// starts and then exits non-zero is not an error here: its stderr text is
/// the return value and interpreting it is the caller's business.
#[allow(clippy::print_stderr)]
pub async fn execute(program: &str, args: &[String]) -> String {
    match run(program, args, &LineStyle::default()).await {
        Ok(execution) => execution.stderr,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
