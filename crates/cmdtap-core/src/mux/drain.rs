//! Pipe drainers: incremental line readers feeding the shared channel.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// Which child pipe a drainer owns. Both streams share one channel; this
/// only labels log lines and accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// One item on the shared line channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A decoded line from either stream, trailing newline already stripped.
    Line(String),
    /// No more lines will arrive. Sent exactly once, by the coordinator,
    /// after both drainers have been joined.
    Eof,
}

/// Read `pipe` to end-of-stream, forwarding every decoded line to the
/// shared channel and appending it to this stream's accumulator.
///
/// Lines are read incrementally, so output is visible while the child is
/// still running. Bytes that are not valid UTF-8 are decoded lossily. A
/// mid-stream read error ends this drainer as if EOF had been observed; the
/// sibling stream is unaffected.
///
/// Returns the accumulator once the pipe closes.
pub async fn drain<R>(
    stream: Stream,
    mut pipe: R,
    lines_tx: UnboundedSender<LineEvent>,
) -> Vec<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut accumulated = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match pipe.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                let line = String::from_utf8_lossy(&buf).into_owned();
                debug!(stream = stream.name(), "{}", line);
                // Send only fails if the writer is gone, i.e. the run was
                // abandoned; the capture is still completed.
                let _ = lines_tx.send(LineEvent::Line(line.clone()));
                accumulated.push(line);
            }
            Err(e) => {
                warn!(
                    stream = stream.name(),
                    error = %e,
                    "Pipe read failed, treating as end-of-stream"
                );
                break;
            }
        }
    }

    debug!(
        stream = stream.name(),
        lines = accumulated.len(),
        "Drainer finished"
    );
    accumulated
}
