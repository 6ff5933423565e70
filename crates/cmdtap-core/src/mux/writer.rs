//! Terminal writer: prints channel lines until the end-of-stream sentinel.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::warn;

use super::drain::LineEvent;

use crate::style::LineStyle;

/// Pull lines off the shared channel and print each one decorated with
/// `style`, one per line, until [`LineEvent::Eof`] arrives. Performs no
/// further reads after the sentinel.
///
/// The sink is flushed before returning, so once this task is joined every
/// mirrored line has reached the terminal. The channel is unbounded, which
/// keeps the drainers (and through them the child) from ever waiting on
/// terminal rendering speed.
pub async fn write_lines<W>(mut lines_rx: UnboundedReceiver<LineEvent>, style: LineStyle, mut sink: W)
where
    W: AsyncWrite + Unpin,
{
    while let Some(event) = lines_rx.recv().await {
        match event {
            LineEvent::Line(line) => {
                let mut painted = style.paint(&line);
                painted.push('\n');
                if let Err(e) = sink.write_all(painted.as_bytes()).await {
                    warn!(error = %e, "Terminal write failed, stopping writer");
                    break;
                }
            }
            LineEvent::Eof => break,
        }
    }

    if let Err(e) = sink.flush().await {
        warn!(error = %e, "Terminal flush failed");
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn prints_one_decorated_line_per_event() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(LineEvent::Line("hello".to_string())).unwrap();
        tx.send(LineEvent::Line("world".to_string())).unwrap();
        tx.send(LineEvent::Eof).unwrap();

        let mut sink = Vec::new();
        write_lines(rx, LineStyle::default(), &mut sink).await;

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "\x1b[37mhello\x1b[0m\n\x1b[37mworld\x1b[0m\n"
        );
    }

    #[tokio::test]
    async fn stops_permanently_at_the_sentinel() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(LineEvent::Line("before".to_string())).unwrap();
        tx.send(LineEvent::Eof).unwrap();
        tx.send(LineEvent::Line("after".to_string())).unwrap();

        let mut sink = Vec::new();
        write_lines(rx, LineStyle::plain(), &mut sink).await;

        assert_eq!(String::from_utf8(sink).unwrap(), "before\n");
    }

    #[tokio::test]
    async fn empty_channel_prints_nothing() {
        let (tx, rx) = mpsc::unbounded_channel::<LineEvent>();
        tx.send(LineEvent::Eof).unwrap();

        let mut sink = Vec::new();
        write_lines(rx, LineStyle::default(), &mut sink).await;

        assert!(sink.is_empty());
    }
}
