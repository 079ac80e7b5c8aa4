//! Line reading over child process pipes.
//!
//! `dapr` forwards app output verbatim, which is not guaranteed to be UTF-8.
//! `BufReader::lines()` would stop at the first invalid byte, so lines are
//! read as bytes and decoded lossily.

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;
use tracing::debug;

/// Reads `\n`-terminated lines, dropping the terminator (and a preceding `\r`).
pub struct LineReader<R> {
    reader: BufReader<R>,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(stream: R) -> Self {
        Self {
            reader: BufReader::new(stream),
            buf: Vec::with_capacity(1024),
        }
    }

    /// Next line, or `None` at end of stream.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

/// Drain `stream` on a background task, logging each line at `debug`.
pub fn spawn_log_reader(
    stream: impl AsyncRead + Unpin + Send + 'static,
    program: String,
    stream_type: &'static str,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = LineReader::new(stream);
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => debug!(%program, %stream_type, "{line}"),
                Ok(None) => break,
                Err(e) => {
                    debug!(%program, %stream_type, error = %e, "log reader exiting due to read error");
                    break;
                }
            }
        }
    })
}
