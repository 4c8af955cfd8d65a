//! Line-oriented, timeout-bounded byte transports.
//!
//! The live sensor streams one ASCII temperature per line. [`SerialTransport`]
//! is the production implementation; [`ScriptedTransport`] replays a fixed
//! sequence and is what tests and dry runs use.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};

/// Result of one bounded line read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    /// A complete line, terminator stripped.
    Line(Vec<u8>),
    /// Nothing arrived before the timeout. Not an error.
    Timeout,
    /// The peer went away; no more lines will follow.
    Closed,
}

/// Source of newline-delimited records.
///
/// Implementations release their underlying handle on drop.
pub trait LineTransport: Send {
    fn read_line(&mut self, timeout: Duration) -> io::Result<LineRead>;
}

/// Serial port transport built on the `serialport` crate.
pub struct SerialTransport {
    port_name: String,
    reader: BufReader<Box<dyn serialport::SerialPort>>,
    timeout: Duration,
    pending: Vec<u8>,
}

impl SerialTransport {
    /// Open `port` at `baud`. Failure here is the live/demo fork point.
    pub fn open(port: &str, baud: u32, timeout: Duration) -> SessionResult<Self> {
        let handle = serialport::new(port, baud)
            .timeout(timeout)
            .open()
            .map_err(|e| SessionError::ConnectFailure {
                port: port.to_string(),
                message: e.to_string(),
            })?;
        info!(port, baud, "serial transport opened");
        Ok(Self {
            port_name: port.to_string(),
            reader: BufReader::new(handle),
            timeout,
            pending: Vec::new(),
        })
    }

    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}

impl LineTransport for SerialTransport {
    fn read_line(&mut self, timeout: Duration) -> io::Result<LineRead> {
        if timeout != self.timeout {
            self.reader.get_mut().set_timeout(timeout)?;
            self.timeout = timeout;
        }
        read_pending_line(&mut self.reader, &mut self.pending)
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        debug!(port = %self.port_name, "serial transport closed");
    }
}

/// Read up to the next `\n` into `pending`.
///
/// Bytes read before a timeout stay in `pending` and are completed by the
/// next call.
fn read_pending_line<R: BufRead>(reader: &mut R, pending: &mut Vec<u8>) -> io::Result<LineRead> {
    match reader.read_until(b'\n', pending) {
        Ok(0) if pending.is_empty() => Ok(LineRead::Closed),
        Ok(_) => Ok(LineRead::Line(take_line(pending))),
        Err(e)
            if matches!(
                e.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
            ) =>
        {
            Ok(LineRead::Timeout)
        }
        Err(e) => Err(e),
    }
}

/// Take the buffered line out of `pending`, stripping `\n` / `\r\n`.
fn take_line(pending: &mut Vec<u8>) -> Vec<u8> {
    let mut line = std::mem::take(pending);
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    line
}

/// In-memory transport that replays a fixed script, then reports `Closed`.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: VecDeque<io::Result<LineRead>>,
    released: Arc<AtomicBool>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script that yields each string as one line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut transport = Self::new();
        for line in lines {
            transport.push_line(line.as_ref());
        }
        transport
    }

    pub fn push_line(&mut self, line: &str) -> &mut Self {
        self.script
            .push_back(Ok(LineRead::Line(line.as_bytes().to_vec())));
        self
    }

    pub fn push(&mut self, read: LineRead) -> &mut Self {
        self.script.push_back(Ok(read));
        self
    }

    pub fn push_error(&mut self, kind: io::ErrorKind) -> &mut Self {
        self.script.push_back(Err(io::Error::from(kind)));
        self
    }

    /// Flag that flips to `true` once this transport is dropped.
    pub fn release_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.released)
    }
}

impl LineTransport for ScriptedTransport {
    fn read_line(&mut self, _timeout: Duration) -> io::Result<LineRead> {
        self.script.pop_front().unwrap_or(Ok(LineRead::Closed))
    }
}

impl Drop for ScriptedTransport {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    /// Reader that hands out one scripted chunk or error per `read` call.
    struct ChunkedReader {
        chunks: VecDeque<io::Result<Vec<u8>>>,
    }

    impl Read for ChunkedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.chunks.pop_front() {
                Some(Ok(chunk)) => {
                    let n = chunk.len().min(buf.len());
                    buf[..n].copy_from_slice(&chunk[..n]);
                    Ok(n)
                }
                Some(Err(e)) => Err(e),
                None => Ok(0),
            }
        }
    }

    #[test]
    fn partial_line_survives_timeout() {
        let reader = ChunkedReader {
            chunks: VecDeque::from([
                Ok(b"12.".to_vec()),
                Err(io::Error::from(io::ErrorKind::TimedOut)),
                Ok(b"3\n".to_vec()),
            ]),
        };
        let mut reader = BufReader::new(reader);
        let mut pending = Vec::new();

        assert_eq!(
            read_pending_line(&mut reader, &mut pending).unwrap(),
            LineRead::Timeout
        );
        assert_eq!(pending, b"12.");
        assert_eq!(
            read_pending_line(&mut reader, &mut pending).unwrap(),
            LineRead::Line(b"12.3".to_vec())
        );
        assert!(pending.is_empty());
        assert_eq!(
            read_pending_line(&mut reader, &mut pending).unwrap(),
            LineRead::Closed
        );
    }

    #[test]
    fn hard_read_error_is_propagated() {
        let reader = ChunkedReader {
            chunks: VecDeque::from([Err(io::Error::from(io::ErrorKind::BrokenPipe))]),
        };
        let mut pending = Vec::new();
        let err = read_pending_line(&mut BufReader::new(reader), &mut pending).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn take_line_strips_terminators() {
        let mut pending = b"123.4\r\n".to_vec();
        assert_eq!(take_line(&mut pending), b"123.4");
        assert!(pending.is_empty());

        let mut pending = b"77".to_vec();
        assert_eq!(take_line(&mut pending), b"77");
    }

    #[test]
    fn scripted_transport_replays_then_closes() {
        let mut transport = ScriptedTransport::from_lines(["1.0", "2.0"]);
        transport.push(LineRead::Timeout);
        let t = Duration::from_millis(10);
        assert_eq!(transport.read_line(t).unwrap(), LineRead::Line(b"1.0".to_vec()));
        assert_eq!(transport.read_line(t).unwrap(), LineRead::Line(b"2.0".to_vec()));
        assert_eq!(transport.read_line(t).unwrap(), LineRead::Timeout);
        assert_eq!(transport.read_line(t).unwrap(), LineRead::Closed);
    }

    #[test]
    fn scripted_transport_signals_release() {
        let transport = ScriptedTransport::new();
        let flag = transport.release_flag();
        assert!(!flag.load(Ordering::SeqCst));
        drop(transport);
        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn opening_missing_port_is_connect_failure() {
        let result = SerialTransport::open(
            "/dev/roastline-no-such-port",
            115_200,
            Duration::from_millis(10),
        );
        assert!(matches!(result, Err(SessionError::ConnectFailure { .. })));
    }
}
