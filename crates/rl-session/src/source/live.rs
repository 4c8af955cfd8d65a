use std::time::Duration;

use tracing::warn;

use super::{SampleRequest, SampleSource, SourceEvent, SourceMode};
use crate::error::{SessionError, SessionResult};
use crate::transport::{LineRead, LineTransport};

/// Reads calibrated temperatures from a line transport.
///
/// Owns the transport; dropping the source releases it.
pub struct LiveSource<T: LineTransport> {
    transport: T,
    calibration_offset_c: f64,
    read_timeout: Duration,
}

impl<T: LineTransport> LiveSource<T> {
    pub fn new(transport: T, calibration_offset_c: f64, read_timeout: Duration) -> Self {
        Self {
            transport,
            calibration_offset_c,
            read_timeout,
        }
    }

    /// Parse one raw line into a calibrated temperature.
    ///
    /// Blank lines carry no data. Anything else that is not a finite number
    /// is malformed.
    pub fn parse_line(&self, raw: &[u8]) -> SessionResult<SourceEvent> {
        let malformed = || SessionError::MalformedReading {
            raw: String::from_utf8_lossy(raw).trim().to_string(),
        };
        let text = std::str::from_utf8(raw).map_err(|_| malformed())?.trim();
        if text.is_empty() {
            return Ok(SourceEvent::Suspend);
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                Ok(SourceEvent::Temperature(value - self.calibration_offset_c))
            }
            _ => Err(malformed()),
        }
    }
}

impl<T: LineTransport> SampleSource for LiveSource<T> {
    fn next(&mut self, _request: &SampleRequest<'_>) -> SessionResult<SourceEvent> {
        match self.transport.read_line(self.read_timeout) {
            Ok(LineRead::Line(raw)) => self.parse_line(&raw),
            Ok(LineRead::Timeout) => Ok(SourceEvent::Suspend),
            Ok(LineRead::Closed) => Ok(SourceEvent::EndOfStream),
            Err(e) => {
                warn!("transport read failed: {e}");
                Err(SessionError::Transport {
                    message: e.to_string(),
                })
            }
        }
    }

    fn mode(&self) -> SourceMode {
        SourceMode::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ScriptedTransport;
    use rl_profiles::{Profile, ProfilePoint};
    use std::io;

    fn flat() -> Profile {
        Profile::new("flat", "Flat", [ProfilePoint::new(0.0, 0.0)]).unwrap()
    }

    fn source(transport: ScriptedTransport) -> LiveSource<ScriptedTransport> {
        LiveSource::new(transport, 3.7, Duration::from_secs(1))
    }

    #[test]
    fn applies_calibration_offset() {
        let profile = flat();
        let request = SampleRequest {
            elapsed_min: 0.0,
            profile: &profile,
        };
        let mut live = source(ScriptedTransport::from_lines(["100.0", "  25.5\r"]));
        let SourceEvent::Temperature(t) = live.next(&request).unwrap() else {
            panic!("expected a temperature");
        };
        assert!((t - 96.3).abs() < 1e-9);
        let SourceEvent::Temperature(t) = live.next(&request).unwrap() else {
            panic!("expected a temperature");
        };
        assert!((t - 21.8).abs() < 1e-9);
    }

    #[test]
    fn garbage_is_malformed() {
        let live = source(ScriptedTransport::new());
        for raw in [&b"abc"[..], b"12.5.1", b"nan", b"\xff\xfe"] {
            assert!(matches!(
                live.parse_line(raw),
                Err(SessionError::MalformedReading { .. })
            ));
        }
    }

    #[test]
    fn timeout_and_blank_lines_are_no_data() {
        let profile = flat();
        let request = SampleRequest {
            elapsed_min: 0.0,
            profile: &profile,
        };
        let mut transport = ScriptedTransport::new();
        transport.push(LineRead::Timeout).push_line("   ");
        let mut live = source(transport);
        assert_eq!(live.next(&request).unwrap(), SourceEvent::Suspend);
        assert_eq!(live.next(&request).unwrap(), SourceEvent::Suspend);
        assert_eq!(live.next(&request).unwrap(), SourceEvent::EndOfStream);
    }

    #[test]
    fn io_failure_is_transport_error() {
        let profile = flat();
        let request = SampleRequest {
            elapsed_min: 0.0,
            profile: &profile,
        };
        let mut transport = ScriptedTransport::new();
        transport.push_error(io::ErrorKind::BrokenPipe);
        let mut live = source(transport);
        assert!(matches!(
            live.next(&request),
            Err(SessionError::Transport { .. })
        ));
    }
}
