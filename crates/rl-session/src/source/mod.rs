//! Sample acquisition.
//!
//! A [`SampleSource`] yields one temperature per request. The engine stamps
//! the time; sources only decide the value.

mod demo;
mod live;

use std::fmt;

use rl_profiles::Profile;
use tracing::info;

pub use demo::DemoSource;
pub use live::LiveSource;

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::transport::{LineTransport, SerialTransport};

/// What the engine knows when it asks for a sample.
#[derive(Debug, Clone, Copy)]
pub struct SampleRequest<'a> {
    /// Minutes since session start.
    pub elapsed_min: f64,
    /// Curve the demo synthesizer follows. Never the "all" overlay.
    pub profile: &'a Profile,
}

/// Outcome of one acquisition that did not fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceEvent {
    /// A temperature in °C, calibration already applied.
    Temperature(f64),
    /// No data this tick.
    Suspend,
    /// The source is exhausted.
    EndOfStream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Live,
    Demo,
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Live => f.write_str("live"),
            SourceMode::Demo => f.write_str("demo"),
        }
    }
}

pub trait SampleSource: Send {
    /// Acquire one sample. `MalformedReading` errors are non-fatal; the
    /// caller skips them and asks again on the next tick.
    fn next(&mut self, request: &SampleRequest<'_>) -> SessionResult<SourceEvent>;

    fn mode(&self) -> SourceMode;
}

/// Open the serial transport named in `config`, or fall back to demo data.
pub fn acquire_source(config: &SessionConfig) -> Box<dyn SampleSource> {
    acquire_source_with(config, |config| {
        SerialTransport::open(&config.port, config.baud, config.read_timeout())
    })
}

/// Like [`acquire_source`] with a caller-supplied transport opener.
///
/// The decision is made once: a failed open yields a [`DemoSource`] for the
/// rest of the process.
pub fn acquire_source_with<T, F>(config: &SessionConfig, open: F) -> Box<dyn SampleSource>
where
    T: LineTransport + 'static,
    F: FnOnce(&SessionConfig) -> SessionResult<T>,
{
    let demo = || {
        Box::new(DemoSource::new(config.demo_jitter_c, config.demo_seed)) as Box<dyn SampleSource>
    };
    if config.force_demo {
        info!("demo mode requested, transport not probed");
        return demo();
    }
    match open(config) {
        Ok(transport) => Box::new(LiveSource::new(
            transport,
            config.calibration_offset_c,
            config.read_timeout(),
        )),
        Err(e) => {
            info!("{e}; using demo data");
            demo()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use crate::transport::ScriptedTransport;

    #[test]
    fn connect_failure_falls_back_to_demo() {
        let config = SessionConfig::default();
        let source = acquire_source_with(&config, |c| {
            Err::<ScriptedTransport, _>(SessionError::ConnectFailure {
                port: c.port.clone(),
                message: "no such device".into(),
            })
        });
        assert_eq!(source.mode(), SourceMode::Demo);
    }

    #[test]
    fn open_transport_is_live() {
        let config = SessionConfig::default();
        let source = acquire_source_with(&config, |_| Ok(ScriptedTransport::new()));
        assert_eq!(source.mode(), SourceMode::Live);
    }

    #[test]
    fn force_demo_skips_probe() {
        let config = SessionConfig {
            force_demo: true,
            ..SessionConfig::default()
        };
        let source = acquire_source_with(&config, |_| -> SessionResult<ScriptedTransport> {
            panic!("transport must not be opened")
        });
        assert_eq!(source.mode(), SourceMode::Demo);
    }
}
