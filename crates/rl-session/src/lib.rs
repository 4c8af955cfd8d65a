//! Roast session engine for roastline.
//!
//! Provides:
//! - `SessionBuffer` and `RollingWindow`: accepted samples, axis watermark, trailing mean
//! - `SampleSource` with live (serial line transport) and demo (synthesized) variants
//! - `RoastSession`: the start/tick/reset/select state machine emitting render events
//! - `run_session`: the single-threaded loop that serializes operator commands with ticks
//! - `SessionConfig`: startup configuration, loadable from YAML

pub mod buffer;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod events;
pub mod runner;
pub mod source;
pub mod transport;
pub mod window;

pub use buffer::{INITIAL_WATERMARK_MIN, Reading, SessionBuffer, WATERMARK_STEP_MIN};
pub use config::{ConfigOverrides, SessionConfig};
pub use display::{format_elapsed, format_mean};
pub use engine::{EngineState, RoastSession, TickOutcome};
pub use error::{SessionError, SessionResult};
pub use events::{ProfileChanged, ReferenceCurve, RenderEvent, RenderReset, RenderUpdate};
pub use runner::{LoopOptions, SessionCommand, SessionSummary, StopReason, run_session};
pub use source::{
    DemoSource, LiveSource, SampleRequest, SampleSource, SourceEvent, SourceMode, acquire_source,
    acquire_source_with,
};
pub use transport::{LineRead, LineTransport, ScriptedTransport, SerialTransport};
pub use window::{DEFAULT_WINDOW_MIN, RollingWindow};
