//! Roast session state machine.
//!
//! `Idle -> Running` on [`RoastSession::start`]; there is no terminal state.
//! Every entry point takes `&mut self`, so at most one mutation is in flight.
//! Operator actions are serialized with ticks by whoever owns the engine
//! (see [`crate::runner`]).

use std::sync::Arc;
use std::time::Duration;

use rl_core::{Clock, SystemClock};
use rl_profiles::{ActiveSelection, ProfileCatalog};
use tracing::{info, warn};

use crate::buffer::{Reading, SessionBuffer};
use crate::config::SessionConfig;
use crate::display::{format_elapsed, format_mean};
use crate::error::{SessionError, SessionResult};
use crate::events::{ProfileChanged, ReferenceCurve, RenderReset, RenderUpdate};
use crate::source::{SampleRequest, SampleSource, SourceEvent, SourceMode, acquire_source};
use crate::window::RollingWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
}

/// Result of one tick that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// A sample was accepted.
    Rendered(RenderUpdate),
    /// The source had nothing this tick.
    NoData,
    /// The source is exhausted.
    EndOfStream,
    /// `tick` was called before `start`.
    Idle,
}

/// Derived display state, cleared on reset.
#[derive(Debug, Clone, PartialEq)]
struct DisplayState {
    last_mean: Option<f64>,
    elapsed_display: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            last_mean: None,
            elapsed_display: format_elapsed(Duration::ZERO),
        }
    }
}

pub struct RoastSession<C: Clock = SystemClock> {
    catalog: Arc<ProfileCatalog>,
    selection: ActiveSelection,
    source: Box<dyn SampleSource>,
    buffer: SessionBuffer,
    window: RollingWindow,
    clock: C,
    state: EngineState,
    display: DisplayState,
}

impl RoastSession<SystemClock> {
    pub fn new(
        catalog: Arc<ProfileCatalog>,
        selection: ActiveSelection,
        source: Box<dyn SampleSource>,
    ) -> Self {
        Self::with_clock(catalog, selection, source, SystemClock::new())
    }

    /// Resolve the selection and pick live-or-demo from `config`.
    pub fn from_config(
        config: &SessionConfig,
        catalog: Arc<ProfileCatalog>,
    ) -> SessionResult<Self> {
        config.validate()?;
        let selection = config.selection(&catalog)?;
        let source = acquire_source(config);
        Ok(Self::new(catalog, selection, source))
    }
}

impl<C: Clock> RoastSession<C> {
    pub fn with_clock(
        catalog: Arc<ProfileCatalog>,
        selection: ActiveSelection,
        source: Box<dyn SampleSource>,
        clock: C,
    ) -> Self {
        let buffer = SessionBuffer::new(clock.now());
        Self {
            catalog,
            selection,
            source,
            buffer,
            window: RollingWindow::default(),
            clock,
            state: EngineState::Idle,
            display: DisplayState::default(),
        }
    }

    /// Stamp the session start and begin accepting ticks.
    pub fn start(&mut self) {
        self.buffer.restart(self.clock.now());
        self.display = DisplayState::default();
        self.state = EngineState::Running;
        info!(
            source = %self.source.mode(),
            profile = %self.selection,
            "roast session started"
        );
    }

    /// Acquire one sample and fold it into the session.
    ///
    /// A `MalformedReading` error leaves buffer and display state untouched.
    pub fn tick(&mut self) -> SessionResult<TickOutcome> {
        if self.state != EngineState::Running {
            return Ok(TickOutcome::Idle);
        }

        let request = SampleRequest {
            elapsed_min: self.elapsed_min(),
            profile: self.catalog.synthesis_profile(&self.selection),
        };
        let temp_c = match self.source.next(&request) {
            Ok(SourceEvent::Temperature(t)) => t,
            Ok(SourceEvent::Suspend) => return Ok(TickOutcome::NoData),
            Ok(SourceEvent::EndOfStream) => return Ok(TickOutcome::EndOfStream),
            Err(e) => {
                if let SessionError::MalformedReading { raw } = &e {
                    warn!(raw = %raw, "invalid value received, sample skipped");
                }
                return Err(e);
            }
        };

        // Stamp after acquisition: a live read may have blocked.
        let elapsed = self.elapsed();
        let reading = Reading::new(elapsed.as_secs_f64() / rl_core::SECONDS_PER_MINUTE, temp_c);
        self.buffer.append(reading);
        let watermark_changed = self.buffer.maybe_grow_watermark(reading.time_min);
        let mean_c = self.window.update(&self.buffer, reading.time_min);

        self.display.last_mean = mean_c;
        self.display.elapsed_display = format_elapsed(elapsed);

        Ok(TickOutcome::Rendered(RenderUpdate {
            samples: self.buffer.samples().to_vec(),
            latest: reading,
            watermark: self.buffer.watermark(),
            watermark_changed,
            mean_c,
            mean_text: format_mean(mean_c),
            elapsed_text: self.display.elapsed_display.clone(),
        }))
    }

    /// Empty the buffer and restart the clock. Valid in any state; keeps the
    /// selection and the source.
    pub fn reset(&mut self) -> RenderReset {
        self.buffer.restart(self.clock.now());
        self.display = DisplayState::default();
        info!("roast session reset");
        RenderReset {
            watermark: self.buffer.watermark(),
            mean_text: format_mean(None),
            elapsed_text: self.display.elapsed_display.clone(),
        }
    }

    /// Switch the reference curve(s). Unknown ids are rejected with no
    /// state change. The sample buffer is kept.
    pub fn select_profile(&mut self, id: &str) -> SessionResult<ProfileChanged> {
        let selection = ActiveSelection::parse(id, &self.catalog).inspect_err(|e| {
            warn!("profile selection rejected: {e}");
        })?;
        self.selection = selection;
        info!(profile = %self.selection, "reference profile changed");
        Ok(self.profile_changed())
    }

    /// Curves to draw for the current selection.
    pub fn reference_curves(&self) -> Vec<ReferenceCurve> {
        // The selection was parsed against this catalog, so it always resolves.
        self.selection
            .resolve(&self.catalog)
            .map(|profiles| profiles.into_iter().map(ReferenceCurve::from).collect())
            .unwrap_or_default()
    }

    pub fn profile_changed(&self) -> ProfileChanged {
        ProfileChanged {
            selection: self.selection.clone(),
            curves: self.reference_curves(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.buffer.elapsed(self.clock.now())
    }

    pub fn elapsed_min(&self) -> f64 {
        self.buffer.elapsed_min(self.clock.now())
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn selection(&self) -> &ActiveSelection {
        &self.selection
    }

    pub fn buffer(&self) -> &SessionBuffer {
        &self.buffer
    }

    pub fn catalog(&self) -> &ProfileCatalog {
        &self.catalog
    }

    pub fn source_mode(&self) -> SourceMode {
        self.source.mode()
    }

    pub fn last_mean(&self) -> Option<f64> {
        self.display.last_mean
    }

    pub fn elapsed_display(&self) -> &str {
        &self.display.elapsed_display
    }
}
