//! Single-threaded session loop.
//!
//! Operator commands arrive on a channel and are applied between ticks, so
//! the engine never sees two mutations at once. The loop owns the engine;
//! when it returns, on any path including unwinding, the engine and with it
//! the transport handle are dropped.

use std::ops::ControlFlow;
use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use rl_core::Clock;
use tracing::{debug, error, info, warn};

use crate::engine::{RoastSession, TickOutcome};
use crate::error::SessionError;
use crate::events::RenderEvent;

/// Operator intent forwarded from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Reset,
    SelectProfile(String),
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A `Stop` command was received.
    Requested,
    /// Every command sender was dropped.
    Disconnected,
    /// The sample source is exhausted.
    EndOfStream,
    /// `max_elapsed_min` was reached.
    ElapsedLimit,
    /// `max_ticks` was reached.
    TickLimit,
    /// The source returned an error the loop cannot continue through.
    SourceFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopOptions {
    /// Wait between ticks. Commands that arrive during the wait are applied
    /// right away; the wait still runs to its full length.
    pub pacing: Duration,
    pub max_elapsed_min: Option<f64>,
    pub max_ticks: Option<u64>,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            pacing: Duration::from_millis(100),
            max_elapsed_min: None,
            max_ticks: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub accepted: u64,
    pub malformed: u64,
    pub idle_ticks: u64,
    pub transport_errors: u64,
    pub rejected_commands: u64,
    pub stop_reason: StopReason,
}

impl SessionSummary {
    fn new() -> Self {
        Self {
            ticks: 0,
            accepted: 0,
            malformed: 0,
            idle_ticks: 0,
            transport_errors: 0,
            rejected_commands: 0,
            stop_reason: StopReason::Requested,
        }
    }
}

/// Drive `engine` until a stop condition, forwarding every render event to
/// `sink`. Emits the initial reference curves right after start.
pub fn run_session<C, F>(
    mut engine: RoastSession<C>,
    commands: &Receiver<SessionCommand>,
    options: &LoopOptions,
    mut sink: F,
) -> SessionSummary
where
    C: Clock,
    F: FnMut(RenderEvent),
{
    let mut summary = SessionSummary::new();
    engine.start();
    sink(RenderEvent::ProfileChanged(engine.profile_changed()));

    let stop = loop {
        if let ControlFlow::Break(reason) =
            drain_commands(&mut engine, commands, &mut summary, &mut sink)
        {
            break reason;
        }
        if options.max_ticks.is_some_and(|limit| summary.ticks >= limit) {
            break StopReason::TickLimit;
        }

        summary.ticks += 1;
        match engine.tick() {
            Ok(TickOutcome::Rendered(update)) => {
                summary.accepted += 1;
                sink(RenderEvent::Update(update));
            }
            Ok(TickOutcome::NoData) | Ok(TickOutcome::Idle) => summary.idle_ticks += 1,
            Ok(TickOutcome::EndOfStream) => break StopReason::EndOfStream,
            Err(SessionError::MalformedReading { .. }) => summary.malformed += 1,
            Err(e) if e.is_recoverable() => {
                warn!("tick failed: {e}");
                summary.transport_errors += 1;
            }
            Err(e) => {
                error!("sample source failed: {e}");
                break StopReason::SourceFailed;
            }
        }

        if options
            .max_elapsed_min
            .is_some_and(|limit| engine.elapsed_min() >= limit)
        {
            break StopReason::ElapsedLimit;
        }

        if let ControlFlow::Break(reason) =
            wait_pacing(&mut engine, commands, options.pacing, &mut summary, &mut sink)
        {
            break reason;
        }
    };

    summary.stop_reason = stop;
    info!(
        ticks = summary.ticks,
        accepted = summary.accepted,
        malformed = summary.malformed,
        reason = ?summary.stop_reason,
        "roast session stopped"
    );
    drop(engine);
    debug!("session resources released");
    summary
}

/// Sleep until `pacing` has elapsed, applying commands as they arrive.
fn wait_pacing<C, F>(
    engine: &mut RoastSession<C>,
    commands: &Receiver<SessionCommand>,
    pacing: Duration,
    summary: &mut SessionSummary,
    sink: &mut F,
) -> ControlFlow<StopReason>
where
    C: Clock,
    F: FnMut(RenderEvent),
{
    let deadline = Instant::now() + pacing;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return ControlFlow::Continue(());
        }
        match commands.recv_timeout(remaining) {
            Ok(command) => {
                if let ControlFlow::Break(reason) = apply_command(engine, command, summary, sink) {
                    return ControlFlow::Break(reason);
                }
            }
            Err(RecvTimeoutError::Timeout) => return ControlFlow::Continue(()),
            Err(RecvTimeoutError::Disconnected) => {
                return ControlFlow::Break(StopReason::Disconnected);
            }
        }
    }
}

fn drain_commands<C, F>(
    engine: &mut RoastSession<C>,
    commands: &Receiver<SessionCommand>,
    summary: &mut SessionSummary,
    sink: &mut F,
) -> ControlFlow<StopReason>
where
    C: Clock,
    F: FnMut(RenderEvent),
{
    loop {
        match commands.try_recv() {
            Ok(command) => {
                if let ControlFlow::Break(reason) = apply_command(engine, command, summary, sink) {
                    return ControlFlow::Break(reason);
                }
            }
            Err(TryRecvError::Empty) => return ControlFlow::Continue(()),
            Err(TryRecvError::Disconnected) => return ControlFlow::Break(StopReason::Disconnected),
        }
    }
}

fn apply_command<C, F>(
    engine: &mut RoastSession<C>,
    command: SessionCommand,
    summary: &mut SessionSummary,
    sink: &mut F,
) -> ControlFlow<StopReason>
where
    C: Clock,
    F: FnMut(RenderEvent),
{
    match command {
        SessionCommand::Reset => sink(RenderEvent::Reset(engine.reset())),
        SessionCommand::SelectProfile(id) => match engine.select_profile(&id) {
            Ok(changed) => sink(RenderEvent::ProfileChanged(changed)),
            Err(_) => summary.rejected_commands += 1,
        },
        SessionCommand::Stop => return ControlFlow::Break(StopReason::Requested),
    }
    ControlFlow::Continue(())
}
