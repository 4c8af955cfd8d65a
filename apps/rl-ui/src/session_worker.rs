use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use rl_session::{
    LoopOptions, RenderEvent, RoastSession, SessionCommand, SessionSummary, run_session,
};

#[derive(Debug, Clone)]
pub enum WorkerMessage {
    Render(RenderEvent),
    Finished(SessionSummary),
}

/// Owns the thread running the session loop.
///
/// Dropping the worker sends `Stop` and joins the thread, so the transport is
/// released before the window goes away.
pub struct SessionWorker {
    commands: Sender<SessionCommand>,
    pub events_rx: Receiver<WorkerMessage>,
    handle: Option<JoinHandle<()>>,
}

impl SessionWorker {
    pub fn start(session: RoastSession, options: LoopOptions, ctx: egui::Context) -> Self {
        let (command_tx, command_rx) = channel();
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let summary = run_session(session, &command_rx, &options, |event| {
                let _ = tx.send(WorkerMessage::Render(event));
                ctx.request_repaint();
            });
            let _ = tx.send(WorkerMessage::Finished(summary));
            ctx.request_repaint();
        });

        Self {
            commands: command_tx,
            events_rx: rx,
            handle: Some(handle),
        }
    }

    /// Queue a command; it is applied between ticks.
    pub fn send(&self, command: SessionCommand) {
        if self.commands.send(command).is_err() {
            tracing::debug!("session loop already stopped");
        }
    }
}

impl Drop for SessionWorker {
    fn drop(&mut self) {
        let _ = self.commands.send(SessionCommand::Stop);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("session thread panicked");
            }
        }
    }
}
