use std::sync::Arc;

use rl_profiles::{ALL_PROFILES, ProfileCatalog};
use rl_session::{
    LoopOptions, Reading, ReferenceCurve, RenderEvent, RoastSession, SessionCommand,
    SessionConfig, SessionResult, SourceMode, format_mean,
};

use crate::roast_plot;
use crate::session_worker::{SessionWorker, WorkerMessage};

pub struct RoastlineApp {
    catalog: Option<Arc<ProfileCatalog>>,
    worker: Option<SessionWorker>,
    source_mode: Option<SourceMode>,
    selected_profile: String,
    curves: Vec<ReferenceCurve>,
    samples: Vec<Reading>,
    watermark: f64,
    mean_text: String,
    elapsed_text: String,
    status: Option<String>,
}

impl RoastlineApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SessionResult<SessionConfig>) -> Self {
        let mut app = Self {
            catalog: None,
            worker: None,
            source_mode: None,
            selected_profile: String::new(),
            curves: Vec::new(),
            samples: Vec::new(),
            watermark: rl_session::INITIAL_WATERMARK_MIN,
            mean_text: format_mean(None),
            elapsed_text: rl_session::format_elapsed(std::time::Duration::ZERO),
            status: None,
        };
        match config {
            Ok(config) => {
                app.selected_profile = config.profile.clone();
                app.start_session(&config, cc.egui_ctx.clone());
            }
            Err(e) => app.status = Some(format!("Could not load configuration: {e}")),
        }
        app
    }

    fn start_session(&mut self, config: &SessionConfig, ctx: egui::Context) {
        let catalog = match ProfileCatalog::builtin() {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                self.status = Some(format!("Profile table invalid: {e}"));
                return;
            }
        };
        self.catalog = Some(Arc::clone(&catalog));

        match RoastSession::from_config(config, catalog) {
            Ok(session) => {
                self.source_mode = Some(session.source_mode());
                let options = LoopOptions {
                    pacing: config.pacing(),
                    ..LoopOptions::default()
                };
                self.worker = Some(SessionWorker::start(session, options, ctx));
            }
            Err(e) => self.status = Some(format!("Could not start session: {e}")),
        }
    }

    fn poll_worker(&mut self) {
        let mut finished = false;

        if let Some(worker) = &self.worker {
            while let Ok(msg) = worker.events_rx.try_recv() {
                match msg {
                    WorkerMessage::Render(RenderEvent::Update(update)) => {
                        self.samples = update.samples;
                        self.watermark = update.watermark;
                        self.mean_text = update.mean_text;
                        self.elapsed_text = update.elapsed_text;
                    }
                    WorkerMessage::Render(RenderEvent::Reset(reset)) => {
                        self.samples.clear();
                        self.watermark = reset.watermark;
                        self.mean_text = reset.mean_text;
                        self.elapsed_text = reset.elapsed_text;
                    }
                    WorkerMessage::Render(RenderEvent::ProfileChanged(changed)) => {
                        self.selected_profile = changed.selection.id().to_string();
                        self.curves = changed.curves;
                    }
                    WorkerMessage::Finished(summary) => {
                        self.status = Some(format!(
                            "Session ended ({:?}): {} samples, {} malformed",
                            summary.stop_reason, summary.accepted, summary.malformed
                        ));
                        finished = true;
                        break;
                    }
                }
            }
        }

        if finished {
            self.worker = None;
        }
    }

    fn send(&self, command: SessionCommand) {
        if let Some(worker) = &self.worker {
            worker.send(command);
        }
    }

    fn profile_label(&self, id: &str) -> String {
        if id == ALL_PROFILES {
            "All profiles".to_string()
        } else {
            self.catalog
                .as_ref()
                .and_then(|catalog| catalog.get(id))
                .map(|p| p.longname().to_string())
                .unwrap_or_else(|| id.to_string())
        }
    }
}

impl eframe::App for RoastlineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add_enabled_ui(self.worker.is_some(), |ui| {
                    if ui.button("Reset").clicked() {
                        self.send(SessionCommand::Reset);
                    }

                    ui.separator();
                    ui.label("Profile:");
                    let mut choice = self.selected_profile.clone();
                    egui::ComboBox::from_id_salt("profile_selector")
                        .selected_text(self.profile_label(&choice))
                        .show_ui(ui, |ui| {
                            if let Some(catalog) = &self.catalog {
                                for profile in catalog.all() {
                                    ui.selectable_value(
                                        &mut choice,
                                        profile.id().to_string(),
                                        profile.longname(),
                                    );
                                }
                            }
                            ui.selectable_value(
                                &mut choice,
                                ALL_PROFILES.to_string(),
                                "All profiles",
                            );
                        });
                    // Applied once the loop confirms with ProfileChanged.
                    if choice != self.selected_profile {
                        self.send(SessionCommand::SelectProfile(choice));
                    }
                });

                ui.separator();
                if let Some(mode) = self.source_mode {
                    ui.label(format!("Source: {mode}"));
                }
            });
        });

        egui::TopBottomPanel::bottom("readout").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(&self.mean_text);
                ui.separator();
                ui.monospace(format!("Elapsed: {}", self.elapsed_text));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            roast_plot::show(ui, &self.curves, &self.samples, self.watermark);
        });
    }
}
