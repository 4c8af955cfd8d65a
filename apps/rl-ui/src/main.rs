#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod roast_plot;
mod session_worker;

use std::path::PathBuf;

use app::RoastlineApp;
use clap::Parser;
use rl_session::{ConfigOverrides, SessionConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rl-ui")]
#[command(about = "Roastline viewer - live coffee roast curve against reference profiles", long_about = None)]
struct UiArgs {
    /// Session config YAML file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Reference profile id, or "a"/"all" to overlay every profile
    #[arg(short, long)]
    profile: Option<String>,
    /// Serial port
    #[arg(long)]
    port: Option<String>,
    /// Baud rate
    #[arg(long)]
    baud: Option<u32>,
    /// Calibration offset subtracted from raw sensor values (°C)
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<f64>,
    /// Use demo data without probing the serial port
    #[arg(long)]
    demo: bool,
    /// Seed for reproducible demo data
    #[arg(long)]
    seed: Option<u64>,
}

impl UiArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            profile: self.profile.clone(),
            port: self.port.clone(),
            baud: self.baud,
            calibration_offset_c: self.offset,
            demo_seed: self.seed,
            force_demo: self.demo,
        }
    }
}

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = UiArgs::parse();
    let config = SessionConfig::resolve(args.config.as_deref(), &args.overrides());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("Roastline"),
        ..Default::default()
    };

    eframe::run_native(
        "Roastline",
        options,
        Box::new(move |cc| Ok(Box::new(RoastlineApp::new(cc, config)))),
    )
}
