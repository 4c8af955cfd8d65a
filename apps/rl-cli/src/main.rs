use clap::{Args, Parser, Subcommand};
use rl_profiles::{ALL_ALIAS, ProfileCatalog};
use rl_session::{
    ConfigOverrides, LoopOptions, RenderEvent, RenderUpdate, RoastSession, SessionCommand,
    SessionConfig, SessionResult, SessionSummary, run_session,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::channel;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable, so fallback and
/// skipped-sample notices are always visible.
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser)]
#[command(name = "rl-cli")]
#[command(about = "Roastline CLI - live coffee roast curve against reference profiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the reference profiles
    Profiles,
    /// Export one reference profile as CSV
    ExportProfile {
        /// Profile id (e.g., nsr, bs, kr)
        profile_id: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a session config file with default values
    InitConfig {
        /// Path of the YAML file to create
        path: PathBuf,
    },
    /// Run a roast session (live sensor, or demo data when none is present)
    Run(RunArgs),
}

#[derive(Args)]
struct RunArgs {
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
    /// Stop after this many minutes of session time
    #[arg(long)]
    minutes: Option<f64>,
    /// Print one JSON object per update instead of a status line
    #[arg(long)]
    json: bool,
}

impl RunArgs {
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

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> SessionResult<()> {
    // Logs go to stderr so they do not break the status line on stdout.
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Profiles => cmd_profiles(),
        Commands::ExportProfile { profile_id, output } => {
            cmd_export_profile(&profile_id, output.as_deref())
        }
        Commands::InitConfig { path } => cmd_init_config(&path),
        Commands::Run(args) => cmd_run(args),
    }
}

fn cmd_profiles() -> SessionResult<()> {
    let catalog = ProfileCatalog::builtin()?;
    println!("Reference profiles:");
    for profile in catalog.all() {
        println!(
            "  {:<4} {:<22} {:>3} points, {:>5.1} min",
            profile.id(),
            profile.longname(),
            profile.points().len(),
            profile.duration_min()
        );
    }
    println!("  {:<4} All profiles overlaid", ALL_ALIAS);
    Ok(())
}

fn cmd_export_profile(profile_id: &str, output: Option<&Path>) -> SessionResult<()> {
    let catalog = ProfileCatalog::builtin()?;
    let profile = catalog.lookup(profile_id)?;

    let mut csv = String::from("time_min,temp_c\n");
    for p in profile.points() {
        csv.push_str(&format!("{},{}\n", p.time_min, p.temp_c));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} points of {} to {}",
            profile.points().len(),
            profile.longname(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_init_config(path: &Path) -> SessionResult<()> {
    SessionConfig::default().save_yaml(path)?;
    println!("✓ Wrote default session config to {}", path.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> SessionResult<()> {
    let config = SessionConfig::resolve(args.config.as_deref(), &args.overrides())?;
    let catalog = Arc::new(ProfileCatalog::builtin()?);
    let session = RoastSession::from_config(&config, catalog)?;

    println!(
        "Running roast session: profile={} source={}",
        session.selection(),
        session.source_mode()
    );

    let options = LoopOptions {
        pacing: config.pacing(),
        max_elapsed_min: args.minutes,
        max_ticks: None,
    };
    let (commands, rx) = channel::<SessionCommand>();
    let interrupt = commands.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = interrupt.send(SessionCommand::Stop);
    }) {
        tracing::warn!("could not install Ctrl-C handler: {e}");
    }
    let json = args.json;
    let summary = run_session(session, &rx, &options, |event| match event {
        RenderEvent::Update(update) if json => print_json_line(&update),
        RenderEvent::Update(update) => render_status_line(&update),
        RenderEvent::ProfileChanged(changed) if !json => {
            let names: Vec<_> = changed.curves.iter().map(|c| c.longname.as_str()).collect();
            println!("Reference: {}", names.join(", "));
        }
        RenderEvent::Reset(_) | RenderEvent::ProfileChanged(_) => {}
    });
    drop(commands);
    if !json {
        clear_status_line();
    }

    print_summary(&summary);
    Ok(())
}

#[derive(Serialize)]
struct UpdateLine<'a> {
    elapsed: &'a str,
    time_min: f64,
    temp_c: f64,
    mean_c: Option<f64>,
    watermark: f64,
    watermark_changed: bool,
}

fn print_json_line(update: &RenderUpdate) {
    let line = UpdateLine {
        elapsed: &update.elapsed_text,
        time_min: update.latest.time_min,
        temp_c: update.latest.temp_c,
        mean_c: update.mean_c,
        watermark: update.watermark,
        watermark_changed: update.watermark_changed,
    };
    match serde_json::to_string(&line) {
        Ok(s) => println!("{}", s),
        Err(e) => tracing::warn!("could not encode update: {e}"),
    }
}

fn render_status_line(update: &RenderUpdate) {
    print!(
        "\r{}  T={:>6.1} °C  {}  axis=0-{:.0} min  samples={}",
        update.elapsed_text,
        update.latest.temp_c,
        update.mean_text,
        update.watermark,
        update.samples.len()
    );
    let _ = io::stdout().flush();
}

fn clear_status_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}

fn print_summary(summary: &SessionSummary) {
    println!("✓ Session ended: {:?}", summary.stop_reason);
    println!("  Ticks:     {}", summary.ticks);
    println!("  Accepted:  {}", summary.accepted);
    if summary.malformed > 0 {
        println!("  Malformed: {}", summary.malformed);
    }
    if summary.idle_ticks > 0 {
        println!("  No data:   {}", summary.idle_ticks);
    }
    if summary.transport_errors > 0 {
        println!("  Transport errors: {}", summary.transport_errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn notices_visible_without_rust_log() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn rust_log_directives_win() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn run_flags_map_to_overrides() {
        let cli = Cli::parse_from([
            "rl-cli", "run", "-p", "kr", "--port", "/dev/ttyACM0", "--offset", "-1.5", "--demo",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run subcommand");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.profile.as_deref(), Some("kr"));
        assert_eq!(overrides.port.as_deref(), Some("/dev/ttyACM0"));
        assert_eq!(overrides.calibration_offset_c, Some(-1.5));
        assert!(overrides.force_demo);
        assert_eq!(overrides.baud, None);
    }
}
