use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    open_state, ConfigCommand, ExportCommand, ImportCommand, LegacyCommand, PresetCommand,
    SessionCommand, StatsCommand, WorkoutCommand,
};
use config::Config;
use gym_tracker_core::{FileStorage, LegacyWorkoutLog};

#[derive(Parser)]
#[command(name = "gymtracker")]
#[command(version)]
#[command(about = "A personal workout tracking CLI", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage workouts, exercises and logged sets
    Workout(WorkoutCommand),

    /// Record and review completed sessions
    Session(SessionCommand),

    /// Manage warm-up presets
    Preset(PresetCommand),

    /// Show working set totals
    Stats(StatsCommand),

    /// Export sessions or logs as CSV, or everything as a JSON backup
    Export(ExportCommand),

    /// Restore a JSON backup
    Import(ImportCommand),

    /// Work with the older date-keyed log
    Legacy(LegacyCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymtracker=warn,gym_tracker_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Workout(cmd)) => {
            let mut state = open_state(&config)?;
            cmd.run(&mut state, &config)?;
        }
        Some(Commands::Session(cmd)) => {
            let mut state = open_state(&config)?;
            cmd.run(&mut state)?;
        }
        Some(Commands::Preset(cmd)) => {
            let mut state = open_state(&config)?;
            cmd.run(&mut state, &config)?;
        }
        Some(Commands::Stats(cmd)) => {
            let state = open_state(&config)?;
            cmd.run(&state, &config)?;
        }
        Some(Commands::Export(cmd)) => {
            let state = open_state(&config)?;
            cmd.run(&state)?;
        }
        Some(Commands::Import(cmd)) => {
            let mut state = open_state(&config)?;
            cmd.run(&mut state)?;
        }
        Some(Commands::Legacy(cmd)) => {
            let mut log = LegacyWorkoutLog::new(FileStorage::new(config.data_dir.value.clone()));
            cmd.run(&mut log)?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
