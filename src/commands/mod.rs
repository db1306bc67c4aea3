mod config_cmd;
mod export;
mod legacy;
mod preset;
mod session;
mod stats;
mod workout;

pub use config_cmd::ConfigCommand;
pub use export::{ExportCommand, ImportCommand};
pub use legacy::LegacyCommand;
pub use preset::PresetCommand;
pub use session::SessionCommand;
pub use stats::StatsCommand;
pub use workout::WorkoutCommand;

use clap::ValueEnum;
use gym_tracker_core::{AppState, FileStorage, StoreError};

use crate::config::Config;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Opens and loads the state store from the configured data directory.
pub fn open_state(config: &Config) -> Result<AppState<FileStorage>, StoreError> {
    let mut state = AppState::new(FileStorage::new(config.data_dir.value.clone()));
    state.initialize()?;
    Ok(state)
}
