use clap::{Args, ValueEnum};
use gym_tracker_core::{AppState, Storage};
use std::fs;
use std::path::PathBuf;

#[derive(Clone, ValueEnum)]
pub enum ExportKind {
    /// One CSV row per set of every completed session
    Sessions,
    /// One CSV row per set in every workout's exercise logs
    All,
    /// Full JSON backup
    Backup,
}

#[derive(Args)]
pub struct ExportCommand {
    /// What to export
    #[arg(value_enum)]
    pub kind: ExportKind,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    pub fn run<S: Storage>(&self, state: &AppState<S>) -> Result<(), Box<dyn std::error::Error>> {
        let text = match self.kind {
            ExportKind::Sessions => state.export_sessions_csv(),
            ExportKind::All => state.export_all_csv(),
            ExportKind::Backup => state.export_backup_json()?,
        };

        match &self.output {
            Some(path) => {
                fs::write(path, &text)?;
                eprintln!("Exported to {}", path.display());
            }
            None => println!("{}", text),
        }
        Ok(())
    }
}

#[derive(Args)]
pub struct ImportCommand {
    /// Backup JSON file to restore (replaces all current data)
    pub file: PathBuf,
}

impl ImportCommand {
    pub fn run<S: Storage>(
        &self,
        state: &mut AppState<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let text = fs::read_to_string(&self.file)?;

        if state.import_backup_json(&text)? {
            println!(
                "Imported {} workout(s), {} session(s), {} warm-up preset(s)",
                state.workouts().len(),
                state.sessions().len(),
                state.warmup_presets().len()
            );
        } else {
            println!(
                "{} is not a valid backup; nothing was changed.",
                self.file.display()
            );
        }
        Ok(())
    }
}
