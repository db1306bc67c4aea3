use clap::{Args, Subcommand};
use gym_tracker_core::{FileStorage, LEGACY_KEY, MIGRATION_KEY, STATE_KEY};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::OutputFormat;
use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show settings and where the workout documents live
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a starter config file
    Init,
}

const DEFAULT_CONFIG: &str = r#"# gymtracker configuration

# Directory for stored data (default: platform data dir + /gymtracker)
# data_dir: ~/.local/share/gymtracker

# Unit label printed after weights
weight_unit: kg
"#;

/// One stored document under the data directory.
#[derive(Debug, Serialize)]
struct DocumentInfo {
    key: &'static str,
    role: &'static str,
    path: PathBuf,
    present: bool,
}

/// Current, pre-migration and legacy documents, in that order.
fn documents(config: &Config) -> Vec<DocumentInfo> {
    let storage = FileStorage::new(config.data_dir.value.clone());
    [
        (STATE_KEY, "current"),
        (MIGRATION_KEY, "migrated on first run"),
        (LEGACY_KEY, "legacy log"),
    ]
    .into_iter()
    .map(|(key, role)| DocumentInfo {
        key,
        role,
        path: storage.path(key),
        present: storage.exists(key),
    })
    .collect()
}

#[derive(Serialize)]
struct ShowReport<'a> {
    #[serde(flatten)]
    config: &'a Config,
    documents: Vec<DocumentInfo>,
}

/// Writes the starter config unless one is already there.
/// Returns false if the file existed.
fn write_default_config(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(DEFAULT_CONFIG.as_bytes())?;
    Ok(true)
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                let documents = documents(config);
                match format {
                    OutputFormat::Json => {
                        let report = ShowReport { config, documents };
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    }
                    OutputFormat::Text => {
                        match &config.config_file {
                            Some(path) => println!("Config file:  {}", path.display()),
                            None => println!(
                                "Config file:  {} (not found, using defaults)",
                                Config::default_config_path().display()
                            ),
                        }
                        println!(
                            "Data dir:     {} [{}]",
                            config.data_dir.value.display(),
                            config.data_dir.source
                        );
                        println!(
                            "Weight unit:  {} [{}]",
                            config.weight_unit.value, config.weight_unit.source
                        );

                        println!("\nDocuments:");
                        for doc in &documents {
                            println!(
                                "  {:<15} {:<8} {} ({})",
                                doc.key,
                                if doc.present { "present" } else { "missing" },
                                doc.path.display(),
                                doc.role
                            );
                        }
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let config_path = Config::default_config_path();
                if write_default_config(&config_path)? {
                    println!("Created config file: {}", config_path.display());
                    println!(
                        "Workouts will be stored in {}",
                        FileStorage::new(config.data_dir.value.clone())
                            .path(STATE_KEY)
                            .display()
                    );
                } else {
                    println!("Config file already exists: {}", config_path.display());
                    println!("Use 'gymtracker config show' to view current configuration.");
                }
                Ok(())
            }
        }
    }
}
