use clap::Args;
use gym_tracker_core::{AppState, Storage};

use super::OutputFormat;
use crate::config::Config;

#[derive(Args)]
pub struct StatsCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl StatsCommand {
    pub fn run<S: Storage>(
        &self,
        state: &AppState<S>,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let stats = state.compute_stats();

        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "total_sets": stats.total_sets,
                    "total_volume": stats.total_volume.to_string(),
                    "sessions": state.sessions().len(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Text => {
                println!("Working sets:  {}", stats.total_sets);
                println!(
                    "Total volume:  {} {}",
                    stats.total_volume, config.weight_unit.value
                );
                println!("Sessions:      {}", state.sessions().len());
            }
        }
        Ok(())
    }
}
