use clap::{Args, Subcommand};
use gym_tracker_core::{AppState, Storage, WarmupPreset};
use rust_decimal::Decimal;

use crate::config::Config;

#[derive(Args)]
pub struct PresetCommand {
    #[command(subcommand)]
    pub command: PresetSubcommand,
}

#[derive(Subcommand)]
pub enum PresetSubcommand {
    /// List warm-up presets
    List {
        /// Working weight to compute suggested warm-up weights for
        #[arg(long)]
        weight: Option<Decimal>,
    },

    /// Add a warm-up preset
    Add {
        /// Label, e.g. "60% × 4"
        label: String,

        /// Fraction of the working weight, e.g. 0.6
        percent: Decimal,

        /// Reps
        reps: u32,
    },

    /// Remove a warm-up preset by its list index
    Remove {
        /// Index as shown by `preset list`
        index: usize,
    },
}

impl PresetCommand {
    pub fn run<S: Storage>(
        &self,
        state: &mut AppState<S>,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PresetSubcommand::List { weight } => {
                let presets = state.warmup_presets();
                if presets.is_empty() {
                    println!("No warm-up presets.");
                    return Ok(());
                }
                for (index, preset) in presets.iter().enumerate() {
                    match weight {
                        Some(w) => println!(
                            "{:>2}  {:<12} {} x {} {}",
                            index,
                            preset.label,
                            preset.reps,
                            preset.suggested_weight(*w),
                            config.weight_unit.value
                        ),
                        None => println!("{:>2}  {}", index, preset),
                    }
                }
                Ok(())
            }

            PresetSubcommand::Add {
                label,
                percent,
                reps,
            } => {
                state.add_warmup_preset(WarmupPreset::new(label.as_str(), *percent, *reps))?;
                println!("Added warm-up preset '{}'", label);
                Ok(())
            }

            PresetSubcommand::Remove { index } => {
                let label = state.warmup_presets().get(*index).map(|p| p.label.clone());
                state.remove_warmup_preset(*index)?;
                match label {
                    Some(label) => println!("Removed warm-up preset '{}'", label),
                    None => println!("No warm-up preset at index {}", index),
                }
                Ok(())
            }
        }
    }
}
