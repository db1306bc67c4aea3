use clap::{Args, Subcommand};
use gym_tracker_core::{LegacyWorkoutLog, SetEntry, Storage};
use rust_decimal::Decimal;

#[derive(Args)]
pub struct LegacyCommand {
    #[command(subcommand)]
    pub command: LegacySubcommand,
}

#[derive(Subcommand)]
pub enum LegacySubcommand {
    /// Show the date-keyed log
    Show,

    /// Record a set on today's workout in the date-keyed log
    Log {
        /// Workout name
        name: String,

        /// Reps performed
        #[arg(long)]
        reps: u32,

        /// Weight used
        #[arg(long)]
        weight: Decimal,
    },
}

impl LegacyCommand {
    pub fn run<S: Storage>(
        &self,
        log: &mut LegacyWorkoutLog<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        log.load()?;

        match &self.command {
            LegacySubcommand::Show => {
                if !log.exercises().is_empty() {
                    println!("Exercises: {}", log.exercises().join(", "));
                }
                if log.workouts().is_empty() {
                    println!("No entries in the date-keyed log.");
                    return Ok(());
                }
                for w in log.workouts() {
                    println!("{}  {} ({} sets)", w.date, w.name, w.sets.len());
                    for set in &w.sets {
                        println!("    {}", set);
                    }
                }
                Ok(())
            }

            LegacySubcommand::Log { name, reps, weight } => {
                let workout = log.ensure_today(name);
                workout.sets.push(SetEntry::new(*reps, *weight));
                let (date, count) = (workout.date, workout.sets.len());
                log.save()?;
                println!("Logged set {} for '{}' on {}", count, name, date);
                Ok(())
            }
        }
    }
}
