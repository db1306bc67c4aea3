use clap::{Args, Subcommand};
use gym_tracker_core::{AppState, ExercisePlan, SetEntry, Storage, Workout};
use rust_decimal::Decimal;

use super::OutputFormat;
use crate::config::Config;

#[derive(Args)]
pub struct WorkoutCommand {
    #[command(subcommand)]
    pub command: WorkoutSubcommand,
}

#[derive(Subcommand)]
pub enum WorkoutSubcommand {
    /// List all workouts
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a workout with its exercise logs
    Show {
        /// Workout ID (UUID) or name
        workout: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a new workout
    Create {
        /// Workout name
        name: String,
    },

    /// Delete a workout (completed sessions are kept)
    Delete {
        /// Workout ID (UUID) or name
        workout: String,
    },

    /// Add an exercise to a workout
    AddExercise {
        /// Workout ID (UUID) or name
        workout: String,

        /// Exercise title
        title: String,

        /// Target number of sets
        #[arg(long, default_value_t = 3)]
        sets: u32,

        /// Target reps per set
        #[arg(long, default_value_t = 8)]
        reps: u32,

        /// Suggested starting weight
        #[arg(long, default_value = "0")]
        weight: Decimal,
    },

    /// Log a set for an exercise
    Log {
        /// Workout ID (UUID) or name
        workout: String,

        /// Exercise ID (UUID) or title
        exercise: String,

        /// Reps performed
        #[arg(long)]
        reps: u32,

        /// Weight used
        #[arg(long)]
        weight: Decimal,

        /// Rate of perceived exertion
        #[arg(long, default_value_t = gym_tracker_core::models::DEFAULT_RPE)]
        rpe: u32,

        /// Mark as a warm-up set
        #[arg(long)]
        warmup: bool,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,

        /// Force the personal-record flag
        #[arg(long)]
        pr: bool,
    },
}

impl WorkoutCommand {
    pub fn run<S: Storage>(
        &self,
        state: &mut AppState<S>,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let unit = &config.weight_unit.value;

        match &self.command {
            WorkoutSubcommand::List { format } => {
                let workouts = state.workouts();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(workouts)?);
                    }
                    OutputFormat::Text => {
                        if workouts.is_empty() {
                            println!("No workouts found.");
                            return Ok(());
                        }
                        println!("{:<36}  {:<20}  {:>9}  {:>4}", "ID", "NAME", "EXERCISES", "SETS");
                        println!("{}", "-".repeat(75));
                        for w in workouts {
                            println!(
                                "{:<36}  {:<20}  {:>9}  {:>4}",
                                w.id,
                                truncate(&w.name, 20),
                                w.exercises.len(),
                                w.logged_sets()
                            );
                        }
                    }
                }
                Ok(())
            }

            WorkoutSubcommand::Show { workout, format } => {
                let w = resolve(state, workout)?;
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(w)?),
                    OutputFormat::Text => print!("{}", w),
                }
                Ok(())
            }

            WorkoutSubcommand::Create { name } => {
                let id = state.create_workout(name.as_str()).id;
                state.save()?;
                println!("Created workout '{}' ({})", name, id);
                Ok(())
            }

            WorkoutSubcommand::Delete { workout } => {
                let w = resolve(state, workout)?;
                let (id, name) = (w.id, w.name.clone());
                state.remove_workout(id);
                state.save()?;
                println!("Deleted workout '{}' ({})", name, id);
                Ok(())
            }

            WorkoutSubcommand::AddExercise {
                workout,
                title,
                sets,
                reps,
                weight,
            } => {
                let id = resolve(state, workout)?.id;
                let plan = ExercisePlan::new(title.as_str())
                    .with_targets(*sets, *reps)
                    .with_starting_weight(*weight);
                let line = format!("{}", plan);

                if let Some(w) = state.workout_mut(id) {
                    w.add_exercise(plan);
                }
                state.save()?;
                println!("Added exercise {} (weights in {})", line, unit);
                Ok(())
            }

            WorkoutSubcommand::Log {
                workout,
                exercise,
                reps,
                weight,
                rpe,
                warmup,
                note,
                pr,
            } => {
                let w = resolve(state, workout)?;
                let workout_id = w.id;
                let plan = w
                    .find_exercise(exercise)
                    .ok_or_else(|| format!("Exercise '{}' not found in '{}'", exercise, w.name))?;
                let exercise_id = plan.id;

                let mut set = SetEntry::new(*reps, *weight).with_rpe(*rpe);
                if *warmup {
                    set = set.warmup();
                }
                if let Some(n) = note {
                    set = set.with_note(n.as_str());
                }
                if *pr || (!*warmup && plan.is_new_record(*weight)) {
                    set = set.personal_record();
                }
                let summary = format!("{}", set);

                if let Some(plan) = state
                    .workout_mut(workout_id)
                    .and_then(|w| w.exercise_mut(exercise_id))
                {
                    plan.log_set(set);
                }
                state.save()?;
                println!("Logged {} {}", summary, unit);
                Ok(())
            }
        }
    }
}

fn resolve<'a, S: Storage>(
    state: &'a AppState<S>,
    reference: &str,
) -> Result<&'a Workout, String> {
    state
        .find_workout(reference)
        .ok_or_else(|| format!("Workout not found: {}", reference))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Push", 20), "Push");
        assert_eq!(truncate("Schrägbank Kurzhantel", 10), "Schrägb...");
    }
}
