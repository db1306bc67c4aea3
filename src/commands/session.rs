use chrono::{DateTime, Local, Utc};
use clap::{Args, Subcommand};
use gym_tracker_core::{AppState, CompletedSession, Storage};
use uuid::Uuid;

use super::OutputFormat;

#[derive(Args)]
pub struct SessionCommand {
    #[command(subcommand)]
    pub command: SessionSubcommand,
}

#[derive(Subcommand)]
pub enum SessionSubcommand {
    /// Record a completed session from the sets logged on a workout
    Finish {
        /// Workout ID (UUID) or name
        workout: String,

        /// Only include sets logged at or after this time (RFC 3339),
        /// defaults to the start of today
        #[arg(long)]
        since: Option<String>,
    },

    /// List completed sessions
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete a completed session
    Delete {
        /// Session ID (UUID)
        id: String,
    },
}

impl SessionCommand {
    pub fn run<S: Storage>(
        &self,
        state: &mut AppState<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            SessionSubcommand::Finish { workout, since } => {
                let since = match since {
                    Some(s) => DateTime::parse_from_rfc3339(s)
                        .map_err(|_| format!("Invalid timestamp '{}'. Use RFC 3339.", s))?
                        .with_timezone(&Utc),
                    None => start_of_today(),
                };

                let w = state
                    .find_workout(workout)
                    .ok_or_else(|| format!("Workout not found: {}", workout))?;
                let session = CompletedSession::from_workout(w, since);

                if session.exercises.is_empty() {
                    return Err(format!("No sets logged for '{}' since {}", w.name, since).into());
                }

                println!("Completed session for '{}':", session.workout_name);
                println!();
                println!("{}", session);
                state.add_completed_session(session)?;
                Ok(())
            }

            SessionSubcommand::List { format } => {
                let sessions = state.sessions();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(sessions)?);
                    }
                    OutputFormat::Text => {
                        if sessions.is_empty() {
                            println!("No completed sessions.");
                            return Ok(());
                        }
                        println!(
                            "{:<36}  {:<16}  {:<20}  {:>4}  {:>10}",
                            "ID", "COMPLETED", "WORKOUT", "SETS", "VOLUME"
                        );
                        println!("{}", "-".repeat(94));
                        for s in sessions {
                            println!(
                                "{:<36}  {:<16}  {:<20}  {:>4}  {:>10}",
                                s.id,
                                s.completed_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                                s.workout_name,
                                s.total_sets(),
                                s.total_volume()
                            );
                        }
                    }
                }
                Ok(())
            }

            SessionSubcommand::Delete { id } => {
                let uuid =
                    Uuid::parse_str(id).map_err(|_| format!("Invalid session UUID: {}", id))?;
                if !state.sessions().iter().any(|s| s.id == uuid) {
                    return Err(format!("Session not found: {}", id).into());
                }
                state.remove_session(uuid)?;
                println!("Deleted session {}", uuid);
                Ok(())
            }
        }
    }
}

fn start_of_today() -> DateTime<Utc> {
    let midnight = Local::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default();
    midnight
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_today_is_not_in_future() {
        let start = start_of_today();
        assert!(start <= Utc::now());
        assert!(Utc::now() - start < chrono::Duration::hours(25));
    }
}
