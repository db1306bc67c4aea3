//! CSV export and JSON backup encoding.
//!
//! CSV output is semicolon separated with `\n` between records and no
//! trailing newline. Text fields are always quoted with embedded quotes
//! doubled; numbers, flags, identities and timestamps are written bare.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::document::{DocumentRef, StoredDocument};
use crate::models::{CompletedSession, SetEntry, Workout};

pub const SESSIONS_HEADER: &str =
    "SessionId;WorkoutName;CompletedAt;Exercise;Reps;Weight;RPE;IsWarmup;Note;IsPR";
pub const ALL_HEADER: &str = "WorkoutName;Exercise;Ts;Reps;Weight;RPE;IsWarmup;Note;IsPR";

/// Quote a text field, doubling embedded quotes.
pub fn escape(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// RFC 3339 with an explicit offset; fractional seconds only when present.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Reps;Weight;RPE;IsWarmup;Note;IsPR
fn set_columns(set: &SetEntry) -> [String; 6] {
    [
        set.reps.to_string(),
        set.weight.to_string(),
        set.rpe.to_string(),
        flag(set.is_warmup).to_string(),
        escape(set.note.as_deref().unwrap_or("")),
        flag(set.is_pr).to_string(),
    ]
}

/// One row per set in every completed session.
pub fn sessions_csv(sessions: &[CompletedSession]) -> String {
    let mut rows = vec![SESSIONS_HEADER.to_string()];

    for session in sessions {
        for exercise in &session.exercises {
            for set in &exercise.sets {
                let mut fields = vec![
                    session.id.to_string(),
                    escape(&session.workout_name),
                    format_timestamp(&session.completed_at),
                    escape(&exercise.title),
                ];
                fields.extend(set_columns(set));
                rows.push(fields.join(";"));
            }
        }
    }

    rows.join("\n")
}

/// One row per set in every workout's exercise logs.
pub fn all_csv(workouts: &[Workout]) -> String {
    let mut rows = vec![ALL_HEADER.to_string()];

    for workout in workouts {
        for exercise in &workout.exercises {
            for set in &exercise.log {
                let mut fields = vec![
                    escape(&workout.name),
                    escape(&exercise.title),
                    format_timestamp(&set.ts),
                ];
                fields.extend(set_columns(set));
                rows.push(fields.join(";"));
            }
        }
    }

    rows.join("\n")
}

/// Pretty-printed backup in the persisted document shape.
pub fn backup_json(doc: &DocumentRef<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}

/// Parse a backup. Anything that is not a document object yields `None`.
pub fn parse_backup(text: &str) -> Option<StoredDocument> {
    match serde_json::from_str::<Option<StoredDocument>>(text) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("Ignoring backup that failed to parse: {}", e);
            None
        }
    }
}
