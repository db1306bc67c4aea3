use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::set_entry::SetEntry;
use super::workout::Workout;

/// A snapshot of one finished workout.
///
/// Names, titles and sets are copied out of the workout when the session is
/// built, so later edits to (or deletion of) the workout leave the session
/// as it was. `workout_id` may dangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CompletedSession {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub workout_name: String,
    pub completed_at: DateTime<Utc>,
    pub exercises: Vec<CompletedExercise>,
}

/// The sets performed for one exercise in a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CompletedExercise {
    pub title: String,
    pub sets: Vec<SetEntry>,
}

impl CompletedExercise {
    pub fn new(title: impl Into<String>, sets: Vec<SetEntry>) -> Self {
        Self {
            title: title.into(),
            sets,
        }
    }
}

impl CompletedSession {
    pub fn new(workout_id: Uuid, workout_name: impl Into<String>) -> Self {
        Self {
            workout_id,
            workout_name: workout_name.into(),
            ..Self::default()
        }
    }

    /// Build a session from the sets each exercise logged at or after `since`.
    ///
    /// Exercises with nothing logged in that window are left out.
    pub fn from_workout(workout: &Workout, since: DateTime<Utc>) -> Self {
        let exercises = workout
            .exercises
            .iter()
            .filter_map(|plan| {
                let sets: Vec<SetEntry> = plan
                    .log
                    .iter()
                    .filter(|s| s.ts >= since)
                    .cloned()
                    .collect();
                (!sets.is_empty()).then(|| CompletedExercise::new(plan.title.clone(), sets))
            })
            .collect();

        Self::new(workout.id, workout.name.clone()).with_exercises(exercises)
    }

    pub fn with_exercises(mut self, exercises: Vec<CompletedExercise>) -> Self {
        self.exercises = exercises;
        self
    }

    pub fn completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = at;
        self
    }

    fn all_sets(&self) -> impl Iterator<Item = &SetEntry> {
        self.exercises.iter().flat_map(|e| e.sets.iter())
    }

    /// Number of sets, warm-ups included.
    pub fn total_sets(&self) -> usize {
        self.all_sets().count()
    }

    /// Sum of weight × reps, warm-ups included.
    pub fn total_volume(&self) -> Decimal {
        self.all_sets()
            .map(SetEntry::volume)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Sum of weight × reps over working sets only.
    pub fn working_volume(&self) -> Decimal {
        self.all_sets()
            .filter(|s| !s.is_warmup)
            .map(SetEntry::volume)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

impl Default for CompletedSession {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_id: Uuid::nil(),
            workout_name: "Workout".to_string(),
            completed_at: Utc::now(),
            exercises: Vec::new(),
        }
    }
}

impl fmt::Display for CompletedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} - {}",
            self.completed_at.format("%Y-%m-%d %H:%M"),
            self.workout_name
        )?;
        writeln!(f, "ID: {}", self.id)?;
        for exercise in &self.exercises {
            writeln!(f, "  {}", exercise.title)?;
            for set in &exercise.sets {
                writeln!(f, "    {}", set)?;
            }
        }
        write!(
            f,
            "Sets: {}, volume: {}",
            self.total_sets(),
            self.total_volume()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExercisePlan;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn sample_session() -> CompletedSession {
        CompletedSession::new(Uuid::new_v4(), "Push").with_exercises(vec![
            CompletedExercise::new(
                "KH-Bankdrücken",
                vec![
                    SetEntry::new(5, dec!(10)).warmup(),
                    SetEntry::new(8, dec!(20)),
                    SetEntry::new(8, dec!(22.5)),
                ],
            ),
            CompletedExercise::new("Seitheben", vec![SetEntry::new(15, dec!(8))]),
        ])
    }

    #[test]
    fn test_totals_include_warmups() {
        let session = sample_session();
        assert_eq!(session.total_sets(), 4);
        // 50 + 160 + 180 + 120
        assert_eq!(session.total_volume(), dec!(510));
        assert_eq!(session.working_volume(), dec!(460));
    }

    #[test]
    fn test_empty_session_totals() {
        let session = CompletedSession::default();
        assert_eq!(session.total_sets(), 0);
        assert_eq!(session.total_volume(), Decimal::ZERO);
        assert_eq!(session.workout_name, "Workout");
    }

    #[test]
    fn test_totals_saturate() {
        let session = CompletedSession::new(Uuid::new_v4(), "Beine").with_exercises(vec![
            CompletedExercise::new(
                "Beinpresse",
                vec![
                    SetEntry::new(1000, Decimal::MAX).warmup(),
                    SetEntry::new(1000, Decimal::MAX),
                    SetEntry::new(10, dec!(120)),
                ],
            ),
        ]);
        assert_eq!(session.total_volume(), Decimal::MAX);
        assert_eq!(session.working_volume(), Decimal::MAX);
    }

    #[test]
    fn test_from_workout_copies_recent_sets() {
        let now = Utc::now();
        let mut workout = Workout::new("Pull");
        let lat = workout.add_exercise(ExercisePlan::new("Latziehen"));
        lat.log_set(SetEntry::new(10, dec!(55)).at(now - Duration::days(3)));
        lat.log_set(SetEntry::new(10, dec!(60)).at(now));
        workout.add_exercise(ExercisePlan::new("Rudern Kabel"));

        let session = CompletedSession::from_workout(&workout, now - Duration::hours(1));

        assert_eq!(session.workout_id, workout.id);
        assert_eq!(session.workout_name, "Pull");
        assert_eq!(session.exercises.len(), 1);
        assert_eq!(session.exercises[0].title, "Latziehen");
        assert_eq!(session.exercises[0].sets.len(), 1);
        assert_eq!(session.exercises[0].sets[0].weight, dec!(60));
    }

    #[test]
    fn test_from_workout_is_a_copy() {
        let mut workout = Workout::new("Push");
        workout
            .add_exercise(ExercisePlan::new("Seitheben"))
            .log_set(SetEntry::new(15, dec!(8)));
        let session = CompletedSession::from_workout(&workout, Utc::now() - Duration::hours(1));

        workout.name = "Renamed".to_string();
        workout.exercises[0].title = "Changed".to_string();
        workout.exercises[0].clear_log();

        assert_eq!(session.workout_name, "Push");
        assert_eq!(session.exercises[0].title, "Seitheben");
        assert_eq!(session.total_sets(), 1);
    }

    #[test]
    fn test_json_roundtrip() {
        let session = sample_session();
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"WorkoutName\":\"Push\""));
        assert!(json.contains("\"CompletedAt\""));

        let parsed: CompletedSession = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }
}
