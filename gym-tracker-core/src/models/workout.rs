use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::exercise_plan::ExercisePlan;
use super::set_entry::SetEntry;

/// A user-defined workout.
///
/// `exercises[].log` and `sets` are separate containers. The flat `sets`
/// list is what the legacy date-keyed log writes to; nothing else reads it,
/// but it is carried through persistence untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub created: NaiveDate,
    pub exercises: Vec<ExercisePlan>,
    pub date: NaiveDate,
    pub sets: Vec<SetEntry>,
}

impl Workout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_exercises(mut self, exercises: Vec<ExercisePlan>) -> Self {
        self.exercises = exercises;
        self
    }

    pub fn add_exercise(&mut self, plan: ExercisePlan) -> &mut ExercisePlan {
        self.exercises.push(plan);
        let last = self.exercises.len() - 1;
        &mut self.exercises[last]
    }

    pub fn exercise_mut(&mut self, id: Uuid) -> Option<&mut ExercisePlan> {
        self.exercises.iter_mut().find(|e| e.id == id)
    }

    /// Resolve an exercise by UUID or by case-insensitive title.
    pub fn find_exercise(&self, reference: &str) -> Option<&ExercisePlan> {
        if let Ok(id) = Uuid::parse_str(reference) {
            return self.exercises.iter().find(|e| e.id == id);
        }
        self.exercises
            .iter()
            .find(|e| e.title.eq_ignore_ascii_case(reference))
    }

    /// Number of sets across every exercise log.
    pub fn logged_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.log.len()).sum()
    }
}

impl Default for Workout {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            id: Uuid::new_v4(),
            name: "Workout".to_string(),
            created: today,
            exercises: Vec::new(),
            date: today,
            sets: Vec::new(),
        }
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.chars().count().max(3)))?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Created: {}", self.created)?;

        if self.exercises.is_empty() {
            writeln!(f, "\nNo exercises")?;
        } else {
            writeln!(f, "\nExercises:")?;
            for exercise in &self.exercises {
                writeln!(f, "  - {}", exercise)?;
                for set in &exercise.log {
                    writeln!(f, "      {}  {}", set.ts.format("%Y-%m-%d %H:%M"), set)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_workout_new() {
        let workout = Workout::new("Push");
        assert_eq!(workout.name, "Push");
        assert!(workout.exercises.is_empty());
        assert!(workout.sets.is_empty());
        assert_eq!(workout.created, Local::now().date_naive());
    }

    #[test]
    fn test_workout_default_name() {
        let workout: Workout = serde_json::from_str("{}").unwrap();
        assert_eq!(workout.name, "Workout");
    }

    #[test]
    fn test_add_and_find_exercise() {
        let mut workout = Workout::new("Pull");
        let id = workout.add_exercise(ExercisePlan::new("Latziehen")).id;
        workout.add_exercise(ExercisePlan::new("Rudern Kabel"));

        assert_eq!(workout.find_exercise("latziehen").unwrap().id, id);
        assert_eq!(
            workout.find_exercise(&id.to_string()).unwrap().title,
            "Latziehen"
        );
        assert!(workout.find_exercise("Kniebeuge").is_none());
    }

    #[test]
    fn test_logged_sets_counts_exercise_logs_only() {
        let mut workout = Workout::new("Beine");
        let id = workout.add_exercise(ExercisePlan::new("Beinpresse")).id;
        workout
            .exercise_mut(id)
            .unwrap()
            .log_set(SetEntry::new(10, dec!(120)));
        workout.sets.push(SetEntry::new(10, dec!(40)));

        assert_eq!(workout.logged_sets(), 1);
    }

    #[test]
    fn test_workout_json_roundtrip() {
        let mut workout = Workout::new("Push");
        workout
            .add_exercise(ExercisePlan::new("Seitheben"))
            .log_set(SetEntry::new(15, dec!(8)).with_note("slow"));

        let json = serde_json::to_string(&workout).unwrap();
        assert!(json.contains("\"Exercises\""));
        assert!(json.contains("\"Log\""));

        let parsed: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, workout);
    }
}
