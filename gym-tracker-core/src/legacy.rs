//! The older date-keyed workout log stored under [`LEGACY_KEY`].
//!
//! Its document shape is incompatible with the state store's and the two
//! are kept apart: this log holds a flat list of exercise names and one
//! workout per name and day, with sets recorded in `Workout::sets`.

use chrono::{Local, NaiveDate};

use crate::document::LegacyDocument;
use crate::error::StoreError;
use crate::models::Workout;
use crate::storage::{read_json, write_json, Storage};

pub const LEGACY_KEY: &str = "gymtracker.v1";

const DEFAULT_EXERCISES: [&str; 4] = ["KH-Bankdrücken", "Latziehen", "Seitheben", "Beinpresse"];

pub struct LegacyWorkoutLog<S: Storage> {
    storage: S,
    exercises: Vec<String>,
    workouts: Vec<Workout>,
}

impl<S: Storage> LegacyWorkoutLog<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            exercises: DEFAULT_EXERCISES.iter().map(|s| s.to_string()).collect(),
            workouts: Vec::new(),
        }
    }

    pub fn exercises(&self) -> &[String] {
        &self.exercises
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Replaces the in-memory lists with the stored document, or with empty
    /// lists if there is none.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let doc: LegacyDocument = read_json(&self.storage, LEGACY_KEY)?.unwrap_or_default();
        self.exercises = doc.exercises;
        self.workouts = doc.workouts;
        Ok(())
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let doc = LegacyDocument {
            exercises: self.exercises.clone(),
            workouts: self.workouts.clone(),
        };
        write_json(&self.storage, LEGACY_KEY, &doc)
    }

    /// Today's workout called `name`, created if missing. Not persisted.
    pub fn ensure_today(&mut self, name: &str) -> &mut Workout {
        self.ensure_on(Local::now().date_naive(), name)
    }

    fn ensure_on(&mut self, date: NaiveDate, name: &str) -> &mut Workout {
        let index = match self
            .workouts
            .iter()
            .position(|w| w.date == date && w.name == name)
        {
            Some(index) => index,
            None => {
                self.workouts.push(Workout::new(name).with_date(date));
                self.workouts.len() - 1
            }
        };
        &mut self.workouts[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SetEntry;
    use crate::storage::MemoryStorage;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_has_default_exercises() {
        let log = LegacyWorkoutLog::new(MemoryStorage::new());
        assert_eq!(
            log.exercises(),
            &["KH-Bankdrücken", "Latziehen", "Seitheben", "Beinpresse"]
        );
        assert!(log.workouts().is_empty());
    }

    #[test]
    fn test_load_missing_document_is_empty() {
        let mut log = LegacyWorkoutLog::new(MemoryStorage::new());
        log.load().unwrap();
        assert!(log.exercises().is_empty());
        assert!(log.workouts().is_empty());
    }

    #[test]
    fn test_ensure_today_is_idempotent() {
        let mut log = LegacyWorkoutLog::new(MemoryStorage::new());
        let first = log.ensure_today("Push").id;
        let second = log.ensure_today("Push").id;
        log.ensure_today("Pull");

        assert_eq!(first, second);
        assert_eq!(log.workouts().len(), 2);
        assert_eq!(log.workouts()[0].date, Local::now().date_naive());
    }

    #[test]
    fn test_ensure_on_other_day_creates_new() {
        let mut log = LegacyWorkoutLog::new(MemoryStorage::new());
        let yesterday = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let old = log.ensure_on(yesterday, "Push").id;
        let today = log.ensure_today("Push").id;

        assert_ne!(old, today);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut log = LegacyWorkoutLog::new(MemoryStorage::new());
        log.ensure_today("Push")
            .sets
            .push(SetEntry::new(8, dec!(20)));
        log.save().unwrap();

        let json = log.storage.get_item(LEGACY_KEY).unwrap().unwrap();
        assert!(json.contains("\"Exercises\""));

        let mut reloaded = LegacyWorkoutLog::new(log.storage);
        reloaded.load().unwrap();
        assert_eq!(reloaded.exercises().len(), 4);
        assert_eq!(reloaded.workouts()[0].sets.len(), 1);
        assert_eq!(reloaded.workouts()[0].sets[0].weight, dec!(20));
    }

    #[test]
    fn test_does_not_touch_state_key() {
        let mut log = LegacyWorkoutLog::new(MemoryStorage::new());
        log.save().unwrap();
        assert!(log
            .storage
            .get_item(crate::state::STATE_KEY)
            .unwrap()
            .is_none());
    }
}
