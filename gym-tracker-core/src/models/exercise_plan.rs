use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::set_entry::SetEntry;

/// An exercise template inside a workout, together with its history of
/// logged sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExercisePlan {
    pub id: Uuid,
    pub title: String,
    pub target_sets: u32,
    pub target_reps: u32,
    /// Suggested starting weight, not a constraint on logged sets.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub starting_weight: Decimal,
    pub log: Vec<SetEntry>,
}

impl ExercisePlan {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_targets(mut self, sets: u32, reps: u32) -> Self {
        self.target_sets = sets;
        self.target_reps = reps;
        self
    }

    pub fn with_starting_weight(mut self, weight: Decimal) -> Self {
        self.starting_weight = weight;
        self
    }

    pub fn log_set(&mut self, set: SetEntry) {
        self.log.push(set);
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Heaviest weight among the logged working (non warm-up) sets.
    pub fn best_working_weight(&self) -> Option<Decimal> {
        self.log
            .iter()
            .filter(|s| !s.is_warmup)
            .map(|s| s.weight)
            .max()
    }

    /// True if `weight` would beat every working set logged so far.
    pub fn is_new_record(&self, weight: Decimal) -> bool {
        match self.best_working_weight() {
            Some(best) => weight > best,
            None => weight > Decimal::ZERO,
        }
    }
}

impl Default for ExercisePlan {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            target_sets: 3,
            target_reps: 8,
            starting_weight: Decimal::ZERO,
            log: Vec::new(),
        }
    }
}

impl fmt::Display for ExercisePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{}, start {})",
            self.title, self.target_sets, self.target_reps, self.starting_weight
        )
    }
}
