//! Gym Tracker Core Library
//!
//! Models, persistence and the state store behind the Gym Tracker CLI.

pub mod demo;
pub mod document;
pub mod error;
pub mod export;
pub mod legacy;
pub mod models;
pub mod state;
pub mod storage;

pub use error::StoreError;
pub use legacy::{LegacyWorkoutLog, LEGACY_KEY};
pub use models::{
    CompletedExercise, CompletedSession, ExercisePlan, SetEntry, WarmupPreset, Workout,
};
pub use state::{AppState, Stats, SubscriptionId, MIGRATION_KEY, STATE_KEY};
pub use storage::{FileStorage, MemoryStorage, Storage};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
