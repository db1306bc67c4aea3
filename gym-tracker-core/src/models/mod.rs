mod completed_session;
mod exercise_plan;
mod set_entry;
mod warmup_preset;
mod workout;

pub use completed_session::{CompletedExercise, CompletedSession};
pub use exercise_plan::ExercisePlan;
pub use set_entry::{SetEntry, DEFAULT_RPE};
pub use warmup_preset::WarmupPreset;
pub use workout::Workout;
