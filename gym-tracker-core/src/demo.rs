//! Built-in data used on first run.

use rust_decimal_macros::dec;

use crate::models::{ExercisePlan, WarmupPreset, Workout};

/// Warm-up presets used when none are stored.
pub fn default_presets() -> Vec<WarmupPreset> {
    vec![
        WarmupPreset::new("50% × 5", dec!(0.50), 5),
        WarmupPreset::new("70% × 3", dec!(0.70), 3),
        WarmupPreset::new("85% × 1–2", dec!(0.85), 1),
    ]
}

/// The starter workouts: Push, Pull and Beine.
pub fn demo_workouts() -> Vec<Workout> {
    vec![
        Workout::new("Push").with_exercises(vec![
            ExercisePlan::new("KH-Bankdrücken")
                .with_targets(3, 8)
                .with_starting_weight(dec!(20)),
            ExercisePlan::new("Schrägbank Kurzhantel")
                .with_targets(3, 10)
                .with_starting_weight(dec!(16)),
            ExercisePlan::new("Seitheben")
                .with_targets(3, 15)
                .with_starting_weight(dec!(8)),
        ]),
        Workout::new("Pull").with_exercises(vec![
            ExercisePlan::new("Latziehen")
                .with_targets(4, 10)
                .with_starting_weight(dec!(60)),
            ExercisePlan::new("Rudern Kabel")
                .with_targets(3, 12)
                .with_starting_weight(dec!(50)),
        ]),
        Workout::new("Beine").with_exercises(vec![
            ExercisePlan::new("Beinpresse")
                .with_targets(4, 10)
                .with_starting_weight(dec!(120)),
            ExercisePlan::new("Beinstrecker")
                .with_targets(3, 12)
                .with_starting_weight(dec!(40)),
            ExercisePlan::new("Beincurls")
                .with_targets(3, 12)
                .with_starting_weight(dec!(35)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_presets() {
        let presets = default_presets();
        let labels: Vec<&str> = presets.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["50% × 5", "70% × 3", "85% × 1–2"]);
        assert_eq!(presets[1].percent, dec!(0.70));
        assert_eq!(presets[2].reps, 1);
    }

    #[test]
    fn test_demo_workouts() {
        let workouts = demo_workouts();
        let names: Vec<&str> = workouts.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Push", "Pull", "Beine"]);

        let pull = &workouts[1];
        assert_eq!(pull.exercises.len(), 2);
        assert_eq!(pull.exercises[0].title, "Latziehen");
        assert_eq!(pull.exercises[0].target_sets, 4);
        assert_eq!(pull.exercises[0].starting_weight, dec!(60));

        assert!(workouts
            .iter()
            .flat_map(|w| &w.exercises)
            .all(|e| e.log.is_empty()));
    }
}
