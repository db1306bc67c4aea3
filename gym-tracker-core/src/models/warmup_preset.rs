use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named warm-up scheme such as "70% × 3".
///
/// Presets are global suggestions and are not attached to any workout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WarmupPreset {
    pub label: String,
    /// Fraction of the working weight, e.g. 0.70.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub percent: Decimal,
    pub reps: u32,
}

impl WarmupPreset {
    pub fn new(label: impl Into<String>, percent: Decimal, reps: u32) -> Self {
        Self {
            label: label.into(),
            percent,
            reps,
        }
    }

    /// Warm-up weight for a given working weight, to one decimal place.
    pub fn suggested_weight(&self, working_weight: Decimal) -> Decimal {
        working_weight
            .saturating_mul(self.percent)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }
}

impl fmt::Display for WarmupPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} reps at {})", self.label, self.reps, self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_suggested_weight() {
        let preset = WarmupPreset::new("70% × 3", dec!(0.70), 3);
        assert_eq!(preset.suggested_weight(dec!(100)), dec!(70));
        assert_eq!(preset.suggested_weight(dec!(22.5)), dec!(15.8));
    }

    #[test]
    fn test_display() {
        let preset = WarmupPreset::new("50% × 5", dec!(0.50), 5);
        assert_eq!(format!("{}", preset), "50% × 5 (5 reps at 0.50)");
    }

    #[test]
    fn test_json_field_names() {
        let preset = WarmupPreset::new("85% × 1–2", dec!(0.85), 1);
        let json = serde_json::to_value(&preset).unwrap();
        assert_eq!(json["Label"], "85% × 1–2");
        assert_eq!(json["Reps"], 1);
        assert!(json["Percent"].is_number());
        assert_eq!(json["Percent"].to_string(), "0.85");
    }

    #[test]
    fn test_suggested_weight_saturates() {
        let preset = WarmupPreset::new("200%", dec!(2), 1);
        assert_eq!(preset.suggested_weight(Decimal::MAX), Decimal::MAX);
    }
}
