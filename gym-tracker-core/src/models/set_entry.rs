use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RPE recorded when the lifter doesn't give one.
pub const DEFAULT_RPE: u32 = 7;

/// One recorded set.
///
/// Sets are never edited after logging. They live in an owner's list
/// (`ExercisePlan::log`, `Workout::sets` or `CompletedExercise::sets`) and
/// go away only when that list is cleared or the owner is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SetEntry {
    pub reps: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub weight: Decimal,
    pub ts: DateTime<Utc>,
    pub rpe: u32,
    pub is_warmup: bool,
    pub note: Option<String>,
    #[serde(rename = "IsPR")]
    pub is_pr: bool,
}

impl SetEntry {
    pub fn new(reps: u32, weight: Decimal) -> Self {
        Self {
            reps,
            weight,
            ..Self::default()
        }
    }

    pub fn with_rpe(mut self, rpe: u32) -> Self {
        self.rpe = rpe;
        self
    }

    pub fn warmup(mut self) -> Self {
        self.is_warmup = true;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn personal_record(mut self) -> Self {
        self.is_pr = true;
        self
    }

    pub fn at(mut self, ts: DateTime<Utc>) -> Self {
        self.ts = ts;
        self
    }

    /// Weight × reps for this set, saturating at the `Decimal` bounds.
    pub fn volume(&self) -> Decimal {
        self.weight.saturating_mul(Decimal::from(self.reps))
    }
}

impl Default for SetEntry {
    fn default() -> Self {
        Self {
            reps: 0,
            weight: Decimal::ZERO,
            ts: Utc::now(),
            rpe: DEFAULT_RPE,
            is_warmup: false,
            note: None,
            is_pr: false,
        }
    }
}

impl fmt::Display for SetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} @ RPE {}", self.reps, self.weight, self.rpe)?;
        if self.is_warmup {
            write!(f, " (warm-up)")?;
        }
        if self.is_pr {
            write!(f, " [PR]")?;
        }
        if let Some(note) = &self.note {
            write!(f, " - {}", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_set_entry_new_defaults() {
        let set = SetEntry::new(8, dec!(60));
        assert_eq!(set.reps, 8);
        assert_eq!(set.weight, dec!(60));
        assert_eq!(set.rpe, DEFAULT_RPE);
        assert!(!set.is_warmup);
        assert!(!set.is_pr);
        assert!(set.note.is_none());
    }

    #[test]
    fn test_set_entry_volume() {
        let set = SetEntry::new(5, dec!(22.5));
        assert_eq!(set.volume(), dec!(112.5));
    }

    #[test]
    fn test_set_entry_volume_saturates() {
        let set = SetEntry::new(1000, Decimal::MAX);
        assert_eq!(set.volume(), Decimal::MAX);

        let set = SetEntry::new(2, Decimal::MIN);
        assert_eq!(set.volume(), Decimal::MIN);
    }

    #[test]
    fn test_set_entry_display() {
        let set = SetEntry::new(3, dec!(100))
            .with_rpe(9)
            .personal_record()
            .with_note("grindy");
        assert_eq!(format!("{}", set), "3 x 100 @ RPE 9 [PR] - grindy");

        let warmup = SetEntry::new(5, dec!(50)).warmup();
        assert_eq!(format!("{}", warmup), "5 x 50 @ RPE 7 (warm-up)");
    }

    #[test]
    fn test_set_entry_json_field_names() {
        let set = SetEntry::new(5, dec!(40)).personal_record();
        let json = serde_json::to_value(&set).unwrap();

        assert_eq!(json["Reps"], 5);
        assert_eq!(json["Rpe"], 7);
        assert_eq!(json["IsWarmup"], false);
        assert_eq!(json["IsPR"], true);
        assert!(json.get("Ts").is_some());
        assert!(json.get("Note").is_some());
    }

    #[test]
    fn test_set_entry_weight_is_a_json_number() {
        let set = SetEntry::new(8, dec!(22.5));
        let json = serde_json::to_value(&set).unwrap();

        assert!(json["Weight"].is_number());
        assert_eq!(json["Weight"].to_string(), "22.5");

        let text = serde_json::to_string(&set).unwrap();
        assert!(text.contains("\"Weight\":22.5"));
    }

    #[test]
    fn test_set_entry_weight_keeps_precision() {
        let set: SetEntry =
            serde_json::from_str(r#"{"Weight": 0.1000000000000000000000000001}"#).unwrap();
        assert_eq!(set.weight, dec!(0.1000000000000000000000000001));

        let parsed: SetEntry = serde_json::from_str(&serde_json::to_string(&set).unwrap()).unwrap();
        assert_eq!(parsed.weight, set.weight);
    }

    #[test]
    fn test_set_entry_reads_string_weight() {
        let set: SetEntry = serde_json::from_str(r#"{"Reps": 8, "Weight": "22.5"}"#).unwrap();
        assert_eq!(set.weight, dec!(22.5));
    }

    #[test]
    fn test_set_entry_missing_fields_take_defaults() {
        let set: SetEntry = serde_json::from_str(r#"{"Reps": 10, "Weight": 42.5}"#).unwrap();
        assert_eq!(set.reps, 10);
        assert_eq!(set.weight, dec!(42.5));
        assert_eq!(set.rpe, DEFAULT_RPE);
        assert!(!set.is_warmup);
    }
}
