//! The persisted document shape shared by the state store and backups.

use serde::{Deserialize, Serialize};

use crate::models::{CompletedSession, WarmupPreset, Workout};

/// Borrowed view of the three collections, used for writing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentRef<'a> {
    pub workouts: &'a [Workout],
    pub sessions: &'a [CompletedSession],
    pub warmup_presets: &'a [WarmupPreset],
}

/// A document as read back. Any collection may be missing or null.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StoredDocument {
    pub workouts: Option<Vec<Workout>>,
    pub sessions: Option<Vec<CompletedSession>>,
    pub warmup_presets: Option<Vec<WarmupPreset>>,
}

/// The document written by the older `gymtracker.v1` service.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LegacyDocument {
    pub exercises: Vec<String>,
    pub workouts: Vec<Workout>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_ref_field_names() {
        let workouts = vec![Workout::new("Push")];
        let doc = DocumentRef {
            workouts: &workouts,
            sessions: &[],
            warmup_presets: &[],
        };
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["Workouts"][0]["Name"], "Push");
        assert!(json["Sessions"].as_array().unwrap().is_empty());
        assert!(json["WarmupPresets"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_stored_document_missing_and_null() {
        let doc: StoredDocument =
            serde_json::from_str(r#"{"Workouts": [], "WarmupPresets": null}"#).unwrap();
        assert_eq!(doc.workouts.map(|w| w.len()), Some(0));
        assert!(doc.sessions.is_none());
        assert!(doc.warmup_presets.is_none());
    }
}
