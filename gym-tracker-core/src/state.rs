//! The application state store.
//!
//! `AppState` owns every workout, completed session and warm-up preset and
//! mirrors them to a single document under [`STATE_KEY`].
//!
//! Persistence is per operation, and callers rely on the difference:
//!
//! | operation                 | persists |
//! |---------------------------|----------|
//! | `create_workout`          | no       |
//! | `remove_workout`          | no       |
//! | `workout_mut`             | no       |
//! | `add_warmup_preset`       | yes      |
//! | `remove_warmup_preset`    | yes      |
//! | `add_completed_session`   | yes      |
//! | `remove_session`          | yes      |
//! | `import_backup_json`      | yes (on success) |
//!
//! Use `save()` after a batch of non-persisting changes.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::demo::{default_presets, demo_workouts};
use crate::document::{DocumentRef, StoredDocument};
use crate::error::StoreError;
use crate::export;
use crate::models::{CompletedSession, WarmupPreset, Workout};
use crate::storage::{read_json, write_json, Storage};

/// Key of the current document.
pub const STATE_KEY: &str = "gymtracker.v3";

/// Key of the previous format, a bare list of workouts.
pub const MIGRATION_KEY: &str = "gymtracker.v2";

/// Handle returned by [`AppState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn() + Send>;

/// Change listeners, called in subscription order.
#[derive(Default)]
struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != len_before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener();
        }
    }
}

/// Aggregate over working sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_sets: usize,
    pub total_volume: Decimal,
}

pub struct AppState<S: Storage> {
    storage: S,
    workouts: Vec<Workout>,
    sessions: Vec<CompletedSession>,
    warmup_presets: Vec<WarmupPreset>,
    subscribers: Subscribers,
}

impl<S: Storage> AppState<S> {
    /// Creates an empty store. Call [`initialize`](Self::initialize) to load.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            workouts: Vec::new(),
            sessions: Vec::new(),
            warmup_presets: Vec::new(),
            subscribers: Subscribers::default(),
        }
    }

    /// Loads the stored document.
    ///
    /// Without a current document, workouts are migrated from
    /// [`MIGRATION_KEY`] or seeded from the demo data, presets get their
    /// defaults, and the result is saved right away. A stored document that
    /// can't be parsed is returned as an error.
    pub fn initialize(&mut self) -> Result<(), StoreError> {
        match read_json::<StoredDocument, _>(&self.storage, STATE_KEY)? {
            Some(doc) => {
                self.replace_all(doc);
                tracing::debug!(
                    "Loaded {} workout(s), {} session(s), {} preset(s)",
                    self.workouts.len(),
                    self.sessions.len(),
                    self.warmup_presets.len()
                );
                self.subscribers.notify();
            }
            None => {
                self.workouts = match read_json::<Vec<Workout>, _>(&self.storage, MIGRATION_KEY)? {
                    Some(workouts) => {
                        tracing::info!(
                            "Migrating {} workout(s) from {}",
                            workouts.len(),
                            MIGRATION_KEY
                        );
                        workouts
                    }
                    None => {
                        tracing::info!("No stored data, starting with demo workouts");
                        demo_workouts()
                    }
                };
                self.sessions = Vec::new();
                self.warmup_presets = default_presets();
                self.save()?;
            }
        }
        Ok(())
    }

    /// Writes the whole document, then notifies subscribers.
    pub fn save(&self) -> Result<(), StoreError> {
        write_json(&self.storage, STATE_KEY, &self.document())?;
        tracing::debug!("Saved state to {}", STATE_KEY);
        self.subscribers.notify();
        Ok(())
    }

    /// Registers a listener called after every successful save.
    pub fn subscribe(&mut self, listener: impl Fn() + Send + 'static) -> SubscriptionId {
        self.subscribers.add(Box::new(listener))
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn sessions(&self) -> &[CompletedSession] {
        &self.sessions
    }

    pub fn warmup_presets(&self) -> &[WarmupPreset] {
        &self.warmup_presets
    }

    // ====== Workouts ======

    /// Appends a new workout. Not persisted until `save()`.
    pub fn create_workout(&mut self, name: impl Into<String>) -> &mut Workout {
        self.workouts.push(Workout::new(name));
        let last = self.workouts.len() - 1;
        &mut self.workouts[last]
    }

    /// Removes every workout with `id`. Sessions are left alone.
    /// Not persisted until `save()`.
    pub fn remove_workout(&mut self, id: Uuid) {
        self.workouts.retain(|w| w.id != id);
    }

    pub fn workout(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Mutable access for logging sets or editing exercises.
    /// Not persisted until `save()`.
    pub fn workout_mut(&mut self, id: Uuid) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id == id)
    }

    /// Resolve a workout by UUID or case-insensitive name.
    pub fn find_workout(&self, reference: &str) -> Option<&Workout> {
        if let Ok(id) = Uuid::parse_str(reference) {
            return self.workout(id);
        }
        self.workouts
            .iter()
            .find(|w| w.name.eq_ignore_ascii_case(reference))
    }

    // ====== Warm-up presets ======

    pub fn add_warmup_preset(&mut self, preset: WarmupPreset) -> Result<(), StoreError> {
        self.warmup_presets.push(preset);
        self.save()
    }

    /// Removes the preset at `index`; an out-of-range index changes nothing
    /// but the document is still saved.
    pub fn remove_warmup_preset(&mut self, index: usize) -> Result<(), StoreError> {
        if index < self.warmup_presets.len() {
            self.warmup_presets.remove(index);
        }
        self.save()
    }

    // ====== Sessions ======

    pub fn add_completed_session(&mut self, session: CompletedSession) -> Result<(), StoreError> {
        self.sessions.push(session);
        self.save()
    }

    pub fn remove_session(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.sessions.retain(|s| s.id != id);
        self.save()
    }

    // ====== Stats ======

    /// Count and volume of working sets across all exercise logs.
    pub fn compute_stats(&self) -> Stats {
        let working = self
            .workouts
            .iter()
            .flat_map(|w| &w.exercises)
            .flat_map(|e| &e.log)
            .filter(|s| !s.is_warmup);

        let (total_sets, total_volume) = working.fold((0, Decimal::ZERO), |(count, volume), s| {
            (count + 1, volume.saturating_add(s.volume()))
        });

        Stats {
            total_sets,
            total_volume,
        }
    }

    // ====== Export / backup ======

    pub fn export_sessions_csv(&self) -> String {
        export::sessions_csv(&self.sessions)
    }

    pub fn export_all_csv(&self) -> String {
        export::all_csv(&self.workouts)
    }

    pub fn export_backup_json(&self) -> Result<String, StoreError> {
        Ok(export::backup_json(&self.document())?)
    }

    /// Replaces all data with the backup in `json` and saves.
    ///
    /// A backup that doesn't parse is ignored: nothing changes, nothing is
    /// written, and `Ok(false)` is returned.
    pub fn import_backup_json(&mut self, json: &str) -> Result<bool, StoreError> {
        let Some(doc) = export::parse_backup(json) else {
            return Ok(false);
        };
        self.replace_all(doc);
        self.save()?;
        Ok(true)
    }

    fn document(&self) -> DocumentRef<'_> {
        DocumentRef {
            workouts: &self.workouts,
            sessions: &self.sessions,
            warmup_presets: &self.warmup_presets,
        }
    }

    fn replace_all(&mut self, doc: StoredDocument) {
        self.workouts = doc.workouts.unwrap_or_default();
        self.sessions = doc.sessions.unwrap_or_default();
        self.warmup_presets = doc.warmup_presets.unwrap_or_else(default_presets);
    }
}
