//! Saved-search history: durable records with incremental change deltas.

use anyhow::{Context, anyhow};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::{
    error::StorageError,
    model::WeatherSnapshot,
    units::{self, Units},
};

/// One persisted historical entry, derived from a snapshot on explicit user
/// save. Never mutated after creation; only ever appended or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub city: String,
    /// Always Celsius, regardless of which unit system is used for display.
    pub temperature_c: f64,
    pub captured_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Derive a record from a snapshot, normalising the temperature back to
    /// Celsius when the snapshot was fetched in imperial units.
    pub fn from_snapshot(
        snapshot: &WeatherSnapshot,
        fetched_in: Units,
        captured_at: DateTime<Utc>,
    ) -> Self {
        let temperature_c = match fetched_in {
            Units::Metric => snapshot.main.temp,
            Units::Imperial => units::fahrenheit_to_celsius(snapshot.main.temp),
        };

        Self {
            city: snapshot.name.clone(),
            temperature_c,
            captured_at,
        }
    }
}

/// Row-level delta handed to listeners after a successful commit. Indices
/// refer to the newest-first ordering that [`HistoryStore::fetch_all`]
/// exposes, so a list view can patch itself without re-fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryChange {
    Inserted { index: usize },
    Deleted { index: usize },
}

type Listener = Box<dyn FnMut(HistoryChange)>;

/// Durable store for [`HistoryRecord`]s, newest-first.
///
/// The collection lives in memory and is committed to a JSON file as a whole
/// on every mutation; record counts are expected to stay small. A failed
/// commit rolls the in-memory change back, so listeners only ever hear about
/// changes that reached disk.
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<HistoryRecord>,
    listeners: Vec<Listener>,
}

impl HistoryStore {
    /// Open the store backed by the given file, creating an empty store if
    /// the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();

        let mut records: Vec<HistoryRecord> = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read history file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse history file: {}", path.display()))?
        } else {
            Vec::new()
        };

        // Stored order is already newest-first; a stable re-sort guards
        // against a hand-edited file while preserving insertion order on
        // equal dates.
        records.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));

        Ok(Self {
            path,
            records,
            listeners: Vec::new(),
        })
    }

    /// Default history file location under the platform data directory.
    pub fn default_file_path() -> anyhow::Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "lucid-weather", "lucid-weather")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(dirs.data_dir().join("history.json"))
    }

    /// Register a listener for row-level change deltas.
    pub fn subscribe(&mut self, listener: impl FnMut(HistoryChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// All records, most recent capture first. Empty store, empty slice.
    pub fn fetch_all(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Append a record and commit. On success, listeners receive one
    /// `Inserted` delta with the record's position in the newest-first
    /// ordering; records sharing a capture date keep insertion order.
    pub fn save(&mut self, record: HistoryRecord) -> Result<(), StorageError> {
        let index = self
            .records
            .partition_point(|r| r.captured_at >= record.captured_at);
        self.records.insert(index, record);

        if let Err(err) = self.commit() {
            self.records.remove(index);
            return Err(err);
        }

        self.notify(HistoryChange::Inserted { index });
        Ok(())
    }

    /// Remove one record and commit. Deleting a record that is not present
    /// is a no-op: nothing is committed and no delta fires.
    pub fn delete(&mut self, record: &HistoryRecord) -> Result<(), StorageError> {
        let Some(index) = self.records.iter().position(|r| r == record) else {
            return Ok(());
        };
        let removed = self.records.remove(index);

        if let Err(err) = self.commit() {
            self.records.insert(index, removed);
            return Err(err);
        }

        self.notify(HistoryChange::Deleted { index });
        Ok(())
    }

    fn commit(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StorageError::WriteFailed)?;
        }

        let json = serde_json::to_vec_pretty(&self.records)
            .map_err(|err| StorageError::WriteFailed(err.into()))?;
        fs::write(&self.path, json).map_err(StorageError::WriteFailed)?;

        debug!(records = self.records.len(), "history committed");
        Ok(())
    }

    fn notify(&mut self, change: HistoryChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}
