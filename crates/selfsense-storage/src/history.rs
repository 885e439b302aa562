use std::path::{Path, PathBuf};

use selfsense_core::models::HistoryEntry;

use crate::error::StorageError;
use crate::file::{load_json, save_json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    /// An entry with the same condition and timestamp was already stored.
    Duplicate,
}

/// Assessment history kept as a JSON array, newest first.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored entries; a missing file is an empty history.
    pub fn entries(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        Ok(load_json(&self.path)?.unwrap_or_default())
    }

    pub fn append(&self, entry: HistoryEntry) -> Result<AppendOutcome, StorageError> {
        let mut entries = self.entries()?;
        if entries.iter().any(|e| e.dedup_key() == entry.dedup_key()) {
            tracing::debug!(
                condition = %entry.condition_id,
                recorded_at = %entry.recorded_at,
                "history entry already stored"
            );
            return Ok(AppendOutcome::Duplicate);
        }

        tracing::info!(
            condition = %entry.condition_id,
            level = %entry.risk_level,
            total = entry.total_score,
            "history entry appended"
        );
        entries.insert(0, entry);
        save_json(&self.path, &entries)?;
        Ok(AppendOutcome::Appended)
    }

    pub fn for_condition(&self, condition_id: &str) -> Result<Vec<HistoryEntry>, StorageError> {
        let mut entries = self.entries()?;
        entries.retain(|e| e.condition_id == condition_id);
        Ok(entries)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "history cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
