use std::path::{Path, PathBuf};

use selfsense_core::models::{NewProfile, Profile};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::file::{load_json, save_json};

/// Everyone assessments can be taken for, plus who is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileBook {
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub active_id: Option<u32>,
}

impl ProfileBook {
    pub fn get(&self, id: u32) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// The selected profile, or the first one if none is selected.
    pub fn active(&self) -> Option<&Profile> {
        self.active_id
            .and_then(|id| self.get(id))
            .or_else(|| self.profiles.first())
    }

    /// Returns the new id. Ids continue from the highest one in use and the
    /// new profile becomes active.
    pub fn add(&mut self, new: NewProfile) -> Result<u32, StorageError> {
        new.validate()?;
        let id = self.profiles.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        self.profiles.push(new.into_profile(id));
        self.active_id = Some(id);
        Ok(id)
    }

    pub fn update(&mut self, id: u32, new: NewProfile) -> Result<(), StorageError> {
        new.validate()?;
        let slot = self
            .profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StorageError::NotFound(format!("profile {id}")))?;
        *slot = new.into_profile(id);
        Ok(())
    }

    /// Remove a profile. The last remaining profile cannot be removed;
    /// removing the active one selects the first that is left.
    pub fn remove(&mut self, id: u32) -> Result<Profile, StorageError> {
        let index = self
            .profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StorageError::NotFound(format!("profile {id}")))?;
        if self.profiles.len() <= 1 {
            return Err(StorageError::LastProfile);
        }
        let removed = self.profiles.remove(index);
        if self.active_id == Some(id) {
            self.active_id = self.profiles.first().map(|p| p.id);
        }
        Ok(removed)
    }

    pub fn set_active(&mut self, id: u32) -> Result<(), StorageError> {
        if self.get(id).is_none() {
            return Err(StorageError::NotFound(format!("profile {id}")));
        }
        self.active_id = Some(id);
        Ok(())
    }
}

/// A [`ProfileBook`] persisted as one JSON document.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ProfileBook, StorageError> {
        Ok(load_json(&self.path)?.unwrap_or_default())
    }

    pub fn save(&self, book: &ProfileBook) -> Result<(), StorageError> {
        save_json(&self.path, book)
    }

    /// Load, apply `f`, and save only if `f` succeeds.
    pub fn update<T>(
        &self,
        f: impl FnOnce(&mut ProfileBook) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut book = self.load()?;
        let out = f(&mut book)?;
        self.save(&book)?;
        Ok(out)
    }
}
