//! Catalog store: the ordered list of registered applications.

use crate::persist;
use crate::persist::error::PersistError;
use crate::types::{AppEntry, AppName, EntryId};
use error::CatalogError;
use std::path::PathBuf;

pub mod error {
    use crate::persist::error::PersistError;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum CatalogError {
        #[error("persistence error: {0}")]
        Persist(#[from] PersistError),

        #[error("index {index} out of bounds (catalog has {len} entries)")]
        IndexOutOfBounds { index: usize, len: usize },
    }
}

/// Ordered catalog of registered applications, mirrored to one JSON file.
///
/// Insertion order is preserved and determines the index-based addressing
/// used by the view. Every mutation rewrites the whole backing file.
pub struct CatalogStore {
    path: PathBuf,
    entries: Vec<AppEntry>,
    next_id: u64,
}

impl CatalogStore {
    /// Loads the catalog from `path`. A missing file yields an empty catalog;
    /// an existing but unparseable one is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let mut entries: Vec<AppEntry> = persist::load_or_default(&path)?;

        // Ids are process-local; reassign on every load.
        let mut next_id = 0;
        for entry in &mut entries {
            entry.id = EntryId(next_id);
            next_id += 1;
        }

        log::debug!("loaded {} entries from {}", entries.len(), path.display());
        Ok(Self {
            path,
            entries,
            next_id,
        })
    }
}

/// Read operations.
impl CatalogStore {
    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&AppEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current index of the entry with the given id, if it still exists.
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

/// Mutation operations.
impl CatalogStore {
    /// Appends a new entry and persists the full catalog.
    ///
    /// Neither name uniqueness nor path existence is validated.
    pub fn add(
        &mut self,
        name: AppName,
        path: impl Into<PathBuf>,
    ) -> Result<EntryId, CatalogError> {
        let id = EntryId(self.next_id);
        self.next_id += 1;

        self.entries.push(AppEntry {
            name,
            path: path.into(),
            id,
        });
        self.save()?;
        Ok(id)
    }

    /// Removes and returns the entry at `index`, persisting the remainder.
    ///
    /// The relative order of the surviving entries is unchanged.
    pub fn remove(&mut self, index: usize) -> Result<AppEntry, CatalogError> {
        if index >= self.entries.len() {
            return Err(CatalogError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        self.save()?;
        Ok(removed)
    }

    fn save(&self) -> Result<(), PersistError> {
        persist::save(&self.path, &self.entries)
    }
}

#[cfg(test)]
mod proptests;
