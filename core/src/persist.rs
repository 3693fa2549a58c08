//! Shared JSON persistence for the two backing documents.
//!
//! A missing file loads the default value; an existing but unparseable file
//! is an error (fail fast, no silent data loss). Every save rewrites the
//! whole document pretty-printed, creating parent directories as needed.
//! There is no atomic rename and no locking: the process assumes exclusive
//! ownership of both files for its lifetime.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum PersistError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),
    }
}

use error::PersistError;

/// Loads `T` from a JSON file, or `T::default()` if the file does not exist.
pub fn load_or_default<T>(path: &Path) -> Result<T, PersistError>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Rewrites the whole document at `path`.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}
