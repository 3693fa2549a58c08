//! Fire-and-forget launching via the OS "open with associated handler"
//! primitive.

use crate::types::AppEntry;
use error::LaunchError;

pub mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum LaunchError {
        #[error("failed to open {}: {source}", path.display())]
        Open {
            path: PathBuf,
            source: std::io::Error,
        },
    }
}

/// Opens the entry's path with its associated handler, without waiting.
///
/// No exit code is captured and no store is mutated; a failure here is
/// terminal for this launch only.
pub fn launch(entry: &AppEntry) -> Result<(), LaunchError> {
    log::info!("launching {} ({})", entry.name, entry.path.display());
    open::that_detached(&entry.path).map_err(|source| LaunchError::Open {
        path: entry.path.clone(),
        source,
    })
}
