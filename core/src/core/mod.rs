//! Launcher context combining the catalog and preferences stores.

use crate::catalog::CatalogStore;
use crate::catalog::error::CatalogError;
use crate::error::Result;
use crate::launch;
use crate::prefs::PrefsStore;
use crate::types::{AppEntry, AppName, Config, EntryId, Settings, Theme};
use std::path::PathBuf;

/// The single live launcher context for the process: both persisted stores,
/// loaded once and mutated synchronously.
///
/// Constructed explicitly (no global state) so every operation can be unit
/// tested without a display. Presentation layers call one method per user
/// action and re-derive the visible list afterwards.
pub struct Launcher {
    catalog: CatalogStore,
    prefs: PrefsStore,
}

impl Launcher {
    /// Loads both stores from the paths in `config`. Missing files yield an
    /// empty catalog and default settings.
    pub fn open(config: &Config) -> Result<Self> {
        let catalog = CatalogStore::load(config.apps_path())?;
        let prefs = PrefsStore::load(config.settings_path())?;
        Ok(Self { catalog, prefs })
    }

    fn index_error(&self, index: usize) -> CatalogError {
        CatalogError::IndexOutOfBounds {
            index,
            len: self.catalog.len(),
        }
    }
}

/// Read operations.
impl Launcher {
    pub fn entries(&self) -> &[AppEntry] {
        self.catalog.entries()
    }

    pub fn entry(&self, index: usize) -> Option<&AppEntry> {
        self.catalog.entry(index)
    }

    pub fn settings(&self) -> &Settings {
        self.prefs.settings()
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme()
    }

    pub fn favorites(&self) -> &[AppName] {
        self.prefs.favorites()
    }

    pub fn is_favorite(&self, name: &AppName) -> bool {
        self.prefs.is_favorite(name)
    }
}

/// Catalog operations.
impl Launcher {
    /// Registers a new application at the end of the catalog.
    pub fn add(&mut self, name: AppName, path: impl Into<PathBuf>) -> Result<EntryId> {
        Ok(self.catalog.add(name, path)?)
    }

    /// Removes the entry at `index`.
    ///
    /// Favorites are left untouched, so a favorite of the removed name may
    /// dangle afterwards.
    pub fn remove(&mut self, index: usize) -> Result<AppEntry> {
        Ok(self.catalog.remove(index)?)
    }
}

/// Favorite and theme operations.
impl Launcher {
    /// Flips favorite membership for the name of the entry at `index` and
    /// returns whether that name is now a favorite.
    pub fn toggle_favorite(&mut self, index: usize) -> Result<bool> {
        let name = self
            .catalog
            .entry(index)
            .ok_or_else(|| self.index_error(index))?
            .name
            .clone();
        Ok(self.prefs.toggle_favorite(name)?)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        Ok(self.prefs.set_theme(theme)?)
    }

    /// Flips dark⇄light and returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        Ok(self.prefs.toggle_theme()?)
    }
}

/// Launch operations.
impl Launcher {
    /// Fire-and-forget launch of the entry at `index`. Mutates nothing.
    pub fn launch(&self, index: usize) -> Result<()> {
        let entry = self
            .catalog
            .entry(index)
            .ok_or_else(|| self.index_error(index))?;
        launch::launch(entry)?;
        Ok(())
    }
}
