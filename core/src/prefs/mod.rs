//! Preferences store: theme and favorite names.

use crate::persist;
use crate::persist::error::PersistError;
use crate::types::{AppName, Settings, Theme};
use error::PrefsError;
use std::path::PathBuf;

pub mod error {
    use crate::persist::error::PersistError;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum PrefsError {
        #[error("persistence error: {0}")]
        Persist(#[from] PersistError),
    }
}

/// User settings mirrored to one JSON file.
///
/// Favorites are keyed by entry name, independently of the catalog: toggling
/// never checks catalog membership, and deleting a catalog entry never
/// cascades here, so a favorite may dangle.
pub struct PrefsStore {
    path: PathBuf,
    settings: Settings,
}

impl PrefsStore {
    /// Loads settings from `path`, defaulting to dark theme and no favorites
    /// when the file is absent.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let settings = persist::load_or_default(&path)?;
        Ok(Self { path, settings })
    }
}

/// Read operations.
impl PrefsStore {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn favorites(&self) -> &[AppName] {
        &self.settings.favorites
    }

    pub fn is_favorite(&self, name: &AppName) -> bool {
        self.settings.favorites.contains(name)
    }
}

/// Mutation operations. Each one persists before returning.
impl PrefsStore {
    /// Flips favorite membership for `name` and returns whether it is now a
    /// favorite. Calling twice with the same name restores the original set.
    pub fn toggle_favorite(&mut self, name: AppName) -> Result<bool, PrefsError> {
        let favorites = &mut self.settings.favorites;
        let now_favorite = match favorites.iter().position(|f| *f == name) {
            Some(pos) => {
                favorites.remove(pos);
                false
            }
            None => {
                favorites.push(name);
                true
            }
        };
        self.save()?;
        Ok(now_favorite)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PrefsError> {
        self.settings.theme = theme;
        self.save()?;
        Ok(())
    }

    /// Flips dark⇄light and returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme, PrefsError> {
        let theme = self.settings.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    fn save(&self) -> Result<(), PersistError> {
        persist::save(&self.path, &self.settings)
    }
}
