pub(crate) mod config;
pub use config::Config;

pub(crate) mod entry;
pub use entry::{AppEntry, AppName, AppNameError, EntryId, MAX_NAME_LENGTH};

pub(crate) mod settings;
pub use settings::{ParseThemeError, Settings, Theme};
