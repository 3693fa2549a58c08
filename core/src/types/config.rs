use std::path::PathBuf;

/// Locations of the two persisted documents.
#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn apps_path(&self) -> PathBuf {
        self.data_dir.join("apps.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }
}
