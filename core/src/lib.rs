pub mod catalog;
pub mod core;
pub mod error;
pub mod launch;
pub mod persist;
pub mod prefs;
pub mod types;
