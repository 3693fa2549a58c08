use crate::cli::{Cli, Command};
use lift_core::types::Config;
use std::path::PathBuf;

pub fn dispatch(cli: Cli) -> Result<(), String> {
    let config = Config {
        data_dir: resolve_data_dir(cli.data_dir)?,
    };

    match cli.command {
        Command::Add(args) => add::run(&config, args),
        Command::List(args) => list::run(&config, args),
        Command::Launch(args) => launch::run(&config, args),
        Command::Remove(args) => remove::run(&config, args),
        Command::Favorite(args) => favorite::run(&config, args),
        Command::Theme(args) => theme::run(&config, args),
    }
}

/// Resolution order: `--data-dir` flag, `LIFT_DATA_DIR`, platform data dir.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf, String> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("LIFT_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|dir| dir.join("lift"))
        .ok_or_else(|| "could not determine a data directory; pass --data-dir".to_string())
}

pub mod add;
pub mod favorite;
pub mod launch;
pub mod list;
pub mod remove;
pub mod theme;
