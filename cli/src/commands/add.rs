//! lift add — register an application.

use clap::Parser;
use lift_core::core::Launcher;
use lift_core::types::{AppName, Config};
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Display name for the application
    pub name: String,

    /// Path to the executable or openable resource
    pub path: PathBuf,
}

pub fn run(config: &Config, args: Args) -> Result<(), String> {
    let name = AppName::try_from(args.name).map_err(|e| e.to_string())?;
    let mut launcher = Launcher::open(config).map_err(|e| e.to_string())?;

    launcher
        .add(name.clone(), args.path.clone())
        .map_err(|e| e.to_string())?;

    println!("Added {} ({})", name, args.path.display());
    Ok(())
}
