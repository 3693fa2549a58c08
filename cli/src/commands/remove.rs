//! lift remove — delete an application by catalog index.
//!
//! Favorites are never cascaded: removing a favorited entry leaves its name
//! dangling in the favorites set.

use clap::Parser;
use lift_core::core::Launcher;
use lift_core::types::Config;

#[derive(Debug, Parser)]
pub struct Args {
    /// Catalog index of the application (as shown by `lift list`)
    pub index: usize,
}

pub fn run(config: &Config, args: Args) -> Result<(), String> {
    let mut launcher = Launcher::open(config).map_err(|e| e.to_string())?;

    let removed = launcher.remove(args.index).map_err(|e| e.to_string())?;

    println!("Removed {}", removed.name);
    Ok(())
}
