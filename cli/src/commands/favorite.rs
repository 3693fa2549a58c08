//! lift favorite — toggle favorite membership by catalog index.

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

    let Some(entry) = launcher.entry(args.index) else {
        return Err(format!("no application at index {}", args.index));
    };
    let name = entry.name.clone();

    let now_favorite = launcher
        .toggle_favorite(args.index)
        .map_err(|e| e.to_string())?;

    if now_favorite {
        println!("Marked {name} as favorite");
    } else {
        println!("Removed {name} from favorites");
    }
    Ok(())
}
