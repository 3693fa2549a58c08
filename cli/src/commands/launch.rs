//! lift launch — fire-and-forget launch by catalog index.

use clap::Parser;
use lift_core::core::Launcher;
use lift_core::types::Config;

#[derive(Debug, Parser)]
pub struct Args {
    /// Catalog index of the application (as shown by `lift list`)
    pub index: usize,
}

pub fn run(config: &Config, args: Args) -> Result<(), String> {
    let launcher = Launcher::open(config).map_err(|e| e.to_string())?;

    let Some(entry) = launcher.entry(args.index) else {
        return Err(format!("no application at index {}", args.index));
    };
    let name = entry.name.clone();

    launcher.launch(args.index).map_err(|e| e.to_string())?;

    println!("Launched {name}");
    Ok(())
}
