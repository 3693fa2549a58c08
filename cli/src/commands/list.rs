//! lift list — show the visible, favorite-annotated application list.

use clap::Parser;
use lift_core::core::Launcher;
use lift_core::types::Config;
use lift_search::FilterEngine;

#[derive(Debug, Parser)]
pub struct Args {
    /// Case-insensitive substring filter on application names
    #[arg(default_value = "")]
    pub query: String,
}

pub fn run(config: &Config, args: Args) -> Result<(), String> {
    let launcher = Launcher::open(config).map_err(|e| e.to_string())?;
    let mut engine = FilterEngine::new();

    let visible = engine.visible_entries(launcher.entries(), launcher.favorites(), &args.query);

    if visible.is_empty() {
        if launcher.entries().is_empty() {
            println!("No applications registered");
        } else {
            println!("No applications matched");
        }
        return Ok(());
    }

    for row in &visible {
        println!("{:>3}  {}", row.source_index, row.label);
    }
    Ok(())
}
