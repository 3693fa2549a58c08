//! lift theme — show or change the theme.

use clap::{Parser, Subcommand};
use lift_core::core::Launcher;
use lift_core::types::{Config, Theme};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<ThemeCommand>,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Show the current theme
    Get,

    /// Set the theme to dark or light
    Set { theme: Theme },

    /// Flip between dark and light
    Toggle,
}

pub fn run(config: &Config, args: Args) -> Result<(), String> {
    let mut launcher = Launcher::open(config).map_err(|e| e.to_string())?;

    match args.command.unwrap_or(ThemeCommand::Get) {
        ThemeCommand::Get => {
            println!("{}", launcher.theme());
        }
        ThemeCommand::Set { theme } => {
            launcher.set_theme(theme).map_err(|e| e.to_string())?;
            println!("Theme set to {theme}");
        }
        ThemeCommand::Toggle => {
            let theme = launcher.toggle_theme().map_err(|e| e.to_string())?;
            println!("Theme set to {theme}");
        }
    }
    Ok(())
}
