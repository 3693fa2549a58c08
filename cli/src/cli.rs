use crate::commands::{add, favorite, launch, list, remove, theme};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lift")]
#[command(about = "Minimal application launcher", long_about = None)]
pub struct Cli {
    /// Data directory holding apps.json and settings.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register an application
    Add(add::Args),

    /// List registered applications, optionally filtered
    List(list::Args),

    /// Launch an application by catalog index
    Launch(launch::Args),

    /// Delete an application by catalog index
    Remove(remove::Args),

    /// Toggle favorite for an application by catalog index
    Favorite(favorite::Args),

    /// Show or change the theme
    Theme(theme::Args),
}
