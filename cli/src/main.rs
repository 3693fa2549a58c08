mod cli;
mod commands;

use clap::Parser;

fn main() {
    env_logger::init();

    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
