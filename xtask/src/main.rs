mod cli;
mod scripts;

use clap::{CommandFactory, Parser};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let app = cli::App::parse();

    match &app.command {
        Some(cli::Commands::Build(args)) => scripts::build(args),
        Some(cli::Commands::Install(args)) => scripts::install(args),
        Some(cli::Commands::Lint) => scripts::lint(),
        None => {
            cli::App::command().print_help()?;
            Ok(())
        }
    }
}
