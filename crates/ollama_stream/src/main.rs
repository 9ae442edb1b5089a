mod args;
mod config;
mod error;
mod generate;
mod input;
mod list;
mod prelude;
mod printer;

use clap::{CommandFactory, Parser};

use crate::prelude::*;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    env_logger::init();

    let (args, config) = build_config(Args::parse())?;
    let args = merge_args_and_config(args, config);

    log::info!("args: {:#?}", args);

    // Requests block on the response body, so they run off the async runtime while we wait
    // for a termination signal.
    let task = tokio::task::spawn_blocking(move || dispatch(args));

    tokio::select! {
        result = task => result?,
        _ = tokio::signal::ctrl_c() => {
            log::info!("interrupted, dropping the in-flight request");
            std::process::exit(130)
        }
    }
}

fn dispatch(args: Args) -> Result<()> {
    let mut sink = printer::Terminal::new(&args);
    let mut stdin = input::Stdin::new(sink.is_colored());

    match args.command.clone() {
        Some(Command::List) => list::run(&args, &mut sink),
        Some(Command::Run(run)) => generate::run(&args, run, &mut sink, &mut stdin),
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
