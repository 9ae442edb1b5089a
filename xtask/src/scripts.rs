use crate::cli;
use bunt::println;
use duct::cmd;
use std::error::Error;

const BIN: &str = "ollama-stream";

pub fn build(args: &cli::BuildArgs) -> Result<(), Box<dyn Error>> {
    let mut arguments = vec!["build", "--verbose", "--bin", BIN];

    if args.release {
        println!("{$magenta}Building {[yellow]} in release mode{/$}", BIN);
        arguments.push("--release");
    } else {
        println!("{$magenta}Building {[yellow]}{/$}", BIN);
    }

    cmd("cargo", arguments).run()?;

    Ok(())
}

pub fn install(args: &cli::InstallArgs) -> Result<(), Box<dyn Error>> {
    build(&cli::BuildArgs { release: true })?;

    let target_path = "target/release/".to_string() + BIN;

    println!(
        "{$magenta}Installing {[yellow]} at {[yellow]}{/$}",
        BIN, &args.path
    );
    cmd!("cp", &target_path, &args.path).run()?;
    cmd!("chmod", "+x", &args.path).run()?;

    Ok(())
}

pub fn lint() -> Result<(), Box<dyn Error>> {
    println!("{$magenta}Checking format{/$}");
    cmd!("cargo", "fmt", "--all", "--check").run()?;

    println!("{$magenta}Running clippy{/$}");
    cmd!(
        "cargo",
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings"
    )
    .run()?;

    Ok(())
}
