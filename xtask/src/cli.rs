use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtasks")]
#[command(about = "Run project tasks using rust instead of scripts")]
pub struct App {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Builds the project binaries
    Build(BuildArgs),
    /// Builds the binary and installs it at the given path
    Install(InstallArgs),
    /// Checks formatting and runs clippy on the whole workspace
    Lint,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Release flag
    #[arg(short, long)]
    pub release: bool,
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Path to install the binary to.
    #[arg(short, long)]
    pub path: String,
}
