//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::Output;
use super::{bind, map_cmd, package_cmd};
use crate::manager::MemoryManager;

#[derive(Parser)]
#[command(name = "resin")]
#[command(author, version, about = "Manage resource bindings, packages, and resource mappings")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bind resources to binding types, or list bindings
    Bind(bind::BindArgs),

    /// Manage installed packages
    #[command(subcommand)]
    Package(package_cmd::PackageCommands),

    /// Map a repository path to filesystem paths, or list mappings
    Map(map_cmd::MapArgs),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    // The managers are external collaborators; the in-memory stand-in is
    // rooted at the working directory for this invocation.
    let root_name = cwd
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string());
    let mut manager = MemoryManager::new(&root_name, &cwd);

    let mut output = Output::new(std::io::stdout(), cli.verbose);
    output.verbose("resin starting");

    match cli.command {
        Commands::Bind(args) => bind::run(args, &mut output, &mut manager)?,
        Commands::Package(cmd) => package_cmd::run(cmd, &mut output, &mut manager, &cwd)?,
        Commands::Map(args) => map_cmd::run(args, &mut output, &mut manager)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
