//! Command line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blockscan", version)]
#[command(about = "Classify registered blocks by their texture layout", long_about = None)]
pub struct Cli {
    /// Settings file (TOML); command line flags take precedence
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Raise console verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings and errors to the console
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify every registered block and write the report log
    Scan(ScanArgs),

    /// Load the registry and report definition problems
    Check(RegistryArgs),
}

#[derive(Args, Debug, Default)]
pub struct RegistryArgs {
    /// Directory holding assets/registry/{textures,blocks}.toml
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Texture catalog, overrides the assets lookup
    #[arg(long)]
    pub textures: Option<PathBuf>,

    /// Block definitions, overrides the assets lookup
    #[arg(long)]
    pub blocks: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Directory receiving logs/<log-file>
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Name of the report log
    #[arg(long)]
    pub log_file: Option<String>,

    /// Version string written into the log header
    #[arg(long)]
    pub host_version: Option<String>,

    /// Also write the classified blocks as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}
