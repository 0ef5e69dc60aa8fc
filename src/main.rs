mod assets;
mod cli;
mod commands;
mod config;

use std::error::Error;

use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Commands};
use config::FileConfig;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let file = match &cli.config {
        Some(path) => FileConfig::from_path(path)?,
        None => FileConfig::default(),
    };
    match cli.command {
        Commands::Scan(args) => commands::scan(file, args),
        Commands::Check(args) => commands::check(file, args),
    }
}

// RUST_LOG, when set, refines the level picked from the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Warn,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    if let Err(e) = builder.try_init() {
        eprintln!("Warning: could not initialize logger: {}", e);
    }
}
