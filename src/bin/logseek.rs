//! logseek CLI binary.

use std::process;

use clap::Parser;
use log::LevelFilter;
use logseek::cli::{args::*, commands::*};

fn main() {
    let args = LogseekArgs::parse();

    // Map the CLI verbosity onto the log filter unless the caller already
    // set RUST_LOG themselves.
    let default_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
