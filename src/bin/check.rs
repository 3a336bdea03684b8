//! NVBench JSON Version Checker CLI
//!
//! Loads result documents and warns about any written with a different
//! (or no) file version.
//!
//! Usage:
//!   nvbench-json-check results/ --recursive
//!   nvbench-json-check run1.json run2.json

use std::io;
use std::path::PathBuf;

use clap::Parser;
use nvbench_json::{check_paths, BatchOptions, CheckerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nvbench-json-check")]
#[command(about = "Check the file version of NVBench JSON result documents")]
struct Cli {
    /// Result files or directories containing them
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Config file to layer over the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only print warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether every document loaded (and, under `fail_on_mismatch`, was current).
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let config = CheckerConfig::load_from(cli.config.as_deref())?;

    let mut options = BatchOptions::from_config(&config);
    options.recursive |= cli.recursive;
    options.quiet = cli.quiet;

    let all_ok = check_paths(
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &cli.paths,
        &options,
    )?;
    Ok(all_ok)
}
