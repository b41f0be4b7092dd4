//! demoji - strip emoji characters from source files in place
//!
//! demoji provides:
//! - Recursive file discovery with an extension allow-list and directory exclusions
//! - In-place removal of emoji code points, leaving all other bytes untouched
//! - A run summary as text or JSON

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
