//! Command-line interface for flatcat.
//!
//! Scans a source directory for files matching an extension and merges them
//! into a single line-numbered output file.

use clap::Parser;
use flatcat::{DEFAULT_EXTENSION, FlatcatBuilder, flatcat};
use std::path::PathBuf;
use std::process::exit;

/// flatcat — merge a source tree into one line-numbered file
#[derive(Parser)]
#[command(name = "flatcat", version, about, long_about = None)]
struct Cli {
    /// Source directory to scan recursively
    root: PathBuf,

    /// Output file (overwritten if it already exists)
    output: PathBuf,

    /// Filename suffix to match (exact, case-sensitive)
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,
}

fn main() {
    let cli = Cli::parse();
    let options = FlatcatBuilder::new(cli.root)
        .extension(cli.extension)
        .build();

    match flatcat(options, &cli.output) {
        Ok(report) => println!(
            "Generated {} ({} files, {} lines)",
            cli.output.display(),
            report.files.len(),
            report.lines
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
