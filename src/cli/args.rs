//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// The directory containing C# source code files to analyze
    #[arg(short, long)]
    pub directory: PathBuf,

    /// The output JSON file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
