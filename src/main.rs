//! CLI entry point for the four-color map coloring tool

use clap::Parser;
use fourmap::io::cli::{Cli, FileProcessor};

fn main() -> fourmap::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
