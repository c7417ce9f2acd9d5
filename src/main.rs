//! CLI entry point for the hexagonal mosaic renderer

use clap::Parser;
use hexmosaic::io::cli::{Cli, FileProcessor};

fn main() -> hexmosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
