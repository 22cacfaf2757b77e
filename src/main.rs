//! CLI entry point for rendering iterated function system fractals

use clap::Parser;
use fractal_ifs::io::cli::{Cli, FractalProcessor};

fn main() -> fractal_ifs::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut processor = FractalProcessor::try_from(cli)?;
    processor.process().map(|_| ())
}
