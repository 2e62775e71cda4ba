//! CLI entry point for the layered substitution tiling generator

use clap::Parser;
use subtiling::io::cli::{Cli, TilingRunner};
use subtiling::io::logging::{LoggingConfig, init_logging};

fn main() -> subtiling::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.quiet {
        LoggingConfig::quiet()
    } else {
        LoggingConfig::default()
    });

    let runner = TilingRunner::new(cli);
    runner.run().map(|_summary| ())
}
