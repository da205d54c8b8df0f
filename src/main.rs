//! CLI entry point for the connect-the-dots sketch generator

use clap::Parser;
use dotsketch::io::cli::{Cli, FileProcessor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> dotsketch::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_directive().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
