//! toctree CLI - documentation navigation-tree generator.
//!
//! Scans a directory of heading-structured markdown documents and writes a
//! single nested XML table of contents for a documentation viewer.

mod build;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use build::BuildArgs;
use output::Output;

/// toctree - documentation navigation-tree generator.
#[derive(Parser)]
#[command(name = "toctree", version, about)]
struct Cli {
    #[command(flatten)]
    args: BuildArgs,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = cli.args.execute(&output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
