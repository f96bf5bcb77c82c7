//! # sbf CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Sanger barcode toolchain.
///
/// Converts between the human (`PR1234K`) and machine (`4500001234757`)
/// barcode forms, validates scanner and keyboard input, and splits
/// barcodes into their components.
#[derive(Parser, Debug)]
#[command(name = "sbf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Convert a barcode between its human and machine forms.
    Convert(sbf_cli::convert::ConvertArgs),
    /// Check that a barcode verifies.
    Validate(sbf_cli::validate::ValidateArgs),
    /// Split a barcode into prefix, number, and checksum.
    Split(sbf_cli::split::SplitArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => sbf_cli::convert::run(&args),
        Commands::Validate(args) => sbf_cli::validate::run(&args),
        Commands::Split(args) => sbf_cli::split::run(&args),
    }
}
