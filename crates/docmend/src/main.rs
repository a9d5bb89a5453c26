//! docmend CLI - documentation-maintenance utilities.
//!
//! Provides one subcommand per maintenance concern:
//! - `extract-diagrams`: Replace Mermaid blocks with image references
//! - `fix-links`: Normalize image references to the canonical `/img/` path
//! - `sanitize`: Escape markup inside archived diagram comments
//! - `verify-images`: Audit and repair broken image links

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExtractDiagramsArgs, FixLinksArgs, SanitizeArgs, VerifyImagesArgs};
use output::Output;

/// docmend - documentation-maintenance utilities.
#[derive(Parser)]
#[command(name = "docmend", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace Mermaid blocks with pre-rendered images, archiving the source.
    ExtractDiagrams(ExtractDiagramsArgs),
    /// Normalize wiki-style and relative image references.
    FixLinks(FixLinksArgs),
    /// Escape markup characters inside archived diagram comments.
    Sanitize(SanitizeArgs),
    /// Audit image references and repair resolvable ones.
    VerifyImages(VerifyImagesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::ExtractDiagrams(args) => args.execute(&output),
        Commands::FixLinks(args) => args.execute(&output),
        Commands::Sanitize(args) => args.execute(&output),
        Commands::VerifyImages(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
