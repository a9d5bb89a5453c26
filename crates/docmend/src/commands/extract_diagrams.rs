//! `docmend extract-diagrams` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use docmend_config::Config;
use docmend_corpus::{MarkdownExtensions, markdown_files};
use docmend_diagrams::{archive_mermaid_blocks, diagram_candidates};

use crate::commands::docs_roots;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the extract-diagrams command.
#[derive(Args)]
pub(crate) struct ExtractDiagramsArgs {
    /// Path to configuration file (default: auto-discover docmend.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document root to scan (repeatable; overrides config).
    #[arg(long = "docs-root")]
    docs_roots: Vec<PathBuf>,

    /// Directory holding pre-rendered diagram images (overrides config).
    #[arg(long)]
    diagrams_dir: Option<PathBuf>,

    /// Locale tag in candidate image filenames (overrides config).
    #[arg(long)]
    locale: Option<String>,
}

impl ExtractDiagramsArgs {
    /// Execute the extract-diagrams command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref())?;
        let roots = docs_roots(&config, &self.docs_roots);
        let diagrams_dir = self
            .diagrams_dir
            .unwrap_or_else(|| config.images.diagrams_dir.clone());
        let locale = self.locale.unwrap_or_else(|| config.diagrams.locale.clone());

        let mut changed_files: Vec<PathBuf> = Vec::new();
        for path in markdown_files(&roots, MarkdownExtensions::Md)? {
            let text = fs::read_to_string(&path)?;
            let base = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let candidates = diagram_candidates(&diagrams_dir, &base, &locale)?;

            if let Some(extraction) = archive_mermaid_blocks(&text, &candidates) {
                fs::write(&path, extraction.text)?;
                tracing::info!(
                    path = %path.display(),
                    replaced = extraction.replaced,
                    missing = extraction.missing,
                    "archived mermaid blocks"
                );
                changed_files.push(path);
            }
        }

        output.success(&format!("Updated {} files", changed_files.len()));
        for path in &changed_files {
            output.info(&format!(" - {}", path.display()));
        }
        Ok(())
    }
}
