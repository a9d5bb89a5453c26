//! `docmend sanitize` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use docmend_config::Config;
use docmend_corpus::{MarkdownExtensions, markdown_files};
use docmend_diagrams::sanitize_archived_blocks;

use crate::commands::docs_roots;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sanitize command.
#[derive(Args)]
pub(crate) struct SanitizeArgs {
    /// Path to configuration file (default: auto-discover docmend.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document root to scan (repeatable; overrides config).
    #[arg(long = "docs-root")]
    docs_roots: Vec<PathBuf>,
}

impl SanitizeArgs {
    /// Execute the sanitize command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref())?;
        let roots = docs_roots(&config, &self.docs_roots);

        let mut sanitized = 0;
        for path in markdown_files(&roots, MarkdownExtensions::Md)? {
            let text = fs::read_to_string(&path)?;
            if let Some(rewritten) = sanitize_archived_blocks(&text) {
                fs::write(&path, rewritten)?;
                tracing::info!(path = %path.display(), "sanitized archived blocks");
                sanitized += 1;
            }
        }

        output.success(&format!("Sanitized {sanitized} files"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize_end_to_end() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(
            docs.join("page.md"),
            "<!--\nOriginal Mermaid code:\n``` mermaid\nA[Queue<br>Worker]\n```\n-->\n",
        )
        .unwrap();

        let args = SanitizeArgs {
            config: None,
            docs_roots: vec![docs.clone()],
        };
        args.execute(&Output::new()).unwrap();

        assert_eq!(
            fs::read_to_string(docs.join("page.md")).unwrap(),
            "<!--\nOriginal Mermaid code:\n``` mermaid\nA[Queue&lt;br/>Worker]\n```\n-->\n"
        );
    }

    #[test]
    fn test_sanitize_ignores_markup_outside_archived_blocks() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        let content = "Some <b>html</b> in prose stays.\n";
        fs::write(docs.join("page.md"), content).unwrap();

        let args = SanitizeArgs {
            config: None,
            docs_roots: vec![docs.clone()],
        };
        args.execute(&Output::new()).unwrap();

        assert_eq!(fs::read_to_string(docs.join("page.md")).unwrap(), content);
    }
}
