//! `docmend fix-links` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use docmend_config::Config;
use docmend_corpus::{ImageInventory, MarkdownExtensions, markdown_files};
use docmend_links::rewrite_image_links;

use crate::commands::{docs_roots, image_roots};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the fix-links command.
#[derive(Args)]
pub(crate) struct FixLinksArgs {
    /// Path to configuration file (default: auto-discover docmend.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document root to scan (repeatable; overrides config).
    #[arg(long = "docs-root")]
    docs_roots: Vec<PathBuf>,

    /// Image root to index (repeatable; overrides config).
    #[arg(long = "image-root")]
    image_roots: Vec<PathBuf>,
}

impl FixLinksArgs {
    /// Execute the fix-links command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref())?;
        let roots = docs_roots(&config, &self.docs_roots);
        let inventory = ImageInventory::scan(&image_roots(&config, &self.image_roots))?;

        let mut updated = 0;
        for path in markdown_files(&roots, MarkdownExtensions::Md)? {
            let text = fs::read_to_string(&path)?;
            if let Some(rewritten) = rewrite_image_links(&text, &inventory) {
                fs::write(&path, rewritten)?;
                tracing::info!(path = %path.display(), "rewrote image links");
                updated += 1;
            }
        }

        output.success(&format!("Updated {updated} files"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fix_links_end_to_end() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        let img = temp_dir.path().join("img");
        fs::create_dir_all(&docs).unwrap();
        fs::create_dir_all(img.join("screens")).unwrap();
        fs::write(img.join("screens/foo.png"), b"png").unwrap();
        fs::write(docs.join("page.md"), "![[foo.png]]\n![x](other/foo.png)\n").unwrap();

        let args = FixLinksArgs {
            config: None,
            docs_roots: vec![docs.clone()],
            image_roots: vec![img],
        };
        args.execute(&Output::new()).unwrap();

        assert_eq!(
            fs::read_to_string(docs.join("page.md")).unwrap(),
            "![foo](/img/screens/foo.png)\n![x](/img/screens/foo.png)\n"
        );
    }

    #[test]
    fn test_fix_links_missing_wiki_embed_leaves_marker() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("page.md"), "![[gone.png]]\n").unwrap();

        let args = FixLinksArgs {
            config: None,
            docs_roots: vec![docs.clone()],
            image_roots: vec![temp_dir.path().join("img")],
        };
        args.execute(&Output::new()).unwrap();

        assert_eq!(
            fs::read_to_string(docs.join("page.md")).unwrap(),
            "<!-- TODO missing image gone.png -->\n"
        );
    }
}
