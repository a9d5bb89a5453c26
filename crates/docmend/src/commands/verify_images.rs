//! `docmend verify-images` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use docmend_config::Config;
use docmend_corpus::{ImageInventory, MarkdownExtensions, markdown_files};
use docmend_links::audit_image_links;

use crate::commands::{docs_roots, image_roots};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the verify-images command.
#[derive(Args)]
pub(crate) struct VerifyImagesArgs {
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

impl VerifyImagesArgs {
    /// Execute the verify-images command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref())?;
        let roots = docs_roots(&config, &self.docs_roots);
        let inventory = ImageInventory::scan(&image_roots(&config, &self.image_roots))?;

        let mut total_fixed = 0;
        let mut total_missing = 0;
        for path in markdown_files(&roots, MarkdownExtensions::MdAndMdx)? {
            let text = fs::read_to_string(&path)?;
            let outcome = audit_image_links(&text, &inventory);
            if let Some(rewritten) = outcome.text {
                fs::write(&path, rewritten)?;
                tracing::info!(
                    path = %path.display(),
                    fixed = outcome.fixed,
                    "repaired image links"
                );
            }
            total_fixed += outcome.fixed;
            total_missing += outcome.missing;
        }

        let summary = format!("Fixed {total_fixed} image links; remaining missing: {total_missing}");
        if total_missing > 0 {
            output.warning(&summary);
        } else {
            output.success(&summary);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_verify_repairs_and_keeps_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        let img = temp_dir.path().join("img");
        fs::create_dir_all(&docs).unwrap();
        fs::create_dir_all(img.join("new")).unwrap();
        fs::write(img.join("new/pic.png"), b"png").unwrap();
        fs::write(
            docs.join("page.md"),
            "![p](/img/old/pic.png)\n![q](/img/gone.png)\n",
        )
        .unwrap();

        let args = VerifyImagesArgs {
            config: None,
            docs_roots: vec![docs.clone()],
            image_roots: vec![img],
        };
        args.execute(&Output::new()).unwrap();

        assert_eq!(
            fs::read_to_string(docs.join("page.md")).unwrap(),
            "![p](/img/new/pic.png)\n![q](/img/gone.png)\n"
        );
    }

    #[test]
    fn test_verify_scans_mdx_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        let img = temp_dir.path().join("img");
        fs::create_dir_all(&docs).unwrap();
        fs::create_dir_all(&img).unwrap();
        fs::write(img.join("pic.png"), b"png").unwrap();
        fs::write(docs.join("widget.mdx"), "![p](assets/pic.png)\n").unwrap();

        let args = VerifyImagesArgs {
            config: None,
            docs_roots: vec![docs.clone()],
            image_roots: vec![img],
        };
        args.execute(&Output::new()).unwrap();

        assert_eq!(
            fs::read_to_string(docs.join("widget.mdx")).unwrap(),
            "![p](/img/pic.png)\n"
        );
    }

    #[test]
    fn test_verify_leaves_healthy_tree_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        let img = temp_dir.path().join("img");
        fs::create_dir_all(&docs).unwrap();
        fs::create_dir_all(&img).unwrap();
        fs::write(img.join("pic.png"), b"png").unwrap();
        let content = "![p](/img/pic.png)\n![r](https://example.com/x.png)\n";
        fs::write(docs.join("page.md"), content).unwrap();

        let args = VerifyImagesArgs {
            config: None,
            docs_roots: vec![docs.clone()],
            image_roots: vec![img],
        };
        args.execute(&Output::new()).unwrap();

        assert_eq!(fs::read_to_string(docs.join("page.md")).unwrap(), content);
    }
}
