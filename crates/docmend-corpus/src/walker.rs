//! Markdown file discovery by filesystem walking.
//!
//! The walker only identifies files; reading and transforming content is the
//! caller's concern. Results are sorted so repeated runs visit files in the
//! same order regardless of directory-entry ordering.

use std::fs;
use std::path::{Path, PathBuf};

use crate::CorpusError;

/// Which Markdown extensions a tool recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownExtensions {
    /// `*.md` only (extract-diagrams, fix-links, sanitize).
    Md,
    /// `*.md` and `*.mdx` (verify-images).
    MdAndMdx,
}

impl MarkdownExtensions {
    fn matches(self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        match self {
            Self::Md => ext == "md",
            Self::MdAndMdx => ext == "md" || ext == "mdx",
        }
    }
}

/// Recursively collect Markdown files under the given document roots.
///
/// Roots that do not exist are skipped silently (a docs tree may legitimately
/// lack a locale directory). Any other filesystem failure aborts the walk.
pub fn markdown_files(
    roots: &[PathBuf],
    extensions: MarkdownExtensions,
) -> Result<Vec<PathBuf>, CorpusError> {
    let mut files = Vec::new();
    for root in roots {
        if !root.exists() {
            tracing::debug!(root = %root.display(), "document root missing, skipping");
            continue;
        }
        collect_markdown(root, extensions, &mut files)?;
    }
    files.sort();
    Ok(files)
}

fn collect_markdown(
    dir: &Path,
    extensions: MarkdownExtensions,
    files: &mut Vec<PathBuf>,
) -> Result<(), CorpusError> {
    let entries = fs::read_dir(dir).map_err(|e| CorpusError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| CorpusError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| CorpusError::io(&path, e))?;
        if file_type.is_dir() {
            collect_markdown(&path, extensions, files)?;
        } else if file_type.is_file() && extensions.matches(&path) {
            files.push(path);
        }
    }
    Ok(())
}
