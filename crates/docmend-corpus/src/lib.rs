//! Document enumeration and image inventory for the docmend tools.
//!
//! This crate provides the two leaf dependencies shared by every tool:
//!
//! - [`markdown_files`]: recursive walk of one or more document roots,
//!   yielding Markdown file paths in deterministic order
//! - [`ImageInventory`]: basename-to-relative-path mapping built from one or
//!   more image asset roots
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docmend_corpus::{ImageInventory, MarkdownExtensions, markdown_files};
//!
//! let docs = markdown_files(&[PathBuf::from("docs")], MarkdownExtensions::Md)?;
//! let inventory = ImageInventory::scan(&[PathBuf::from("static/img")])?;
//! for doc in docs {
//!     println!("{}", doc.display());
//! }
//! ```

mod inventory;
mod walker;

use std::path::PathBuf;

pub use inventory::{IMAGE_EXTENSIONS, ImageInventory};
pub use walker::{MarkdownExtensions, markdown_files};

/// Error from corpus enumeration or inventory scanning.
///
/// All filesystem failures are fail-fast: a single unreadable directory or
/// file aborts the walk with the offending path attached.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Filesystem error while walking a directory tree.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path where the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl CorpusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
