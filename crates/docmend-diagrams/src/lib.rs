//! Mermaid diagram block extraction and archived-comment sanitizing.
//!
//! The extraction pass replaces each Mermaid code block found outside an
//! HTML comment with a pre-rendered image reference, archiving the original
//! block source inside a comment for provenance:
//!
//! ````text
//! ![Diagram](/img/diagrams/page_ru_diagram_1.svg)
//! <!--
//! Original Mermaid code:
//! ``` mermaid
//! graph TD
//!   A --> B
//! ```
//! -->
//! ````
//!
//! The sanitizing pass re-scans archived blocks and escapes `<` characters
//! that would otherwise be interpreted as markup by the site renderer.

mod candidates;
mod classify;
mod consts;
mod extract;
mod sanitize;

use std::path::PathBuf;

pub use candidates::diagram_candidates;
pub use consts::MISSING_IMAGE_MARKER;
pub use extract::{Extraction, archive_mermaid_blocks};
pub use sanitize::sanitize_archived_blocks;

/// Error from candidate image discovery.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    /// Filesystem error while listing the diagrams directory.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path where the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
