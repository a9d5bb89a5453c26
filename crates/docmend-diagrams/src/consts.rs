//! Fixed markers shared by extraction and sanitizing.

/// Label line at the top of an archived comment block.
pub(crate) const ARCHIVE_LABEL: &str = "Original Mermaid code:";

/// Fence-open line re-emitted inside an archived comment block.
pub(crate) const ARCHIVE_FENCE_OPEN: &str = "``` mermaid";

/// Marker inserted when a block has no remaining candidate image.
pub const MISSING_IMAGE_MARKER: &str =
    "<!-- TODO: diagram image missing for this Mermaid block -->";

/// Canonical site prefix for pre-rendered diagram images.
pub(crate) const SITE_DIAGRAMS_PREFIX: &str = "/img/diagrams";
