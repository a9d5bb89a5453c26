//! CLI command implementations.

pub(crate) mod extract_diagrams;
pub(crate) mod fix_links;
pub(crate) mod sanitize;
pub(crate) mod verify_images;

use std::path::PathBuf;

use docmend_config::Config;

pub(crate) use extract_diagrams::ExtractDiagramsArgs;
pub(crate) use fix_links::FixLinksArgs;
pub(crate) use sanitize::SanitizeArgs;
pub(crate) use verify_images::VerifyImagesArgs;

/// Document roots to scan: CLI overrides when given, config values otherwise.
fn docs_roots(config: &Config, overrides: &[PathBuf]) -> Vec<PathBuf> {
    if overrides.is_empty() {
        config.docs.roots.clone()
    } else {
        overrides.to_vec()
    }
}

/// Image roots to scan: CLI overrides when given, config values otherwise.
fn image_roots(config: &Config, overrides: &[PathBuf]) -> Vec<PathBuf> {
    if overrides.is_empty() {
        config.images.roots.clone()
    } else {
        overrides.to_vec()
    }
}
