//! Numbered candidate image discovery for a document's diagram blocks.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::DiagramError;

/// Regex extracting the trailing numeric suffix from a candidate filename.
fn suffix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_(\d+)\.svg$").unwrap())
}

/// List candidate diagram images for a document base name, in consumption
/// order.
///
/// Candidates are files in `diagrams_dir` named
/// `<base>_<locale>_diagram_<N>.svg`, sorted ascending by the numeric suffix
/// `N`. Filenames matching the prefix but lacking a numeric suffix sort as 0.
/// The set is computed once per document, then consumed left-to-right, one
/// entry per Mermaid block.
///
/// A missing diagrams directory yields an empty set rather than an error.
pub fn diagram_candidates(
    diagrams_dir: &Path,
    base: &str,
    locale: &str,
) -> Result<Vec<String>, DiagramError> {
    if !diagrams_dir.exists() {
        return Ok(Vec::new());
    }

    let prefix = format!("{base}_{locale}_diagram_");
    let mut candidates: Vec<(u64, String)> = Vec::new();

    let entries = std::fs::read_dir(diagrams_dir).map_err(|e| DiagramError::Io {
        path: diagrams_dir.to_path_buf(),
        source: e,
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| DiagramError::Io {
            path: diagrams_dir.to_path_buf(),
            source: e,
        })?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !name.starts_with(&prefix) || !name.ends_with(".svg") {
            continue;
        }
        let number = suffix_regex()
            .captures(&name)
            .and_then(|caps| caps[1].parse::<u64>().ok())
            .unwrap_or(0);
        candidates.push((number, name));
    }

    candidates.sort();
    tracing::debug!(base, count = candidates.len(), "candidate images found");
    Ok(candidates.into_iter().map(|(_, name)| name).collect())
}
