//! Image inventory built from on-disk asset trees.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::CorpusError;

/// Image file extensions recognized by the inventory (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg", "gif"];

/// Basename-to-path mapping over one or more image asset roots.
///
/// Built fresh on every invocation. Paths are stored relative to the root
/// that contains them, using `/` separators so they can be appended directly
/// to the canonical `/img/` site prefix. If the same basename exists in more
/// than one place, the last one scanned wins.
#[derive(Debug, Default)]
pub struct ImageInventory {
    /// Basename -> root-relative path (e.g. `"diagrams/cache_ru_diagram_1.svg"`).
    entries: HashMap<String, String>,
    /// Asset roots, kept for on-disk existence checks.
    roots: Vec<PathBuf>,
}

impl ImageInventory {
    /// Scan the given asset roots for image files.
    ///
    /// Roots that do not exist are skipped; other filesystem failures abort
    /// the scan.
    pub fn scan(roots: &[PathBuf]) -> Result<Self, CorpusError> {
        let mut entries = HashMap::new();
        for root in roots {
            if !root.exists() {
                tracing::debug!(root = %root.display(), "image root missing, skipping");
                continue;
            }
            collect_images(root, root, &mut entries)?;
        }
        tracing::debug!(count = entries.len(), "image inventory built");
        Ok(Self {
            entries,
            roots: roots.to_vec(),
        })
    }

    /// Number of distinct basenames in the inventory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the root-relative path for an image basename.
    pub fn relative_path(&self, basename: &str) -> Option<&str> {
        self.entries.get(basename).map(String::as_str)
    }

    /// Look up the canonical site path (`/img/<relpath>`) for a basename.
    pub fn canonical_path(&self, basename: &str) -> Option<String> {
        self.relative_path(basename).map(|rel| format!("/img/{rel}"))
    }

    /// Check whether a root-relative path exists on disk under any asset root.
    pub fn exists(&self, relative: &str) -> bool {
        self.roots.iter().any(|root| root.join(relative).is_file())
    }
}

/// Whether a path has a recognized image extension (case-insensitive).
pub(crate) fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
}

fn collect_images(
    root: &Path,
    dir: &Path,
    entries: &mut HashMap<String, String>,
) -> Result<(), CorpusError> {
    let read_dir = fs::read_dir(dir).map_err(|e| CorpusError::io(dir, e))?;

    // Sort entries so "last writer wins" is deterministic across runs
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| CorpusError::io(dir, e))?;
        paths.push(entry.path());
    }
    paths.sort();

    for path in paths {
        if path.is_dir() {
            collect_images(root, &path, entries)?;
        } else if is_image_path(&path) {
            let Some(basename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if let Some(rel) = relative_str(root, &path) {
                entries.insert(basename.to_owned(), rel);
            }
        }
    }
    Ok(())
}

/// Root-relative path with `/` separators, or `None` for non-UTF-8 paths.
fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_scan_empty_root() {
        let temp_dir = create_test_dir();

        let inventory = ImageInventory::scan(&[temp_dir.path().to_path_buf()]).unwrap();

        assert!(inventory.is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let inventory = ImageInventory::scan(&[PathBuf::from("/nonexistent/img")]).unwrap();

        assert!(inventory.is_empty());
    }

    #[test]
    fn test_scan_maps_basename_to_relative_path() {
        let temp_dir = create_test_dir();
        let diagrams = temp_dir.path().join("diagrams");
        fs::create_dir(&diagrams).unwrap();
        fs::write(temp_dir.path().join("logo.png"), b"png").unwrap();
        fs::write(diagrams.join("cache_ru_diagram_1.svg"), b"svg").unwrap();

        let inventory = ImageInventory::scan(&[temp_dir.path().to_path_buf()]).unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.relative_path("logo.png"), Some("logo.png"));
        assert_eq!(
            inventory.relative_path("cache_ru_diagram_1.svg"),
            Some("diagrams/cache_ru_diagram_1.svg")
        );
    }

    #[test]
    fn test_scan_ignores_non_image_files() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("readme.txt"), b"text").unwrap();
        fs::write(temp_dir.path().join("photo.JPG"), b"jpg").unwrap();

        let inventory = ImageInventory::scan(&[temp_dir.path().to_path_buf()]).unwrap();

        // Extension matching is case-insensitive
        assert_eq!(inventory.len(), 1);
        assert!(inventory.relative_path("photo.JPG").is_some());
    }

    #[test]
    fn test_duplicate_basename_last_writer_wins() {
        let temp_dir = create_test_dir();
        let a = temp_dir.path().join("a");
        let b = temp_dir.path().join("b");
        fs::create_dir(&a).unwrap();
        fs::create_dir(&b).unwrap();
        fs::write(a.join("shared.png"), b"first").unwrap();
        fs::write(b.join("shared.png"), b"second").unwrap();

        let inventory = ImageInventory::scan(&[temp_dir.path().to_path_buf()]).unwrap();

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.relative_path("shared.png"), Some("b/shared.png"));
    }

    #[test]
    fn test_canonical_path() {
        let temp_dir = create_test_dir();
        let sub = temp_dir.path().join("icons");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("gear.svg"), b"svg").unwrap();

        let inventory = ImageInventory::scan(&[temp_dir.path().to_path_buf()]).unwrap();

        assert_eq!(
            inventory.canonical_path("gear.svg"),
            Some("/img/icons/gear.svg".to_owned())
        );
        assert_eq!(inventory.canonical_path("absent.svg"), None);
    }

    #[test]
    fn test_exists_checks_all_roots() {
        let temp_dir = create_test_dir();
        let root_a = temp_dir.path().join("a");
        let root_b = temp_dir.path().join("b");
        fs::create_dir(&root_a).unwrap();
        fs::create_dir(&root_b).unwrap();
        fs::write(root_b.join("pic.png"), b"png").unwrap();

        let inventory = ImageInventory::scan(&[root_a, root_b]).unwrap();

        assert!(inventory.exists("pic.png"));
        assert!(!inventory.exists("gone.png"));
    }
}
