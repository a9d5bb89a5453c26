//! Broken-image auditing against the on-disk inventory.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use docmend_corpus::ImageInventory;

use crate::basename;

/// Any bracket image reference, regardless of target form.
fn image_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[(?P<alt>[^\]]*)\]\((?P<url>[^)]+)\)").unwrap())
}

/// Result of auditing one document.
#[derive(Debug)]
pub struct AuditOutcome {
    /// Rewritten text, or `None` when no link was repaired.
    pub text: Option<String>,
    /// Number of links rewritten to a resolved inventory path.
    pub fixed: usize,
    /// Number of absolute `/img/` links with no on-disk file and no
    /// inventory match; these are left as-is.
    pub missing: usize,
}

/// Audit every bracket-image reference in a document.
///
/// - `http(s)://` targets are ignored.
/// - Absolute `/img/<rel>` targets existing on disk are untouched. Absent
///   ones are resolved by basename and rewritten when possible, otherwise
///   counted as missing and left as-is.
/// - Relative targets are resolved by basename and rewritten to the
///   canonical absolute form when possible; unresolved ones are left as-is
///   and not counted as missing. The asymmetry with the absolute case is
///   intentional: a relative link may point at a document-adjacent file the
///   inventory does not cover.
pub fn audit_image_links(text: &str, inventory: &ImageInventory) -> AuditOutcome {
    let mut fixed = 0;
    let mut missing = 0;

    let rewritten = image_regex().replace_all(text, |caps: &Captures<'_>| {
        let url = &caps["url"];
        match resolve(url, inventory) {
            Resolution::Keep => caps[0].to_owned(),
            Resolution::Missing => {
                tracing::debug!(url, "image reference has no on-disk match");
                missing += 1;
                caps[0].to_owned()
            }
            Resolution::Rewrite(new_url) => {
                fixed += 1;
                format!("![{}]({new_url})", &caps["alt"])
            }
        }
    });

    AuditOutcome {
        text: (fixed > 0).then(|| rewritten.into_owned()),
        fixed,
        missing,
    }
}

enum Resolution {
    Keep,
    Missing,
    Rewrite(String),
}

fn resolve(url: &str, inventory: &ImageInventory) -> Resolution {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Resolution::Keep;
    }

    if let Some(rel) = url.strip_prefix("/img/") {
        if inventory.exists(rel) {
            return Resolution::Keep;
        }
        return match inventory.canonical_path(basename(rel)) {
            Some(canonical) => Resolution::Rewrite(canonical),
            None => Resolution::Missing,
        };
    }

    // Relative target: attempt the canonical rewrite, stay silent otherwise
    match inventory.canonical_path(basename(url)) {
        Some(canonical) => Resolution::Rewrite(canonical),
        None => Resolution::Keep,
    }
}
