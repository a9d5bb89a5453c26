//! Image link rewriting and auditing for the docmend tools.
//!
//! Two related but deliberately distinct passes over document text:
//!
//! - [`rewrite_image_links`]: normalizes wiki-style embeds (`![[name]]`) and
//!   relative bracket-image references to the canonical `/img/...` site path
//! - [`audit_image_links`]: verifies every bracket-image reference against
//!   the on-disk inventory, repairing resolvable ones and counting the rest
//!
//! The two passes handle unresolvable targets differently on purpose: the
//! rewriter flags missing wiki embeds inline but leaves unresolved relative
//! links untouched, while the auditor counts unresolvable absolute `/img/`
//! references as missing and says nothing about unresolved relative ones.

mod audit;
mod rewrite;

pub use audit::{AuditOutcome, audit_image_links};
pub use rewrite::rewrite_image_links;

/// Stem of a link target's basename (filename without its last extension).
pub(crate) fn stem(basename: &str) -> &str {
    basename.rsplit_once('.').map_or(basename, |(s, _)| s)
}

/// Basename of a link target (final `/`-separated segment).
pub(crate) fn basename(target: &str) -> &str {
    target.rsplit('/').next().unwrap_or(target)
}
