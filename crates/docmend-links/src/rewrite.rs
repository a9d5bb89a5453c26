//! Normalization of image reference syntaxes to the canonical site path.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use docmend_corpus::ImageInventory;

use crate::{basename, stem};

/// Wiki-style embed: `![[name]]`.
fn wiki_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[\[(?P<name>[^\]]+)\]\]").unwrap())
}

/// Bracket image whose target ends in a known image extension.
///
/// Scheme and `/img/` exclusions are applied in the replacement closure;
/// the regex engine has no lookahead.
fn bracket_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"!\[(?P<alt>[^\]]*)\]\((?P<path>[^)]+\.(?:png|jpg|jpeg|svg|gif))\)").unwrap()
    })
}

/// Normalize wiki-style and relative bracket-image references.
///
/// Wiki embeds are resolved by basename: a hit becomes
/// `![<stem>](/img/<relpath>)`, a miss becomes an inline
/// `<!-- TODO missing image <basename> -->` marker. Both count as a change.
///
/// Relative bracket images (not `http(s)://`, not already `/img/`-prefixed)
/// are resolved the same way, keeping the original alt text and falling back
/// to the file stem when the alt is empty. Unresolved relative links are
/// left untouched, without a marker, so the two syntaxes are not
/// double-flagged.
///
/// Returns `None` when nothing changed.
pub fn rewrite_image_links(text: &str, inventory: &ImageInventory) -> Option<String> {
    let mut changed = false;

    let after_wiki = wiki_regex().replace_all(text, |caps: &Captures<'_>| {
        changed = true;
        let name = basename(caps["name"].trim());
        match inventory.canonical_path(name) {
            Some(canonical) => format!("![{}]({canonical})", stem(name)),
            None => {
                tracing::debug!(name, "wiki embed target not in inventory");
                format!("<!-- TODO missing image {name} -->")
            }
        }
    });

    let after_relative = bracket_regex().replace_all(&after_wiki, |caps: &Captures<'_>| {
        let path = &caps["path"];
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("/img/")
        {
            return caps[0].to_owned();
        }
        let Some(canonical) = inventory.canonical_path(basename(path)) else {
            return caps[0].to_owned();
        };
        changed = true;
        let alt = match &caps["alt"] {
            "" => stem(basename(path)),
            alt => alt,
        };
        format!("![{alt}]({canonical})")
    });

    changed.then(|| after_relative.into_owned())
}
