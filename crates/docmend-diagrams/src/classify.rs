//! Line classification for the block-fence scanner.
//!
//! Each input line is mapped to a single tagged variant, composed by the
//! scanner instead of ad-hoc regex ordering. Comment-token detection is a
//! deliberate single-token-per-line heuristic, not a full HTML parser: a
//! line carrying both `<!--` and `-->` changes no state, and multi-line
//! comments opened mid-line are tracked only by this rule. The heuristic is
//! load-bearing for output compatibility with already-processed trees.

/// Classification of a single Markdown line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineClass {
    /// Contains `<!--` without `-->`.
    CommentOpen,
    /// Contains `-->` without `<!--`.
    CommentClose,
    /// A Mermaid fence-open line: ```` ``` ```` at column 0, optional
    /// whitespace, the word `mermaid`, optional trailing whitespace.
    MermaidOpen,
    /// A bare closing fence: ```` ``` ```` at column 0 followed only by
    /// optional whitespace.
    FenceClose,
    /// Anything else.
    Plain,
}

/// Classify a single line.
pub(crate) fn classify(line: &str) -> LineClass {
    let has_open = line.contains("<!--");
    let has_close = line.contains("-->");
    if has_open && !has_close {
        return LineClass::CommentOpen;
    }
    if has_close && !has_open {
        return LineClass::CommentClose;
    }

    if let Some(rest) = line.strip_prefix("```") {
        let rest = rest.trim();
        if rest == "mermaid" {
            return LineClass::MermaidOpen;
        }
        if rest.is_empty() {
            return LineClass::FenceClose;
        }
    }

    LineClass::Plain
}

/// Whether a line is a bare closing fence.
///
/// Used while scanning forward for a block's end, where comment tokens and
/// nested fence-open syntax inside the block must not be interpreted.
pub(crate) fn is_bare_fence(line: &str) -> bool {
    line.strip_prefix("```")
        .is_some_and(|rest| rest.trim().is_empty())
}
