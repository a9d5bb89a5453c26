//! Markup escaping inside archived Mermaid comment blocks.

use crate::consts::{ARCHIVE_FENCE_OPEN, ARCHIVE_LABEL};

/// Escape stray markup characters inside archived comment blocks.
///
/// An archived block is recognized by the label line `Original Mermaid
/// code:` immediately followed by the `` ``` mermaid `` fence (both matched
/// after trimming). Every interior line up to the closing fence has `<`
/// replaced by `&lt;`, with the `<br>` break tag normalized to its
/// self-closing entity form `&lt;br/>`. Lines outside archived blocks are
/// copied verbatim.
///
/// Returns `None` when no line changed, in which case the file must be left
/// untouched.
pub fn sanitize_archived_blocks(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut changed = false;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        out.push(line.to_owned());
        i += 1;

        let at_block_start = line.trim() == ARCHIVE_LABEL
            && lines.get(i).is_some_and(|next| next.trim() == ARCHIVE_FENCE_OPEN);
        if !at_block_start {
            continue;
        }

        out.push(lines[i].to_owned());
        i += 1;

        // Escape until the closing fence; the trailing `-->` stays as-is
        while i < lines.len() && lines[i].trim() != "```" {
            let sanitized = sanitize_line(lines[i]);
            if sanitized != lines[i] {
                changed = true;
            }
            out.push(sanitized);
            i += 1;
        }
        if i < lines.len() {
            out.push(lines[i].to_owned());
            i += 1;
        }
    }

    if !changed {
        return None;
    }

    let mut text = out.join("\n");
    text.push('\n');
    Some(text)
}

fn sanitize_line(line: &str) -> String {
    line.replace('<', "&lt;").replace("&lt;br>", "&lt;br/>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BLOCK: &str = "<!--\n\
                         Original Mermaid code:\n\
                         ``` mermaid\n\
                         A[Cache<br>Layer]\n\
                         ```\n\
                         -->\n";

    #[test]
    fn test_escapes_inside_archived_block() {
        let result = sanitize_archived_blocks(BLOCK).unwrap();

        assert!(result.contains("A[Cache&lt;br/>Layer]"));
    }

    #[test]
    fn test_br_normalized_to_self_closing() {
        let text = "Original Mermaid code:\n``` mermaid\n<br>\n```\n";

        let result = sanitize_archived_blocks(text).unwrap();

        assert!(result.contains("\n&lt;br/>\n"));
    }

    #[test]
    fn test_line_without_markup_unchanged() {
        let text = "Original Mermaid code:\n``` mermaid\ngraph TD\n```\n";

        assert!(sanitize_archived_blocks(text).is_none());
    }

    #[test]
    fn test_markup_outside_blocks_untouched() {
        let text = "Some <b>bold</b> text.\n\n<br>\n";

        assert!(sanitize_archived_blocks(text).is_none());
    }

    #[test]
    fn test_label_without_fence_is_not_a_block() {
        let text = "Original Mermaid code:\nnot a fence\n<br>\n";

        assert!(sanitize_archived_blocks(text).is_none());
    }

    #[test]
    fn test_only_block_interior_rewritten() {
        let text = "Before <tag>.\n\
                    Original Mermaid code:\n\
                    ``` mermaid\n\
                    a --> b<br>\n\
                    ```\n\
                    After <tag>.\n";

        let result = sanitize_archived_blocks(text).unwrap();

        assert_eq!(
            result,
            "Before <tag>.\n\
             Original Mermaid code:\n\
             ``` mermaid\n\
             a --> b&lt;br/>\n\
             ```\n\
             After <tag>.\n"
        );
    }

    #[test]
    fn test_already_sanitized_is_idempotent() {
        let text = "Original Mermaid code:\n``` mermaid\nA[Cache&lt;br/>Layer]\n```\n";

        assert!(sanitize_archived_blocks(text).is_none());
    }

    #[test]
    fn test_unterminated_block_sanitized_to_end() {
        let text = "Original Mermaid code:\n``` mermaid\n<br>\nmore <x>\n";

        let result = sanitize_archived_blocks(text).unwrap();

        assert!(result.contains("&lt;br/>"));
        assert!(result.contains("more &lt;x>"));
    }
}
