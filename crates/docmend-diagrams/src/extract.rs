//! The block-fence scanner: Mermaid extraction and archival.

use crate::classify::{LineClass, classify, is_bare_fence};
use crate::consts::{ARCHIVE_FENCE_OPEN, ARCHIVE_LABEL, MISSING_IMAGE_MARKER, SITE_DIAGRAMS_PREFIX};

/// Result of a successful extraction pass over one document.
#[derive(Debug)]
pub struct Extraction {
    /// The rewritten document text, always ending in a newline.
    pub text: String,
    /// Number of blocks replaced by an image reference.
    pub replaced: usize,
    /// Number of blocks archived with a missing-image marker instead.
    pub missing: usize,
}

/// Replace Mermaid blocks with image references, archiving the original
/// source inside an HTML comment.
///
/// `images` is the document's candidate set in consumption order (see
/// [`diagram_candidates`](crate::diagram_candidates)); each transformed block
/// consumes one entry, and blocks beyond the last entry receive
/// [`MISSING_IMAGE_MARKER`] instead of an image reference.
///
/// Blocks are recognized only outside HTML-comment regions, so a second pass
/// over already-processed output finds nothing to do. An unterminated block
/// (fence-open with no closing fence before end of file) is emitted
/// unchanged and the scan continues on the next line.
///
/// Returns `None` when no block was transformed, in which case the file must
/// be left byte-for-byte untouched.
pub fn archive_mermaid_blocks(text: &str, images: &[String]) -> Option<Extraction> {
    let lines: Vec<&str> = text.lines().collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut in_comment = false;
    let mut image_index = 0;
    let mut missing = 0;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        match classify(line) {
            LineClass::CommentOpen => in_comment = true,
            LineClass::CommentClose => in_comment = false,
            LineClass::MermaidOpen if !in_comment => {
                // Find the block's closing fence
                let Some(end) = (i + 1..lines.len()).find(|&j| is_bare_fence(lines[j])) else {
                    // Malformed block: emit the opening line and move on,
                    // without consuming the rest of the file
                    out.push(line.to_owned());
                    i += 1;
                    continue;
                };

                if let Some(image) = images.get(image_index) {
                    image_index += 1;
                    out.push(format!("![Diagram]({SITE_DIAGRAMS_PREFIX}/{image})"));
                } else {
                    missing += 1;
                    out.push(MISSING_IMAGE_MARKER.to_owned());
                }

                out.push("<!--".to_owned());
                out.push(ARCHIVE_LABEL.to_owned());
                out.push(ARCHIVE_FENCE_OPEN.to_owned());
                for interior in &lines[i + 1..end] {
                    out.push((*interior).to_owned());
                }
                out.push("```".to_owned());
                out.push("-->".to_owned());

                i = end + 1;
                continue;
            }
            LineClass::MermaidOpen | LineClass::FenceClose | LineClass::Plain => {}
        }

        out.push(line.to_owned());
        i += 1;
    }

    if image_index == 0 && missing == 0 {
        return None;
    }

    let mut text = out.join("\n");
    text.push('\n');
    Some(Extraction {
        text,
        replaced: image_index,
        missing,
    })
}
