//! Embedded thumbnail removal
//!
//! Slicers embed base64 preview images between `; thumbnail begin` and
//! `; thumbnail end` comment lines (or the `thumbnail_QOI` variants).

use layerkit_core::constants::{THUMBNAIL_BEGIN_MARKERS, THUMBNAIL_END_MARKERS};

fn is_begin_marker(line: &str) -> bool {
    THUMBNAIL_BEGIN_MARKERS.iter().any(|m| line.contains(m))
}

fn is_end_marker(line: &str) -> bool {
    THUMBNAIL_END_MARKERS.iter().any(|m| line.contains(m))
}

/// Remove every thumbnail block, markers included
///
/// Blocks do not nest. An end marker outside a block is dropped and otherwise
/// ignored. An unterminated block swallows the rest of the input.
pub fn strip_thumbnails(lines: &[String]) -> Vec<String> {
    let mut cleaned = Vec::with_capacity(lines.len());
    let mut skipping = false;
    let mut blocks = 0usize;

    for line in lines {
        if is_begin_marker(line) {
            skipping = true;
            blocks += 1;
            continue;
        }
        if is_end_marker(line) {
            skipping = false;
            continue;
        }
        if !skipping {
            cleaned.push(line.clone());
        }
    }

    if blocks > 0 {
        tracing::debug!(
            blocks,
            removed = lines.len() - cleaned.len(),
            "Stripped thumbnail blocks"
        );
    }

    cleaned
}
