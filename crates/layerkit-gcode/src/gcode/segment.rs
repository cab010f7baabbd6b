//! Layer segmentation

use layerkit_core::constants::LAYER_CHANGE_MARKER;

/// A layer's span within the cleaned lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSpan {
    /// 0-based layer index in discovery order
    pub index: usize,
    /// First line of the layer (its marker, when markers exist)
    pub start: usize,
    /// One past the last line
    pub end: usize,
}

impl LayerSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Check for the layer-change marker, ignoring surrounding whitespace
pub fn is_layer_change(line: &str) -> bool {
    line.trim() == LAYER_CHANGE_MARKER
}

/// Split cleaned lines into layer spans
///
/// Each span runs from one marker up to (not including) the next; the last
/// runs to the end of input. Lines before the first marker belong to no layer.
/// Without any marker, non-empty input becomes a single layer at offset 0.
pub fn segment_layers(lines: &[String]) -> Vec<LayerSpan> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_layer_change(line))
        .map(|(i, _)| i)
        .collect();

    if starts.is_empty() {
        if lines.is_empty() {
            return Vec::new();
        }
        tracing::debug!(lines = lines.len(), "No layer markers; treating input as one layer");
        return vec![LayerSpan {
            index: 0,
            start: 0,
            end: lines.len(),
        }];
    }

    starts
        .iter()
        .enumerate()
        .map(|(index, &start)| LayerSpan {
            index,
            start,
            end: starts.get(index + 1).copied().unwrap_or(lines.len()),
        })
        .collect()
}
