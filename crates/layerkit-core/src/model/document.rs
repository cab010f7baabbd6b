//! Whole-file container

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::layer::Layer;
use super::pending::PendingEdits;

/// A parsed G-code file
///
/// `cleaned_lines` is the backbone used when saving: every line outside a
/// layer's original span (header, footer, inter-layer content) is copied from
/// it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Source path, when loaded from disk
    pub path: Option<PathBuf>,
    /// Lines as read, terminators included
    pub raw_lines: Vec<String>,
    /// Lines after thumbnail removal
    pub cleaned_lines: Vec<String>,
    /// Layer blocks in file order
    pub layers: Vec<Layer>,
    /// Start of each layer within `cleaned_lines`, parallel to `layers`
    pub layer_offsets: Vec<usize>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of layer blocks
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layer at a document index
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Mutable layer at a document index
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// Cleaned lines that precede the first layer
    pub fn header_lines(&self) -> &[String] {
        let end = self
            .layer_offsets
            .first()
            .copied()
            .unwrap_or(self.cleaned_lines.len());
        &self.cleaned_lines[..end.min(self.cleaned_lines.len())]
    }

    /// Number of thumbnail lines removed on load
    pub fn stripped_line_count(&self) -> usize {
        self.raw_lines.len().saturating_sub(self.cleaned_lines.len())
    }

    /// Fold pending edits into the layers they name
    ///
    /// Returns the indices that were replaced; these are the layers to
    /// serialize from `items` when saving. Indices outside the document are
    /// ignored.
    pub fn apply_pending_edits(&mut self, edits: PendingEdits) -> BTreeSet<usize> {
        let mut applied = BTreeSet::new();
        let count = self.layer_count();

        for (index, items) in edits {
            match self.layers.get_mut(index) {
                Some(layer) => {
                    layer.items = items;
                    applied.insert(index);
                }
                None => {
                    tracing::warn!(
                        layer = index,
                        layer_count = count,
                        "Ignoring edits for a layer that does not exist"
                    );
                }
            }
        }

        applied
    }
}
