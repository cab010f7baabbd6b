//! Replacement item lists waiting to be folded into a document

use std::collections::BTreeMap;

use super::layer::LayerItem;

/// Edited item lists keyed by layer index
///
/// Editors record their working copies here; nothing touches the document
/// until [`crate::Document::apply_pending_edits`] runs at save time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingEdits {
    edits: BTreeMap<usize, Vec<LayerItem>>,
}

impl PendingEdits {
    /// Create an empty set of pending edits
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the edited items for a layer
    pub fn record(&mut self, layer_index: usize, items: Vec<LayerItem>) {
        tracing::debug!(layer = layer_index, items = items.len(), "Recorded layer edits");
        self.edits.insert(layer_index, items);
    }

    /// Edited items for a layer, if any were recorded
    pub fn get(&self, layer_index: usize) -> Option<&[LayerItem]> {
        self.edits.get(&layer_index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

impl IntoIterator for PendingEdits {
    type Item = (usize, Vec<LayerItem>);
    type IntoIter = std::collections::btree_map::IntoIter<usize, Vec<LayerItem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.into_iter()
    }
}
