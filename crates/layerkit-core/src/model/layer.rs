//! Layer blocks and their editable item sequence

use super::motion::{Move, MoveView};
use crate::error::StructureError;

/// One entry of a layer's editable sequence
#[derive(Debug, Clone, PartialEq)]
pub enum LayerItem {
    /// Structured motion record
    Move(Move),
    /// Opaque line, stored verbatim including its terminator
    Line(String),
}

impl LayerItem {
    /// Borrow the motion record, if this is one
    pub fn as_move(&self) -> Option<&Move> {
        match self {
            Self::Move(mv) => Some(mv),
            Self::Line(_) => None,
        }
    }

    /// Borrow the opaque line, if this is one
    pub fn as_line(&self) -> Option<&str> {
        match self {
            Self::Line(line) => Some(line),
            Self::Move(_) => None,
        }
    }

    /// Check if this is a motion record
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move(_))
    }
}

impl From<Move> for LayerItem {
    fn from(mv: Move) -> Self {
        Self::Move(mv)
    }
}

impl From<String> for LayerItem {
    fn from(line: String) -> Self {
        Self::Line(line)
    }
}

impl From<&str> for LayerItem {
    fn from(line: &str) -> Self {
        Self::Line(line.to_string())
    }
}

/// Item position of the `ordinal`-th motion record in `items`
pub fn move_item_index(items: &[LayerItem], ordinal: usize) -> Result<usize, StructureError> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_move())
        .nth(ordinal)
        .map(|(index, _)| index)
        .ok_or_else(|| StructureError::MoveOutOfRange {
            ordinal,
            count: items.iter().filter(|item| item.is_move()).count(),
        })
}

/// A layer block: the lines between two layer-change markers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layer {
    /// 0-based position among all layers of the document
    pub index: usize,
    /// Verbatim input lines, including the leading marker when present
    pub original_lines: Vec<String>,
    /// Editable sequence; only serialized when the layer is marked edited
    pub items: Vec<LayerItem>,
}

impl Layer {
    /// Create a layer with no items yet
    pub fn new(index: usize, original_lines: Vec<String>) -> Self {
        Self {
            index,
            original_lines,
            items: Vec::new(),
        }
    }

    /// Iterate over motion records in item order
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.items.iter().filter_map(LayerItem::as_move)
    }

    /// Number of motion records
    pub fn move_count(&self) -> usize {
        self.moves().count()
    }

    /// Flat views of every motion record, for renderers
    pub fn move_views(&self) -> Vec<MoveView> {
        self.moves().map(Move::to_view).collect()
    }

    /// Item position of the `ordinal`-th motion record
    pub fn item_index_of_move(&self, ordinal: usize) -> Result<usize, StructureError> {
        move_item_index(&self.items, ordinal)
    }

    /// Remove the `ordinal`-th motion record and return it
    pub fn remove_move(&mut self, ordinal: usize) -> Result<Move, StructureError> {
        let index = self.item_index_of_move(ordinal)?;
        match self.items.remove(index) {
            LayerItem::Move(mv) => Ok(mv),
            LayerItem::Line(_) => Err(StructureError::NotAMove { index }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layer() -> Layer {
        let mut layer = Layer::new(0, Vec::new());
        layer.items = vec![
            LayerItem::from(";LAYER_CHANGE\n"),
            Move::at(0.0, 0.0).into(),
            LayerItem::from(";TYPE:Perimeter\n"),
            Move::at(1.0, 0.0).into(),
            Move::at(1.0, 1.0).into(),
        ];
        layer
    }

    #[test]
    fn test_move_ordinal_mapping() {
        let layer = sample_layer();
        assert_eq!(layer.move_count(), 3);
        assert_eq!(layer.item_index_of_move(0), Ok(1));
        assert_eq!(layer.item_index_of_move(1), Ok(3));
        assert_eq!(layer.item_index_of_move(2), Ok(4));
        assert_eq!(
            layer.item_index_of_move(3),
            Err(StructureError::MoveOutOfRange {
                ordinal: 3,
                count: 3
            })
        );
    }

    #[test]
    fn test_remove_move() {
        let mut layer = sample_layer();
        let removed = layer.remove_move(1).expect("move exists");
        assert_eq!(removed.x, Some(1.0));
        assert_eq!(removed.y, Some(0.0));
        assert_eq!(layer.move_count(), 2);
        assert_eq!(layer.items.len(), 4);
    }

    #[test]
    fn test_move_item_index_on_working_copy() {
        let mut items = sample_layer().items;
        items.remove(1);
        assert_eq!(move_item_index(&items, 0), Ok(2));
        assert_eq!(
            move_item_index(&items[..1], 0),
            Err(StructureError::MoveOutOfRange {
                ordinal: 0,
                count: 0
            })
        );
    }
}
