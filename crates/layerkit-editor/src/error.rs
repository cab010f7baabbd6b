//! Error types for the layer editor crate.

use layerkit_core::StructureError;
use thiserror::Error;

/// Errors that can occur during editor operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// A session is already running on this layer.
    #[error("An edit session is already active on layer {layer}")]
    SessionAlreadyActive { layer: usize },

    /// The operation needs an active session.
    #[error("No active edit session")]
    NoActiveSession,

    /// The item cannot anchor a session: it is an opaque line, or a
    /// motion record without an XY position.
    #[error("Item {index} is not a plottable motion record")]
    NotAMove { index: usize },

    /// Motion-record ordinal outside the layer.
    #[error("Move {ordinal} out of range (moves: {count})")]
    MoveOutOfRange { ordinal: usize, count: usize },

    /// A direction name was not recognized.
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    /// Layer or item list does not have the requested shape.
    #[error(transparent)]
    Structure(#[from] StructureError),
}

impl EditorError {
    /// Lift a structural error into the matching editor variant
    pub fn from_structure(err: StructureError) -> Self {
        match err {
            StructureError::NotAMove { index } => Self::NotAMove { index },
            StructureError::MoveOutOfRange { ordinal, count } => {
                Self::MoveOutOfRange { ordinal, count }
            }
            other => Self::Structure(other),
        }
    }
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_error_display() {
        let err = EditorError::SessionAlreadyActive { layer: 3 };
        assert_eq!(err.to_string(), "An edit session is already active on layer 3");

        let err = EditorError::UnknownDirection("sideways".to_string());
        assert_eq!(err.to_string(), "Unknown direction: sideways");

        let err = EditorError::MoveOutOfRange {
            ordinal: 9,
            count: 2,
        };
        assert_eq!(err.to_string(), "Move 9 out of range (moves: 2)");
    }

    #[test]
    fn test_structure_error_conversion() {
        let err = EditorError::from_structure(StructureError::NotAMove { index: 4 });
        assert_eq!(err, EditorError::NotAMove { index: 4 });

        let err: EditorError = StructureError::ItemOutOfRange { index: 7, len: 3 }.into();
        assert_eq!(err.to_string(), "Item 7 out of range (items: 3)");
    }
}
