//! Error handling for LayerKit
//!
//! Two families of failure are kept apart:
//! - I/O errors: the file could not be read or written. Fatal to that operation.
//! - Structural inconsistencies: a layer or item index that does not exist.
//!   Callers that assemble output skip these instead of aborting.
//!
//! Malformed numeric parameters never surface here; the parser drops the
//! offending word and keeps going.

use std::path::PathBuf;
use thiserror::Error;

/// Structural inconsistency in a document or layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// No layer block exists at this document index
    #[error("Layer {index} not found (layer count: {count})")]
    LayerNotFound {
        /// The requested layer index.
        index: usize,
        /// Number of layers in the document.
        count: usize,
    },

    /// Item position outside a layer's item list
    #[error("Item {index} out of range (items: {len})")]
    ItemOutOfRange {
        /// The requested item index.
        index: usize,
        /// Length of the item list.
        len: usize,
    },

    /// The item at this position is an opaque line, not a motion record
    #[error("Item {index} is not a motion record")]
    NotAMove {
        /// The item index.
        index: usize,
    },

    /// Motion-record ordinal outside the layer's motion records
    #[error("Move {ordinal} out of range (moves: {count})")]
    MoveOutOfRange {
        /// The requested move ordinal.
        ordinal: usize,
        /// Number of motion records in the layer.
        count: usize,
    },
}

/// Main error type for LayerKit
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened or read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// The path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Standard I/O error without path context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural inconsistency
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check whether the file itself could not be loaded or saved
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Read { .. } | Error::Write { .. } | Error::Io(_))
    }

    /// Check whether this is a structural inconsistency
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::Structure(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
