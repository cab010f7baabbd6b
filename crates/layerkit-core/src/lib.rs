//! # LayerKit Core
//!
//! Core types for LayerKit.
//! Provides the layer-indexed data model, the fixed G-code grammar tokens,
//! and the error taxonomy shared by the parser, serializer, and editor crates.

pub mod constants;
pub mod error;
pub mod model;

pub use error::{Error, Result, StructureError};

pub use model::{
    move_item_index, Document, Layer, LayerItem, MotionClass, Move, MoveView, PendingEdits,
};
