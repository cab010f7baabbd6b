//! Layer-indexed document model
//!
//! A [`Document`] owns its [`Layer`]s, each layer owns its [`LayerItem`]s, and
//! an item is either a structured [`Move`] or an opaque text line.

mod document;
mod layer;
mod motion;
mod pending;

pub use document::Document;
pub use layer::{move_item_index, Layer, LayerItem};
pub use motion::{MotionClass, Move, MoveView};
pub use pending::PendingEdits;
