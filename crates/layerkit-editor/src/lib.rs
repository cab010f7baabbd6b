//! # LayerKit Layer Editor
//!
//! Directional editing of a parsed layer: an edit session walks a cursor
//! away from a chosen motion record, inserting lifted non-depositing
//! records as it goes, and removes them again when stepped straight back.
//!
//! ## Core Components
//!
//! ### Edit Session
//! - **EditSession**: origin, tip, tip coordinates and the applied deltas
//! - Never owns the layer; it is handed the item list for each step
//!
//! ### Undo
//! - **DeltaStack**: applied displacements; an inverse delta pops the last detour record
//!
//! ### Editors
//! - **LayerEditor**: working copy of one layer, at most one active session
//! - **EditorWorkspace**: one editor per layer, committing into `PendingEdits`
//!
//! ## Architecture
//!
//! ```text
//! EditorWorkspace
//!   └── LayerEditor (per layer)
//!         ├── Vec<LayerItem> (working copy)
//!         └── EditSession (optional)
//!               └── DeltaStack
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use layerkit_core::PendingEdits;
//! use layerkit_editor::{Direction, EditorWorkspace};
//! use layerkit_gcode::parse_document;
//!
//! let doc = parse_document(";LAYER_CHANGE\nG1 X10 Y10 Z0.2 E5\nG1 X20 Y10 E6\n");
//! let mut pending = PendingEdits::new();
//! let mut workspace = EditorWorkspace::default();
//!
//! let editor = workspace.open(&doc, &pending, 0).unwrap();
//! editor.begin_session(1).unwrap();
//! editor.nudge(Direction::Up).unwrap();
//! editor.end_session().unwrap();
//!
//! workspace.commit_all(&mut pending);
//! assert_eq!(pending.get(0).map(|items| items.len()), Some(4));
//! ```

pub mod delta_stack;
pub mod direction;
pub mod error;
pub mod layer_editor;
pub mod session;
pub mod view;

pub use delta_stack::{Delta, DeltaStack};
pub use direction::Direction;
pub use error::{EditorError, EditorResult};
pub use layer_editor::{EditorConfig, EditorWorkspace, LayerEditor};
pub use session::{EditSession, SessionStep, TipCoords};
pub use view::{session_color, MarkerStyle, Rgba, ViewerInstance, SESSION_COLORS};
