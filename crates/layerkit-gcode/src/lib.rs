//! # LayerKit G-code
//!
//! Turns slicer output into a layer-indexed [`Document`] and back.
//!
//! - [`strip_thumbnails`] removes embedded preview images
//! - [`segment_layers`] splits the cleaned lines at `;LAYER_CHANGE`
//! - [`GcodeParser`] classifies each layer's lines into motion records and opaque lines
//! - [`layer_to_lines`] and [`assemble_document`] write a document back out,
//!   re-serializing only the layers marked edited
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use layerkit_gcode::{assemble_document, parse_document};
//!
//! let text = ";LAYER_CHANGE\nG1 X10 Y10 Z0.2 E5\nG1 X20 Y10 E6\n";
//! let doc = parse_document(text);
//! assert_eq!(doc.layer_count(), 1);
//! assert_eq!(assemble_document(&doc, &BTreeSet::new()), text);
//! ```

pub mod gcode;
pub mod utils;

pub use gcode::{
    assemble_document, layer_to_lines, parse_document, segment_layers, split_lines,
    strip_thumbnails, CarriedState, GcodeParser, LayerSpan, MotionCommand, MotionWords,
};
pub use utils::{load_document, save_document, GcodeFileReader};

pub use layerkit_core::{Document, Layer, LayerItem, MotionClass, Move};
