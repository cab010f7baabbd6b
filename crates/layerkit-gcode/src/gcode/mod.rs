//! G-code layer engine
//!
//! This module provides:
//! - Thumbnail stripping
//! - Layer segmentation
//! - Word tokenizing for motion commands
//! - Line classification with carried coordinate state
//! - Layer and document serialization

pub mod parser;
pub mod segment;
pub mod serializer;
pub mod thumbnails;
pub mod words;

pub use parser::*;
pub use segment::*;
pub use serializer::*;
pub use thumbnails::*;
pub use words::*;
