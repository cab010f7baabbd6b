//! File boundary helpers

pub mod file_io;

pub use file_io::{load_document, save_document, GcodeFileReader};
