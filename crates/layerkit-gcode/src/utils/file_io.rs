//! File I/O
//!
//! Loading reads the whole file in one blocking call and hands the lines to
//! the parser. Saving assembles the full output text and writes it in one call.
//! Both fail only on I/O; odd content never makes them fail.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use layerkit_core::{Document, Error, Result};

use crate::gcode::{assemble_document, split_lines, GcodeParser};

/// Files above this size get a warning before being read into memory (500 MB)
const LARGE_FILE_WARNING: u64 = 500 * 1024 * 1024;

/// G-code file reader
pub struct GcodeFileReader {
    path: PathBuf,
    file_size: u64,
}

impl GcodeFileReader {
    /// Create a new G-code file reader
    ///
    /// # Errors
    /// Returns [`Error::Read`] if the path does not exist or is not a file
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let metadata = fs::metadata(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(Error::Read {
                path,
                source: io::Error::new(io::ErrorKind::InvalidInput, "path is not a file"),
            });
        }

        Ok(Self {
            file_size: metadata.len(),
            path,
        })
    }

    /// Get file size in bytes
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Get file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the entire file as text
    ///
    /// # Errors
    /// Returns [`Error::Read`] if the file cannot be read or is not UTF-8
    pub fn read_all(&self) -> Result<String> {
        if self.file_size > LARGE_FILE_WARNING {
            tracing::warn!(
                "Reading very large file ({}MB) into memory",
                self.file_size / (1024 * 1024)
            );
        }

        fs::read_to_string(&self.path).map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })
    }

    /// Read and parse the file into a document
    pub fn read_document(&self) -> Result<Document> {
        let text = self.read_all()?;
        let mut doc = GcodeParser::new().parse_lines(split_lines(&text));
        doc.path = Some(self.path.clone());
        Ok(doc)
    }
}

/// Load a G-code file: thumbnail-stripped, layer-segmented, classified
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let reader = GcodeFileReader::new(path)?;
    let doc = reader.read_document()?;

    tracing::info!(
        path = %reader.path().display(),
        bytes = reader.file_size(),
        layers = doc.layer_count(),
        stripped = doc.stripped_line_count(),
        "Loaded G-code document"
    );

    Ok(doc)
}

/// Write a document, re-serializing the layers listed in `edited`
pub fn save_document(
    doc: &Document,
    path: impl AsRef<Path>,
    edited: &BTreeSet<usize>,
) -> Result<()> {
    let path = path.as_ref();
    let text = assemble_document(doc, edited);

    fs::write(path, text.as_bytes()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        bytes = text.len(),
        edited = edited.len(),
        "Saved G-code document"
    );

    Ok(())
}
