//! # LayerKit
//!
//! Layer-indexed editing of 3D-printer G-code with byte-exact round-tripping
//! of every layer that was not touched.
//!
//! ## Architecture
//!
//! LayerKit is organized as a workspace with multiple crates:
//!
//! 1. **layerkit-core** - Document, layer and motion-record model, error types
//! 2. **layerkit-gcode** - Thumbnail stripping, layer segmentation, classification, serialization
//! 3. **layerkit-editor** - Edit sessions, direction pad, per-layer editors
//! 4. **layerkit-settings** - Persistent configuration
//! 5. **layerkit** - Command-line front end that integrates all crates

pub mod cli;

pub use layerkit_core::{
    Document, Error, Layer, LayerItem, MotionClass, Move, MoveView, PendingEdits, Result,
    StructureError,
};

pub use layerkit_gcode::{
    assemble_document, layer_to_lines, load_document, parse_document, save_document,
    strip_thumbnails, GcodeFileReader, GcodeParser,
};

pub use layerkit_editor::{
    Delta, Direction, EditSession, EditorConfig, EditorError, EditorWorkspace, LayerEditor,
    MarkerStyle, SessionStep, ViewerInstance,
};

pub use layerkit_settings::{Config, LogLevel, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging on stderr with:
/// - RUST_LOG environment variable support, falling back to `default_level`
/// - Pretty formatting, or one JSON object per event when `json` is set
pub fn init_logging(default_level: LogLevel, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
