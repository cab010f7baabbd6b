//! # LayerKit Settings
//!
//! Persistent configuration: editor step and lift, logging defaults, and
//! the recent files list. Stored as TOML or JSON.

pub mod config;
pub mod error;

pub use config::{
    Config, EditorSettings, FileSettings, LogLevel, LoggingSettings, APP_DIR_NAME,
    CONFIG_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};
