//! Configuration file handling for CLI runs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use layerkit_settings::Config;

/// Load the configuration for one run
///
/// Returns the path recent files are written back to. That is the explicit
/// `--config` file, or the platform file when one already exists. A run
/// that falls back to built-in defaults never creates a config file.
pub fn load_config(
    explicit: Option<&Path>,
    platform_path: Option<PathBuf>,
) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        return Ok((config, Some(path.to_path_buf())));
    }

    let Some(path) = platform_path else {
        return Ok((Config::default(), None));
    };
    let config = Config::load_or_default(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    Ok((config, path.exists().then_some(path)))
}

/// Record `input` in the recent files list and save it to `config_path`
pub fn remember(config: &mut Config, config_path: Option<&Path>, input: &Path) {
    let Some(config_path) = config_path else {
        return;
    };
    let input = input.canonicalize().unwrap_or_else(|_| input.to_path_buf());
    config.add_recent_file(input);
    if let Err(e) = config.save_to_file(config_path) {
        tracing::warn!(path = %config_path.display(), "Could not update recent files: {}", e);
    }
}
