//! CLI Module
//!
//! Command-line interface for inspecting and editing sliced G-code.

pub mod commands;
pub mod settings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LayerKit - layer-indexed G-code inspection and editing
#[derive(Parser, Debug)]
#[command(name = "layerkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (.toml or .json); defaults to the platform config directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a file: line counts, thumbnails, layers, motion records
    #[command(name = "info")]
    Info {
        /// G-code file
        path: PathBuf,
    },

    /// List layers with their offsets and motion-record counts
    #[command(name = "layers")]
    Layers {
        /// G-code file
        path: PathBuf,
    },

    /// Print the motion records of one layer
    #[command(name = "show")]
    Show {
        /// G-code file
        path: PathBuf,

        /// Layer index (0-based)
        #[arg(short, long)]
        layer: usize,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the file with thumbnail blocks removed
    #[command(name = "strip")]
    Strip {
        /// G-code file
        path: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Delete one motion record from a layer and save
    #[command(name = "delete-move")]
    DeleteMove {
        /// G-code file
        path: PathBuf,

        /// Layer index (0-based)
        #[arg(short, long)]
        layer: usize,

        /// Motion-record ordinal within the layer (0-based)
        #[arg(short, long = "move")]
        move_index: usize,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Insert a travel detour after a motion record and save
    #[command(name = "detour")]
    Detour {
        /// G-code file
        path: PathBuf,

        /// Layer index (0-based)
        #[arg(short, long)]
        layer: usize,

        /// Motion-record ordinal the detour starts from (0-based)
        #[arg(short, long = "move")]
        move_index: usize,

        /// Comma-separated directions, e.g. `up,up,right,down-left`
        #[arg(short, long, value_delimiter = ',', required = true)]
        steps: Vec<String>,

        /// Step length; overrides the config
        #[arg(long)]
        step_size: Option<f64>,

        /// Z climb per detour step; overrides the config
        #[arg(long)]
        lift: Option<f64>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}
