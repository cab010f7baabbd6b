//! Styling handed to toolpath viewers
//!
//! Viewers are told up front whether they are the first one opened in the
//! process; the tip marker style follows from that.

use serde::{Deserialize, Serialize};

/// RGBA color, components in `0.0..=1.0`
pub type Rgba = [f32; 4];

/// Colors cycled across successive edit sessions
pub const SESSION_COLORS: [Rgba; 8] = [
    [1.0, 0.0, 0.0, 1.0],
    [1.0, 0.5, 0.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.5, 0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
];

/// Color for the `n`-th session (0-based), wrapping around the palette
pub fn session_color(n: usize) -> Rgba {
    SESSION_COLORS[n % SESSION_COLORS.len()]
}

/// Which viewer this is among those opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerInstance {
    #[default]
    First,
    Subsequent,
}

impl ViewerInstance {
    /// Instance kind for a viewer opened after `already_open` others
    pub fn from_open_count(already_open: usize) -> Self {
        if already_open == 0 {
            Self::First
        } else {
            Self::Subsequent
        }
    }

    pub fn marker_style(self) -> MarkerStyle {
        match self {
            Self::First => MarkerStyle::Sphere,
            Self::Subsequent => MarkerStyle::Square,
        }
    }
}

/// Tip marker shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    Sphere,
    Square,
}

impl std::fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sphere => write!(f, "sphere"),
            Self::Square => write!(f, "square"),
        }
    }
}
