//! Eight-way direction pad

use std::str::FromStr;

use crate::delta_stack::Delta;
use crate::error::EditorError;

/// Direction pad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Displacement for one press, `step` units long
    ///
    /// Up is +Y and right is +X. Diagonals keep the same length as the
    /// straight directions.
    pub fn delta(self, step: f64) -> Delta {
        let diag = step * std::f64::consts::FRAC_1_SQRT_2;
        match self {
            Self::Up => Delta::new(0.0, step),
            Self::Down => Delta::new(0.0, -step),
            Self::Left => Delta::new(-step, 0.0),
            Self::Right => Delta::new(step, 0.0),
            Self::UpLeft => Delta::new(-diag, diag),
            Self::UpRight => Delta::new(diag, diag),
            Self::DownLeft => Delta::new(-diag, -diag),
            Self::DownRight => Delta::new(diag, -diag),
        }
    }

    /// The direction that undoes this one
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
            Self::DownLeft => "down-left",
            Self::DownRight => "down-right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = EditorError;

    /// Accepts `up-left`, `up_left`, `upleft`, and the compass forms `n`, `ne`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        match normalized.as_str() {
            "up" | "n" => Ok(Self::Up),
            "down" | "s" => Ok(Self::Down),
            "left" | "w" => Ok(Self::Left),
            "right" | "e" => Ok(Self::Right),
            "upleft" | "nw" => Ok(Self::UpLeft),
            "upright" | "ne" => Ok(Self::UpRight),
            "downleft" | "sw" => Ok(Self::DownLeft),
            "downright" | "se" => Ok(Self::DownRight),
            _ => Err(EditorError::UnknownDirection(s.to_string())),
        }
    }
}
