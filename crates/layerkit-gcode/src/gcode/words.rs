//! Command-word and parameter tokenizing

use regex::Regex;
use std::sync::OnceLock;

/// Motion command family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionCommand {
    /// G0 / G00
    Rapid,
    /// G1 / G01
    Linear,
    /// G2 / G02, approximated end-to-end
    ArcCw,
    /// G3 / G03, approximated end-to-end
    ArcCcw,
}

impl MotionCommand {
    /// Recognize a command word such as `G1` or `g01`
    pub fn from_word(word: &str) -> Option<Self> {
        static MOTION_WORD: OnceLock<Regex> = OnceLock::new();
        let regex =
            MOTION_WORD.get_or_init(|| Regex::new(r"^[Gg]0?([0-3])$").expect("invalid regex pattern"));

        let caps = regex.captures(word)?;
        match &caps[1] {
            "0" => Some(Self::Rapid),
            "1" => Some(Self::Linear),
            "2" => Some(Self::ArcCw),
            "3" => Some(Self::ArcCcw),
            _ => None,
        }
    }

    /// Check for an explicit rapid-positioning command
    pub fn is_rapid(self) -> bool {
        self == Self::Rapid
    }

    /// Check for G0/G1, which carry no geometry without axis words
    pub fn is_straight(self) -> bool {
        matches!(self, Self::Rapid | Self::Linear)
    }
}

/// Parameters found on a command line
///
/// Only X/Y/Z/E affect geometry. The others are recognized so they are not
/// mistaken for malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Params {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub e: Option<f64>,
    pub f: Option<f64>,
    pub i: Option<f64>,
    pub j: Option<f64>,
    pub r: Option<f64>,
    pub p: Option<f64>,
    pub s: Option<f64>,
}

impl Params {
    /// Parse whitespace-separated words such as `X10.5 Y-3 E0.02`
    ///
    /// A word whose value does not parse is treated as absent.
    pub fn parse<'a>(words: impl Iterator<Item = &'a str>) -> Self {
        let mut params = Self::default();

        for word in words {
            let mut chars = word.chars();
            let Some(letter) = chars.next() else {
                continue;
            };
            let raw = chars.as_str();
            let slot = match letter.to_ascii_uppercase() {
                'X' => &mut params.x,
                'Y' => &mut params.y,
                'Z' => &mut params.z,
                'E' => &mut params.e,
                'F' => &mut params.f,
                'I' => &mut params.i,
                'J' => &mut params.j,
                'R' => &mut params.r,
                'P' => &mut params.p,
                'S' => &mut params.s,
                _ => continue,
            };
            match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => *slot = Some(value),
                _ => tracing::debug!(word, "Ignoring malformed parameter"),
            }
        }

        params
    }

    /// Check for an explicit X, Y, or Z word
    pub fn has_axis_word(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.z.is_some()
    }

    /// Check for any explicit position word, E included
    pub fn has_position_word(&self) -> bool {
        self.has_axis_word() || self.e.is_some()
    }
}

/// Tokenized motion line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionWords {
    pub command: MotionCommand,
    pub params: Params,
}

impl MotionWords {
    /// Tokenize a line if its first word is a motion command
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = strip_comment(line).split_whitespace();
        let command = MotionCommand::from_word(words.next()?)?;
        Some(Self {
            command,
            params: Params::parse(words),
        })
    }
}

/// Code portion of a line, without any trailing `;` comment
pub fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// First word of the code portion, upper-cased
pub fn command_word(line: &str) -> Option<String> {
    strip_comment(line)
        .split_whitespace()
        .next()
        .map(str::to_ascii_uppercase)
}

/// Axis words of a `G92` coordinate reset, or `None` for any other line
pub fn reset_params(line: &str) -> Option<Params> {
    let mut words = strip_comment(line).split_whitespace();
    let word = words.next()?;
    word.eq_ignore_ascii_case("G92").then(|| Params::parse(words))
}
