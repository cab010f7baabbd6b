//! Motion records and their classification

use serde::{Deserialize, Serialize};

/// Motion classification
///
/// Slicer annotations carry arbitrary type names; the common ones get their own
/// variant and everything else is kept verbatim in [`MotionClass::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MotionClass {
    /// No annotation was pending and the move deposits material
    #[default]
    Unclassified,
    /// Non-depositing move
    Travel,
    /// `;TYPE:Perimeter`
    Perimeter,
    /// `;TYPE:External perimeter`
    ExternalPerimeter,
    /// Synthetic non-depositing move inserted by an edit session
    EditTravel,
    /// Any other annotation label, lower-cased
    Other(String),
}

impl MotionClass {
    /// Decode a label such as `"external perimeter"`
    pub fn from_label(label: &str) -> Self {
        match label {
            "" => Self::Unclassified,
            "travel" => Self::Travel,
            "perimeter" => Self::Perimeter,
            "external perimeter" => Self::ExternalPerimeter,
            "travel_edit" => Self::EditTravel,
            other => Self::Other(other.to_string()),
        }
    }

    /// Decode the label of a `;TYPE:` annotation line
    ///
    /// Returns `None` when the line is not an annotation.
    pub fn from_annotation(line: &str) -> Option<Self> {
        line.trim()
            .strip_prefix(crate::constants::TYPE_ANNOTATION_PREFIX)
            .map(|label| Self::from_label(&label.trim().to_lowercase()))
    }

    /// Lower-case type label; empty for unclassified moves
    pub fn label(&self) -> &str {
        match self {
            Self::Unclassified => "",
            Self::Travel => "travel",
            Self::Perimeter => "perimeter",
            Self::ExternalPerimeter => "external perimeter",
            Self::EditTravel => "travel_edit",
            Self::Other(label) => label,
        }
    }

    /// True for every non-depositing class
    pub fn is_travel(&self) -> bool {
        matches!(self, Self::Travel | Self::EditTravel)
    }
}

impl From<String> for MotionClass {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<MotionClass> for String {
    fn from(class: MotionClass) -> Self {
        class.label().to_string()
    }
}

impl std::fmt::Display for MotionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unclassified => write!(f, "unclassified"),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// Absolute-position motion record
///
/// Every coordinate is the resolved absolute value after carrying forward axes
/// that the source line did not mention. `x` and `y` are always present for
/// parsed records; they stay optional so that records built from external
/// views round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Move {
    /// Absolute X
    pub x: Option<f64>,
    /// Absolute Y
    pub y: Option<f64>,
    /// Absolute Z
    pub z: Option<f64>,
    /// Absolute extruder position
    pub e: Option<f64>,
    /// Motion classification
    pub motion_class: MotionClass,
    /// Line position within the owning layer's `original_lines`; `None` if synthesized
    pub source_index: Option<usize>,
    /// The `;TYPE:` line that preceded this record
    pub annotation: Option<String>,
}

impl Move {
    /// Create a record at an XY position with everything else unset
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Set Z
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Set E
    pub fn with_e(mut self, e: f64) -> Self {
        self.e = Some(e);
        self
    }

    /// Set the classification
    pub fn with_class(mut self, class: MotionClass) -> Self {
        self.motion_class = class;
        self
    }

    /// Check if this record is non-depositing
    pub fn is_travel(&self) -> bool {
        self.motion_class.is_travel()
    }

    /// Check if this record was inserted rather than parsed
    pub fn is_synthesized(&self) -> bool {
        self.source_index.is_none()
    }

    /// Flat representation for renderers and UI layers
    pub fn to_view(&self) -> MoveView {
        MoveView {
            x: self.x,
            y: self.y,
            z: self.z,
            e: self.e,
            move_type: self.motion_class.label().to_string(),
            original_line_index: self.source_index,
            preceding_comment: self.annotation.clone(),
        }
    }

    /// Rebuild a record from its flat representation
    pub fn from_view(view: &MoveView) -> Self {
        Self {
            x: view.x,
            y: view.y,
            z: view.z,
            e: view.e,
            motion_class: MotionClass::from_label(&view.move_type),
            source_index: view.original_line_index,
            annotation: view.preceding_comment.clone(),
        }
    }
}

/// Flat field set exposed to rendering and UI collaborators
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoveView {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub e: Option<f64>,
    /// Type label; empty when unclassified
    #[serde(rename = "type", default)]
    pub move_type: String,
    pub original_line_index: Option<usize>,
    pub preceding_comment: Option<String>,
}
