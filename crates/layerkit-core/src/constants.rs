//! Grammar tokens and numeric thresholds
//!
//! These strings must match slicer output byte-for-byte. They are not configurable.

/// Layer-change marker line (compared against the trimmed line)
pub const LAYER_CHANGE_MARKER: &str = ";LAYER_CHANGE";

/// Type-annotation prefix, e.g. `;TYPE:External perimeter`
pub const TYPE_ANNOTATION_PREFIX: &str = ";TYPE:";

/// Substrings that open an embedded thumbnail block
pub const THUMBNAIL_BEGIN_MARKERS: [&str; 2] = ["thumbnail_QOI begin", "thumbnail begin"];

/// Substrings that close an embedded thumbnail block
pub const THUMBNAIL_END_MARKERS: [&str; 2] = ["thumbnail_QOI end", "thumbnail end"];

/// Minimum extrusion delta treated as real deposition
pub const SIGNIFICANT_EXTRUSION: f64 = 1e-5;

/// Decimal places used when writing X/Y/Z
pub const COORDINATE_PRECISION: usize = 3;

/// Decimal places used when writing E
pub const EXTRUSION_PRECISION: usize = 5;

/// Command word written for every serialized motion record
pub const SERIALIZED_MOTION_WORD: &str = "G1";
