//! Line classification with carried coordinate state

use layerkit_core::constants::{SIGNIFICANT_EXTRUSION, TYPE_ANNOTATION_PREFIX};
use layerkit_core::{Document, Layer, LayerItem, MotionClass, Move};

use super::segment::segment_layers;
use super::thumbnails::strip_thumbnails;
use super::words::{command_word, reset_params, MotionWords, Params};

/// Non-motion command words that are passed through untouched
const PASSTHROUGH_G_WORDS: [&str; 3] = ["G28", "G90", "G91"];

/// Last-known absolute position, carried across layer boundaries
///
/// Updated from every explicit axis word on a motion line, whether or not
/// that line became a motion record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CarriedState {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub e: Option<f64>,
}

impl CarriedState {
    fn absorb(&mut self, params: &Params) {
        if params.x.is_some() {
            self.x = params.x;
        }
        if params.y.is_some() {
            self.y = params.y;
        }
        if params.z.is_some() {
            self.z = params.z;
        }
        if params.e.is_some() {
            self.e = params.e;
        }
    }
}

/// How a single line was classified
enum LineKind<'a> {
    Blank,
    Annotation,
    Passthrough,
    /// `G92` with the axes it resets
    Reset(Params),
    Motion(MotionWords),
    Unknown(&'a str),
}

fn line_kind(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with(TYPE_ANNOTATION_PREFIX) {
        return LineKind::Annotation;
    }
    if trimmed.starts_with(';') {
        return LineKind::Passthrough;
    }
    if let Some(words) = MotionWords::parse(trimmed) {
        return LineKind::Motion(words);
    }

    let word = command_word(trimmed).unwrap_or_default();
    if word.starts_with('M') || word.starts_with('T') {
        return LineKind::Passthrough;
    }
    if let Some(params) = reset_params(trimmed) {
        return LineKind::Reset(params);
    }
    if PASSTHROUGH_G_WORDS.contains(&word.as_str()) {
        return LineKind::Passthrough;
    }
    LineKind::Unknown(trimmed)
}

/// Layer classification engine
///
/// Holds no state of its own; callers thread a [`CarriedState`] through.
#[derive(Debug, Clone, Copy, Default)]
pub struct GcodeParser;

impl GcodeParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Build a document from raw lines: strip thumbnails, segment, classify
    ///
    /// Carried state flows from the header through every layer in file order.
    pub fn parse_lines(&self, raw_lines: Vec<String>) -> Document {
        let cleaned_lines = strip_thumbnails(&raw_lines);
        let spans = segment_layers(&cleaned_lines);

        let mut state = CarriedState::default();
        let header_end = spans.first().map_or(0, |span| span.start);
        self.classify_lines_with(&cleaned_lines[..header_end], &mut state);

        let mut layers = Vec::with_capacity(spans.len());
        let mut layer_offsets = Vec::with_capacity(spans.len());

        for span in spans {
            let mut layer = Layer::new(span.index, cleaned_lines[span.start..span.end].to_vec());
            self.classify_layer(&mut layer, &mut state);
            layer_offsets.push(span.start);
            layers.push(layer);
        }

        tracing::debug!(
            raw = raw_lines.len(),
            cleaned = cleaned_lines.len(),
            layers = layers.len(),
            "Parsed document"
        );

        Document {
            path: None,
            raw_lines,
            cleaned_lines,
            layers,
            layer_offsets,
        }
    }

    /// Rebuild `layer.items` from `layer.original_lines`, starting from `state`
    pub fn classify_layer(&self, layer: &mut Layer, state: &mut CarriedState) {
        layer.items = self.classify_lines_with(&layer.original_lines, state);
    }

    /// Classify lines starting from unresolved coordinates
    pub fn classify_lines(&self, lines: &[String]) -> Vec<LayerItem> {
        self.classify_lines_with(lines, &mut CarriedState::default())
    }

    /// Classify lines into motion records and opaque lines
    ///
    /// `state` is the position before the first line and is left at the
    /// position after the last one.
    pub fn classify_lines_with(
        &self,
        lines: &[String],
        state: &mut CarriedState,
    ) -> Vec<LayerItem> {
        let mut items = Vec::with_capacity(lines.len());
        let mut pending_annotation: Option<&String> = None;

        for (line_index, line) in lines.iter().enumerate() {
            match line_kind(line) {
                LineKind::Blank => {
                    items.push(LayerItem::Line(line.clone()));
                }
                LineKind::Annotation => {
                    pending_annotation = Some(line);
                    items.push(LayerItem::Line(line.clone()));
                }
                LineKind::Passthrough => {
                    pending_annotation = None;
                    items.push(LayerItem::Line(line.clone()));
                }
                LineKind::Reset(params) => {
                    state.absorb(&params);
                    pending_annotation = None;
                    items.push(LayerItem::Line(line.clone()));
                }
                LineKind::Motion(words)
                    if words.command.is_straight() && !words.params.has_position_word() =>
                {
                    // Feed-rate-only lines move nothing; the annotation still applies
                    items.push(LayerItem::Line(line.clone()));
                }
                LineKind::Motion(words) => {
                    let record = resolve_motion(&words, state, pending_annotation, line_index);
                    state.absorb(&words.params);
                    pending_annotation = None;
                    items.push(match record {
                        Some(mv) => LayerItem::Move(mv),
                        None => LayerItem::Line(line.clone()),
                    });
                }
                LineKind::Unknown(trimmed) => {
                    tracing::trace!(line = trimmed, "Unrecognized line kept verbatim");
                    pending_annotation = None;
                    items.push(LayerItem::Line(line.clone()));
                }
            }
        }

        items
    }
}

/// Resolve a motion line against carried state
///
/// Returns `None` when X or Y cannot be resolved; the line then stays opaque.
fn resolve_motion(
    words: &MotionWords,
    state: &CarriedState,
    pending_annotation: Option<&String>,
    line_index: usize,
) -> Option<Move> {
    let params = &words.params;
    let x = params.x.or(state.x)?;
    let y = params.y.or(state.y)?;
    let z = params.z.or(state.z);
    let e = params.e.or(state.e);

    // An E with nothing carried before it counts from zero
    let extrusion = match (params.e, state.e) {
        (Some(explicit), None) => Some(explicit),
        (_, Some(carried)) => e.map(|resolved| resolved - carried),
        (None, None) => None,
    };
    let significant = extrusion.is_some_and(|delta| delta.abs() >= SIGNIFICANT_EXTRUSION);
    let axis_moved = params.has_axis_word();

    let is_travel = words.command.is_rapid()
        || (!significant && axis_moved)
        || (state.e.is_none() && params.e.is_none() && axis_moved);

    let motion_class = if is_travel {
        MotionClass::Travel
    } else {
        pending_annotation
            .and_then(|line| MotionClass::from_annotation(line))
            .unwrap_or_default()
    };

    let annotation = if is_travel {
        None
    } else {
        pending_annotation.cloned()
    };

    Some(Move {
        x: Some(x),
        y: Some(y),
        z,
        e,
        motion_class,
        source_index: Some(line_index),
        annotation,
    })
}

/// Parse in-memory G-code text into a document
pub fn parse_document(text: &str) -> Document {
    GcodeParser::new().parse_lines(split_lines(text))
}

/// Split text into lines, keeping each line's terminator
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(String::from).collect()
}
