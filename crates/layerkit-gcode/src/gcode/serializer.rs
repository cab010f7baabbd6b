//! Layer and document serialization

use std::collections::BTreeSet;

use layerkit_core::constants::{
    COORDINATE_PRECISION, EXTRUSION_PRECISION, SERIALIZED_MOTION_WORD, SIGNIFICANT_EXTRUSION,
};
use layerkit_core::{Document, LayerItem, Move};

use super::words::reset_params;

/// Terminator used for serialized records: that of the layer's first
/// terminated opaque line, so CRLF input stays CRLF
fn record_terminator(items: &[LayerItem]) -> &'static str {
    let first = items
        .iter()
        .filter_map(LayerItem::as_line)
        .find(|line| line.ends_with('\n'));
    match first {
        Some(line) if line.ends_with("\r\n") => "\r\n",
        _ => "\n",
    }
}

/// Track the extruder through a `G92` reset line
///
/// An explicit E becomes the new reference. A bare `G92` resets every axis,
/// so the next E must be written again.
fn track_reset(line: &str, last_e_written: &mut Option<f64>) {
    if let Some(params) = reset_params(line.trim()) {
        if params.e.is_some() {
            *last_e_written = params.e;
        } else if !params.has_position_word() {
            *last_e_written = None;
        }
    }
}

/// Format one motion record, or `None` if it carries no parameters
///
/// `last_e_written` is the E most recently emitted in this layer and is
/// updated when this record emits one.
fn format_move(mv: &Move, last_e_written: &mut Option<f64>, terminator: &str) -> Option<String> {
    let mut parts: Vec<String> = Vec::with_capacity(5);

    if let Some(x) = mv.x {
        parts.push(format!("X{:.*}", COORDINATE_PRECISION, x));
    }
    if let Some(y) = mv.y {
        parts.push(format!("Y{:.*}", COORDINATE_PRECISION, y));
    }
    if let Some(z) = mv.z {
        parts.push(format!("Z{:.*}", COORDINATE_PRECISION, z));
    }

    if !mv.is_travel() {
        if let Some(e) = mv.e {
            let changed = last_e_written.is_none_or(|last| (e - last).abs() > SIGNIFICANT_EXTRUSION);
            if changed {
                parts.push(format!("E{:.*}", EXTRUSION_PRECISION, e));
                *last_e_written = Some(e);
            }
        }
    }

    if parts.is_empty() {
        return None;
    }
    Some(format!(
        "{} {}{}",
        SERIALIZED_MOTION_WORD,
        parts.join(" "),
        terminator
    ))
}

/// Serialize a layer's items into output lines
///
/// Opaque lines are emitted unchanged. Every motion record becomes a `G1`
/// line; E is written only for depositing records and only when it differs
/// from the last E written in this layer (or set by a `G92`).
pub fn layer_to_lines(items: &[LayerItem]) -> Vec<String> {
    let terminator = record_terminator(items);
    let mut lines = Vec::with_capacity(items.len());
    let mut last_e_written = None;

    for item in items {
        match item {
            LayerItem::Line(line) => {
                track_reset(line, &mut last_e_written);
                lines.push(line.clone());
            }
            LayerItem::Move(mv) => {
                if let Some(line) = format_move(mv, &mut last_e_written, terminator) {
                    lines.push(line);
                }
            }
        }
    }

    lines
}

/// Reassemble a document into output text
///
/// Layers listed in `edited` are re-serialized from their items; all other
/// layers and every line outside a layer span are copied verbatim from the
/// cleaned input. Edited indices without a layer are ignored.
pub fn assemble_document(doc: &Document, edited: &BTreeSet<usize>) -> String {
    for &index in edited.range(doc.layer_count()..) {
        tracing::warn!(
            layer = index,
            layer_count = doc.layer_count(),
            "Edited layer index has no layer; skipping"
        );
    }

    let mut out = String::new();
    let mut cursor = 0usize;

    for (index, (layer, &offset)) in doc.layers.iter().zip(&doc.layer_offsets).enumerate() {
        if cursor < offset {
            let end = offset.min(doc.cleaned_lines.len());
            doc.cleaned_lines[cursor..end]
                .iter()
                .for_each(|line| out.push_str(line));
        }

        if edited.contains(&index) {
            layer_to_lines(&layer.items)
                .iter()
                .for_each(|line| out.push_str(line));
        } else {
            layer.original_lines.iter().for_each(|line| out.push_str(line));
        }

        cursor = offset + layer.original_lines.len();
    }

    if cursor < doc.cleaned_lines.len() {
        doc.cleaned_lines[cursor..]
            .iter()
            .for_each(|line| out.push_str(line));
    }

    out
}
