//! CLI command implementations
//!
//! Each command writes its report to the given writer so it can be
//! exercised without a terminal.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use layerkit_core::{Document, Layer, PendingEdits};
use layerkit_editor::{Direction, EditorConfig, EditorWorkspace};
use layerkit_gcode::{load_document, save_document};

fn load(path: &Path) -> Result<Document> {
    load_document(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn layer_of(doc: &Document, index: usize) -> Result<&Layer> {
    match doc.layer(index) {
        Some(layer) => Ok(layer),
        None => bail!(
            "Layer {} not found ({} layers in file)",
            index,
            doc.layer_count()
        ),
    }
}

fn travel_count(layer: &Layer) -> usize {
    layer.moves().filter(|mv| mv.is_travel()).count()
}

fn save_pending(doc: &mut Document, pending: PendingEdits, output: &Path) -> Result<()> {
    let edited = doc.apply_pending_edits(pending);
    save_document(doc, output, &edited)
        .with_context(|| format!("Failed to save {}", output.display()))
}

/// Summarize a file
pub fn info(path: &Path, out: &mut impl Write) -> Result<()> {
    let doc = load(path)?;
    let moves: usize = doc.layers.iter().map(Layer::move_count).sum();
    let travel: usize = doc.layers.iter().map(travel_count).sum();

    writeln!(out, "File:            {}", path.display())?;
    writeln!(out, "Lines:           {}", doc.raw_lines.len())?;
    writeln!(out, "Thumbnail lines: {}", doc.stripped_line_count())?;
    writeln!(out, "Header lines:    {}", doc.header_lines().len())?;
    writeln!(out, "Layers:          {}", doc.layer_count())?;
    writeln!(out, "Motion records:  {} ({} travel)", moves, travel)?;
    Ok(())
}

/// List layers
pub fn layers(path: &Path, out: &mut impl Write) -> Result<()> {
    let doc = load(path)?;
    writeln!(out, "{:>6} {:>8} {:>6} {:>6} {:>7}", "layer", "offset", "lines", "moves", "travel")?;
    for (layer, offset) in doc.layers.iter().zip(&doc.layer_offsets) {
        writeln!(
            out,
            "{:>6} {:>8} {:>6} {:>6} {:>7}",
            layer.index,
            offset,
            layer.original_lines.len(),
            layer.move_count(),
            travel_count(layer)
        )?;
    }
    Ok(())
}

fn coord(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.3}", v))
}

/// Print one layer's motion records
pub fn show(path: &Path, layer: usize, json: bool, out: &mut impl Write) -> Result<()> {
    let doc = load(path)?;
    let layer = layer_of(&doc, layer)?;
    let views = layer.move_views();

    if json {
        serde_json::to_writer_pretty(&mut *out, &views).context("Failed to encode moves")?;
        writeln!(out)?;
        return Ok(());
    }

    for (ordinal, view) in views.iter().enumerate() {
        let line = view
            .original_line_index
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        let label = if view.move_type.is_empty() {
            "unclassified"
        } else {
            view.move_type.as_str()
        };
        writeln!(
            out,
            "{:>5} line {:>5}  X {:>9} Y {:>9} Z {:>7} E {:>11}  {}",
            ordinal,
            line,
            coord(view.x),
            coord(view.y),
            coord(view.z),
            view.e.map_or_else(|| "-".to_string(), |e| format!("{:.5}", e)),
            label
        )?;
    }
    Ok(())
}

/// Write the thumbnail-stripped file
pub fn strip(path: &Path, output: &Path, out: &mut impl Write) -> Result<()> {
    let doc = load(path)?;
    save_document(&doc, output, &BTreeSet::new())
        .with_context(|| format!("Failed to save {}", output.display()))?;
    writeln!(
        out,
        "Removed {} thumbnail lines, wrote {}",
        doc.stripped_line_count(),
        output.display()
    )?;
    Ok(())
}

/// Delete one motion record and save
pub fn delete_move(
    path: &Path,
    layer: usize,
    move_index: usize,
    output: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let mut doc = load(path)?;
    let mut pending = PendingEdits::new();
    let mut workspace = EditorWorkspace::default();

    let editor = workspace.open(&doc, &pending, layer)?;
    let removed = editor.delete_move(move_index)?;
    workspace.commit_all(&mut pending);
    save_pending(&mut doc, pending, output)?;

    writeln!(
        out,
        "Deleted move {} of layer {} (X {} Y {}), wrote {}",
        move_index,
        layer,
        coord(removed.x),
        coord(removed.y),
        output.display()
    )?;
    Ok(())
}

/// Insert a detour and save
pub fn detour(
    path: &Path,
    layer: usize,
    move_index: usize,
    steps: &[String],
    config: EditorConfig,
    output: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let directions = steps
        .iter()
        .map(|step| step.parse::<Direction>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut doc = load(path)?;
    let mut pending = PendingEdits::new();
    let mut workspace = EditorWorkspace::new(config);

    let editor = workspace.open(&doc, &pending, layer)?;
    editor.begin_session(move_index)?;
    for direction in directions {
        editor.nudge(direction)?;
    }
    let session = editor.end_session()?;
    workspace.commit_all(&mut pending);
    save_pending(&mut doc, pending, output)?;

    let tip = session.tip_coords();
    writeln!(
        out,
        "Inserted {} detour records in layer {}, tip at X {:.3} Y {:.3}, wrote {}",
        session.depth(),
        layer,
        tip.x,
        tip.y,
        output.display()
    )?;
    Ok(())
}
