use std::collections::BTreeSet;
use std::fs;

use layerkit_gcode::{load_document, save_document, GcodeFileReader};
use tempfile::TempDir;

const INPUT: &str = "; header\n; thumbnail begin 4x4 8\n; AAAA\n; thumbnail end\n\
;LAYER_CHANGE\nG1 X10 Y10 Z0.2 E5\nG1 X20 Y10 E6\n;LAYER_CHANGE\nG1 X0 Y0 E6\nM84\n";

#[test]
fn test_load_records_path_and_strips_thumbnails() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("part.gcode");
    fs::write(&path, INPUT).expect("write input");

    let doc = load_document(&path).expect("load");

    assert_eq!(doc.path.as_deref(), Some(path.as_path()));
    assert_eq!(doc.raw_lines.len(), 10);
    assert_eq!(doc.cleaned_lines.len(), 7);
    assert_eq!(doc.layer_count(), 2);
}

#[test]
fn test_save_without_edits_writes_cleaned_input() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("in.gcode");
    let output = dir.path().join("out.gcode");
    fs::write(&input, INPUT).expect("write input");

    let doc = load_document(&input).expect("load");
    save_document(&doc, &output, &BTreeSet::new()).expect("save");

    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(written, doc.cleaned_lines.concat());
    assert!(!written.contains("thumbnail"));
}

#[test]
fn test_save_edited_layer() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("in.gcode");
    let output = dir.path().join("out.gcode");
    fs::write(&input, INPUT).expect("write input");

    let mut doc = load_document(&input).expect("load");
    doc.layers[0].remove_move(0).expect("first move");
    save_document(&doc, &output, &BTreeSet::from([0])).expect("save");

    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(
        written,
        "; header\n;LAYER_CHANGE\nG1 X20.000 Y10.000 Z0.200 E6.00000\n;LAYER_CHANGE\nG1 X0 Y0 E6\nM84\n"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_document(dir.path().join("missing.gcode")).expect_err("should fail");
    assert!(err.is_io());
}

#[test]
fn test_directory_is_not_a_file() {
    let dir = TempDir::new().expect("temp dir");
    let err = GcodeFileReader::new(dir.path()).err().expect("should fail");
    assert!(err.is_io());
}

#[test]
fn test_unwritable_destination_is_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let doc = layerkit_gcode::parse_document(INPUT);
    let target = dir.path().join("no-such-dir").join("out.gcode");
    let err = save_document(&doc, &target, &BTreeSet::new()).expect_err("should fail");
    assert!(err.is_io());
}
