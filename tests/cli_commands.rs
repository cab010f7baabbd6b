use std::path::PathBuf;

use layerkit::cli::commands;
use layerkit::cli::settings::{load_config, remember};
use layerkit::{parse_document, Config, EditorConfig, MotionClass};
use tempfile::TempDir;

const SLICED: &str = "\
; generated by slicer
; thumbnail begin 16x16 120
; iVBORw0KGgoAAAANSUhEUgAAABAAAAAQ
; thumbnail end
M104 S215
G28
;LAYER_CHANGE
;Z:0.2
G1 Z0.2 F720
G1 X10 Y10 E0
;TYPE:External perimeter
G1 X20 Y10 E1.5
G1 X20 Y20 E3
;LAYER_CHANGE
;Z:0.4
G0 X0 Y0
G1 X10 Y0 E4
M84
";

fn fixture() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("part.gcode");
    std::fs::write(&path, SLICED).unwrap();
    (dir, path)
}

fn run(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_info_and_layers() {
    let (_dir, path) = fixture();

    let report = run(|out| commands::info(&path, out));
    assert!(report.contains("Thumbnail lines: 3"));
    assert!(report.contains("Layers:          2"));
    assert!(report.contains("Motion records:  5 (2 travel)"));

    let table = run(|out| commands::layers(&path, out));
    let rows: Vec<&str> = table.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].split_whitespace().eq(["0", "3", "7", "3", "1"]));
    assert!(rows[2].split_whitespace().eq(["1", "10", "5", "2", "1"]));
}

#[test]
fn test_show_json() {
    let (_dir, path) = fixture();
    let json = run(|out| commands::show(&path, 0, true, out));
    let views: serde_json::Value = serde_json::from_str(&json).unwrap();
    let views = views.as_array().unwrap();
    assert_eq!(views.len(), 3);
    assert_eq!(views[1]["type"], "external perimeter");
    assert_eq!(views[1]["preceding_comment"], ";TYPE:External perimeter\n");
    assert_eq!(views[0]["type"], "travel");

    let mut out = Vec::new();
    assert!(commands::show(&path, 7, false, &mut out).is_err());
}

#[test]
fn test_strip_writes_clean_copy() {
    let (dir, path) = fixture();
    let output = dir.path().join("clean.gcode");
    run(|out| commands::strip(&path, &output, out));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(!written.contains("thumbnail"));
    assert!(written.starts_with("; generated by slicer\nM104 S215\n"));
    assert!(written.ends_with("G1 X10 Y0 E4\nM84\n"));
}

#[test]
fn test_delete_move_leaves_other_layers() {
    let (dir, path) = fixture();
    let output = dir.path().join("deleted.gcode");
    run(|out| commands::delete_move(&path, 0, 2, &output, out));

    let written = std::fs::read_to_string(&output).unwrap();
    let doc = parse_document(&written);
    assert_eq!(doc.layers[0].move_count(), 2);
    assert!(written.ends_with(";LAYER_CHANGE\n;Z:0.4\nG0 X0 Y0\nG1 X10 Y0 E4\nM84\n"));
}

#[test]
fn test_detour_inserts_travel() {
    let (dir, path) = fixture();
    let output = dir.path().join("detour.gcode");
    let steps = vec!["up".to_string(), "right".to_string()];
    let report = run(|out| {
        commands::detour(&path, 0, 1, &steps, EditorConfig::default(), &output, out)
    });
    assert!(report.contains("Inserted 2 detour records in layer 0"));
    assert!(report.contains("tip at X 22.000 Y 12.000"));

    let doc = parse_document(&std::fs::read_to_string(&output).unwrap());
    let moves: Vec<_> = doc.layers[0].moves().collect();
    assert_eq!(moves.len(), 5);
    assert_eq!((moves[2].x, moves[2].y), (Some(20.0), Some(12.0)));
    assert_eq!(moves[2].z, Some(1.2));
    assert!(moves[2].is_travel());
    assert_eq!(moves[3].z, Some(2.2));
    assert_eq!(moves[1].motion_class, MotionClass::ExternalPerimeter);
    assert_eq!(moves[4].motion_class, MotionClass::Unclassified);
}

#[test]
fn test_detour_rejects_unknown_direction() {
    let (dir, path) = fixture();
    let output = dir.path().join("detour.gcode");
    let steps = vec!["sideways".to_string()];
    let mut out = Vec::new();
    let err = commands::detour(&path, 0, 1, &steps, EditorConfig::default(), &output, &mut out)
        .unwrap_err();
    assert!(err.to_string().contains("Unknown direction: sideways"));
    assert!(!output.exists());
}

#[test]
fn test_missing_platform_config_is_not_created() {
    let (dir, path) = fixture();
    let platform = dir.path().join("layerkit").join("config.toml");

    let (mut config, config_path) = load_config(None, Some(platform.clone())).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config_path, None);

    remember(&mut config, config_path.as_deref(), &path);
    assert!(!platform.exists());
}

#[test]
fn test_existing_config_records_recent_file() {
    let (dir, path) = fixture();
    let platform = dir.path().join("config.toml");
    Config::default().save_to_file(&platform).unwrap();

    let (mut config, config_path) = load_config(None, Some(platform.clone())).unwrap();
    assert_eq!(config_path.as_deref(), Some(platform.as_path()));
    remember(&mut config, config_path.as_deref(), &path);

    let saved = Config::load_from_file(&platform).unwrap();
    assert_eq!(saved.files.recent_files, vec![path.canonicalize().unwrap()]);
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = load_config(Some(&missing), None).unwrap_err();
    assert!(err.to_string().contains("Failed to load config"));
}
