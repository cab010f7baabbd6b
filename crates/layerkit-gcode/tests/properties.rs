//! Property tests for round-trip fidelity and serializer invariants

use std::collections::BTreeSet;

use layerkit_gcode::{
    assemble_document, layer_to_lines, parse_document, split_lines, strip_thumbnails, LayerItem,
    MotionClass, MotionWords, Move,
};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f64> {
    (-2000i32..2000).prop_map(|v| f64::from(v) / 10.0)
}

fn gcode_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(";LAYER_CHANGE\n".to_string()),
        Just(";TYPE:Perimeter\n".to_string()),
        Just(";TYPE:External perimeter\n".to_string()),
        Just("; thumbnail begin 16x16 10\n".to_string()),
        Just("; thumbnail end\n".to_string()),
        Just("; thumbnail_QOI begin 8x8 4\n".to_string()),
        Just("; thumbnail_QOI end\n".to_string()),
        Just("M106 S255\n".to_string()),
        Just("G92 E0\n".to_string()),
        Just("\n".to_string()),
        Just("G1 F1800\n".to_string()),
        coordinate().prop_map(|z| format!("G1 Z{z}\n")),
        (coordinate(), coordinate()).prop_map(|(x, y)| format!("G0 X{x} Y{y}\n")),
        (coordinate(), coordinate(), 0u32..500)
            .prop_map(|(x, y, e)| format!("G1 X{x} Y{y} E{}\n", f64::from(e) / 100.0)),
        coordinate().prop_map(|e| format!("G1 E{e}\n")),
    ]
}

fn gcode_text() -> impl Strategy<Value = String> {
    prop::collection::vec(gcode_line(), 0..60).prop_map(|lines| lines.concat())
}

proptest! {
    #[test]
    fn unedited_save_is_identity(text in gcode_text()) {
        let doc = parse_document(&text);
        let expected = strip_thumbnails(&split_lines(&text)).concat();
        prop_assert_eq!(assemble_document(&doc, &BTreeSet::new()), expected);
    }

    #[test]
    fn thumbnail_strip_is_idempotent(text in gcode_text()) {
        let once = strip_thumbnails(&split_lines(&text));
        let twice = strip_thumbnails(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parsing_is_deterministic(text in gcode_text()) {
        prop_assert_eq!(parse_document(&text), parse_document(&text));
    }

    #[test]
    fn travel_lines_never_carry_extrusion(text in gcode_text()) {
        let doc = parse_document(&text);
        for layer in &doc.layers {
            for item in &layer.items {
                if let LayerItem::Move(mv) = item {
                    if mv.is_travel() {
                        let lines = layer_to_lines(std::slice::from_ref(item));
                        prop_assert!(lines.iter().all(|l| !l.contains(" E")));
                    }
                }
            }
        }
    }

    #[test]
    fn constant_extrusion_is_written_once(
        points in prop::collection::vec((coordinate(), coordinate()), 1..40),
        e in 0u32..1000,
    ) {
        let e = f64::from(e) / 10.0;
        let items: Vec<LayerItem> = points
            .iter()
            .map(|&(x, y)| Move::at(x, y).with_e(e).with_class(MotionClass::Perimeter).into())
            .collect();
        let written = layer_to_lines(&items)
            .iter()
            .filter(|line| line.contains(" E"))
            .count();
        prop_assert_eq!(written, 1);
    }

    #[test]
    fn layer_offsets_are_ordered_and_disjoint(text in gcode_text()) {
        let doc = parse_document(&text);
        prop_assert_eq!(doc.layers.len(), doc.layer_offsets.len());
        for i in 1..doc.layers.len() {
            prop_assert!(
                doc.layer_offsets[i - 1] + doc.layers[i - 1].original_lines.len()
                    <= doc.layer_offsets[i]
            );
        }
    }

    #[test]
    fn rewriting_every_layer_keeps_motion(text in gcode_text()) {
        let doc = parse_document(&text);
        let every: BTreeSet<usize> = (0..doc.layer_count()).collect();
        let reparsed = parse_document(&assemble_document(&doc, &every));
        prop_assert_eq!(reparsed.layer_count(), doc.layer_count());

        for (before, after) in doc.layers.iter().zip(&reparsed.layers) {
            prop_assert_eq!(before.move_count(), after.move_count());
            for (old, new) in before.moves().zip(after.moves()) {
                prop_assert_eq!((old.x, old.y, old.z), (new.x, new.y, new.z));
                if !old.is_travel() {
                    prop_assert_eq!(old.e, new.e);
                }
                // Extruder-only records gain X and Y when written out
                let source = old.source_index.map(|i| before.original_lines[i].trim());
                let had_axis = source
                    .and_then(MotionWords::parse)
                    .is_some_and(|words| words.params.has_axis_word());
                if had_axis {
                    prop_assert_eq!(old.is_travel(), new.is_travel());
                }
            }
        }
    }
}
