//! End-to-end marker scenarios: JSON props in, marker description out.

use tui_entity_dot::core::{EntityDot, MarkerStyle, Rect};
use tui_entity_dot::types::{Direction, MarkerProps, NON_PLAYER_CLASS, PLAYER_CLASS};

const CELL: Rect = Rect::new(0, 0, 2, 1);

fn describe(json: &str) -> tui_entity_dot::core::MarkerSpec {
    let props: MarkerProps = serde_json::from_str(json).expect("props json");
    EntityDot::default().describe(&props, CELL)
}

#[test]
fn empty_props_render_down_with_non_player_default() {
    let spec = describe("{}");
    assert_eq!(spec.label.glyph, '↓');
    assert_eq!(spec.style, MarkerStyle::NonPlayer);
    assert_eq!(spec.style.default_class(), Some(NON_PLAYER_CLASS));
}

#[test]
fn player_without_color_uses_player_default() {
    let spec = describe(r#"{"isPlayer":true}"#);
    assert_eq!(spec.label.glyph, '↓');
    assert_eq!(spec.style, MarkerStyle::Player);
    assert_eq!(spec.style.default_class(), Some(PLAYER_CLASS));
}

#[test]
fn facing_right() {
    let spec = describe(r#"{"facing":{"x":1,"y":0}}"#);
    assert_eq!(spec.label.glyph, '→');
    assert_eq!(spec.label.direction, Direction::Right);
    assert_eq!(spec.style, MarkerStyle::NonPlayer);
}

#[test]
fn explicit_color_facing_up() {
    let spec = describe(r##"{"color":"#ff0000","facing":{"x":0,"y":-1}}"##);
    assert_eq!(spec.label.glyph, '↑');
    assert_eq!(spec.style.custom_color(), Some("#ff0000"));
    assert_eq!(spec.style.default_class(), None);
}

#[test]
fn explicit_color_overrides_player_class() {
    let spec = describe(r##"{"isPlayer":true,"color":"#ff0000"}"##);
    assert_eq!(spec.style, MarkerStyle::Custom("#ff0000".to_string()));
    assert_eq!(spec.style.default_class(), None);
}

#[test]
fn diagonal_falls_back_to_down() {
    let spec = describe(r#"{"facing":{"x":1,"y":1}}"#);
    assert_eq!(spec.label.glyph, '↓');
}

#[test]
fn every_canonical_vector_resolves() {
    let cases = [
        ((0, -1), '↑'),
        ((1, 0), '→'),
        ((0, 1), '↓'),
        ((-1, 0), '←'),
    ];
    let dot = EntityDot::default();
    for ((x, y), glyph) in cases {
        let spec = dot.describe(&MarkerProps::default().with_facing(x, y), CELL);
        assert_eq!(spec.label.glyph, glyph, "vector ({x}, {y})");
    }
}

#[test]
fn other_vectors_resolve_to_down() {
    let dot = EntityDot::default();
    for (x, y) in [(1, 1), (2, 0), (0, 0), (-1, 1), (0, -5)] {
        let spec = dot.describe(&MarkerProps::default().with_facing(x, y), CELL);
        assert_eq!(spec.label.glyph, '↓', "vector ({x}, {y})");
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    let dot = EntityDot::default();
    for json in [
        "{}",
        r#"{"isPlayer":true,"facing":{"x":-1,"y":0}}"#,
        r##"{"color":"#123456"}"##,
    ] {
        let props: MarkerProps = serde_json::from_str(json).unwrap();
        let first = dot.describe(&props, CELL);
        let second = dot.describe(&props, CELL);
        assert_eq!(first, second, "props: {json}");
    }
}
