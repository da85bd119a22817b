use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));

    let c: ColorDef = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

    let c: ColorDef = serde_json::from_value(json!("#03F")).unwrap();
    assert_eq!(c.to_rgba8(), [0x00, 0x33, 0xff, 0xff]);
}

#[test]
fn rejects_malformed_hex() {
    assert!(serde_json::from_value::<ColorDef>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#gg0000")).is_err());
    assert!(ColorDef::from_hex("#ééé").is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<ColorDef>(json!([0.1, 0.2])).is_err());
}

#[test]
fn parses_hsla_object() {
    let c: ColorDef = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert!((c.r - 1.0).abs() < 1e-9);
    assert!(c.g.abs() < 1e-9);
    assert!(c.b.abs() < 1e-9);
}

#[test]
fn channels_clamp_to_u8_range() {
    assert_eq!(
        ColorDef::rgba(1.5, -0.2, 0.5, 2.0).to_rgba8(),
        [255, 0, 128, 255]
    );
}

#[test]
fn hex_round_trip() {
    assert_eq!(ColorDef::rgb8(0x6c, 0x2e, 0xa9).to_hex_rgb(), "#6c2ea9");
}
