use colorshift_core::config::{ColorShiftConfig, ConfigFormat, CurveSpec};
use colorshift_core::curve::{Interpolation, Keyframe, Point};
use colorshift_core::effect::{ColorShift, ShiftParameter, ShiftParams};
use colorshift_core::error::ColorShiftError;
use std::path::Path;

const ANIMATED_TOML: &str = r#"
green_x = 0.1
blue_y = -0.25

[red_x]
points = [
    { frame = 1, value = 0.0, interpolation = "Linear" },
    { frame = 11, value = 0.5, interpolation = "Linear" },
]
"#;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_toml_numbers_and_tables() {
    let config = ColorShiftConfig::parse(ANIMATED_TOML, ConfigFormat::Toml).unwrap();
    assert_eq!(config.green_x, Some(CurveSpec::Constant(0.1)));
    assert_eq!(config.blue_y, Some(CurveSpec::Constant(-0.25)));
    assert_eq!(config.red_y, None);

    match config.red_x {
        Some(CurveSpec::Keyframe(ref k)) => {
            assert_eq!(k.points().len(), 2);
            assert_eq!(k.points()[1].frame, 11);
            assert_eq!(k.points()[0].interpolation, Interpolation::Linear);
        }
        ref other => panic!("expected keyframe table, got {other:?}"),
    }
}

#[test]
fn test_parse_json() {
    let text = r#"{
        "red_x": 0,
        "alpha_y": { "points": [ { "frame": 3, "value": 0.75 } ] }
    }"#;
    let config = ColorShiftConfig::parse(text, ConfigFormat::Json).unwrap();
    assert_eq!(config.red_x, Some(CurveSpec::Constant(0.0)));
    let alpha = config.alpha_y.unwrap().to_keyframe();
    assert_eq!(alpha.as_constant(), Some(0.75));
    // point fields left out take their defaults
    assert_eq!(alpha.points()[0].interpolation, Interpolation::Bezier);
}

#[test]
fn test_parse_rejects_non_finite() {
    let err = ColorShiftConfig::parse("red_x = nan", ConfigFormat::Toml).unwrap_err();
    assert!(matches!(err, ColorShiftError::InvalidConfig(_)));

    let err = ColorShiftConfig::parse("green_y = -inf", ConfigFormat::Toml).unwrap_err();
    assert!(err.to_string().contains("green_y"));
}

#[test]
fn test_parse_rejects_malformed_text() {
    let err = ColorShiftConfig::parse("red_x = \"left\"", ConfigFormat::Toml).unwrap_err();
    assert!(matches!(err, ColorShiftError::InvalidConfig(_)));

    let err = ColorShiftConfig::parse("{ not json", ConfigFormat::Json).unwrap_err();
    assert!(matches!(err, ColorShiftError::InvalidConfig(_)));
}

#[test]
fn test_format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("shift.json")), ConfigFormat::Json);
    assert_eq!(ConfigFormat::from_path(Path::new("SHIFT.JSON")), ConfigFormat::Json);
    assert_eq!(ConfigFormat::from_path(Path::new("shift.toml")), ConfigFormat::Toml);
    assert_eq!(ConfigFormat::from_path(Path::new("shift")), ConfigFormat::Toml);
    assert_eq!(format!("{}", ConfigFormat::Json), "JSON");
}

// ---------------------------------------------------------------------------
// Applying to a parameter store
// ---------------------------------------------------------------------------

#[test]
fn test_missing_keys_keep_current_curves() {
    let mut params = ShiftParams::<Keyframe>::default();
    let config = ColorShiftConfig::parse("blue_x = 0.5", ConfigFormat::Toml).unwrap();
    config.apply_to(&mut params).unwrap();

    let values = params.values_at(1);
    assert_eq!(values, [-0.05, 0.0, 0.05, 0.0, 0.5, 0.0, 0.0, 0.0]);
}

#[test]
fn test_apply_to_rejects_without_changes() {
    let mut params = ShiftParams::<Keyframe>::default();
    let mut config = ColorShiftConfig::default();
    config.set(ShiftParameter::RedY, CurveSpec::Constant(0.3));
    config.set(ShiftParameter::BlueX, CurveSpec::Constant(f64::NAN));

    assert!(config.apply_to(&mut params).is_err());
    assert_eq!(params, ShiftParams::default());
}

#[test]
fn test_to_params_overlays_defaults() {
    let config = ColorShiftConfig::parse(ANIMATED_TOML, ConfigFormat::Toml).unwrap();
    let params = config.to_params().unwrap();
    let at_6 = params.values_at(6);
    assert!((at_6[0] - 0.25).abs() < 1e-12);
    assert_eq!(at_6[2], 0.1);
    assert_eq!(at_6[5], -0.25);
    assert_eq!(at_6[1], 0.0);
}

#[test]
fn test_merge_prefers_other() {
    let mut base = ColorShiftConfig::parse("red_x = 0.1\ngreen_x = 0.2", ConfigFormat::Toml).unwrap();
    let other = ColorShiftConfig::parse("green_x = 0.9\nalpha_x = 0.4", ConfigFormat::Toml).unwrap();
    base.merge(&other);
    assert_eq!(base.red_x, Some(CurveSpec::Constant(0.1)));
    assert_eq!(base.green_x, Some(CurveSpec::Constant(0.9)));
    assert_eq!(base.alpha_x, Some(CurveSpec::Constant(0.4)));
    assert_eq!(base.blue_x, None);
}

#[test]
fn test_from_params_collapses_constants() {
    let mut params = ShiftParams::<Keyframe>::default();
    params.set(
        ShiftParameter::AlphaY,
        Keyframe::from_points([
            Point::new(1, 0.0, Interpolation::Linear),
            Point::new(2, 1.0, Interpolation::Linear),
        ]),
    );
    let config = ColorShiftConfig::from_params(&params);

    assert_eq!(config.red_x, Some(CurveSpec::Constant(-0.05)));
    assert_eq!(config.green_x, Some(CurveSpec::Constant(0.05)));
    assert!(matches!(config.alpha_y, Some(CurveSpec::Keyframe(_))));
    for param in ShiftParameter::ALL {
        assert!(config.get(param).is_some(), "{param} missing");
    }
}

// ---------------------------------------------------------------------------
// Effect integration
// ---------------------------------------------------------------------------

#[test]
fn test_set_config_str_merges() {
    let mut effect = ColorShift::<Keyframe>::default();
    effect
        .set_config_str(r#"{ "blue_y": 0.25 }"#, ConfigFormat::Json)
        .unwrap();
    let values = effect.params().values_at(1);
    assert_eq!(values, [-0.05, 0.0, 0.05, 0.0, 0.0, 0.25, 0.0, 0.0]);
}

#[test]
fn test_set_config_str_failure_leaves_effect() {
    let mut effect = ColorShift::<Keyframe>::default();
    let before = effect.clone();
    assert!(effect
        .set_config_str("red_x = nan", ConfigFormat::Toml)
        .is_err());
    assert_eq!(effect, before);
}

#[test]
fn test_effect_config_round_trip() {
    let config = ColorShiftConfig::parse(ANIMATED_TOML, ConfigFormat::Toml).unwrap();
    let effect = ColorShift::from_config(&config).unwrap();
    let restored = ColorShift::from_config(&effect.config()).unwrap();
    assert_eq!(restored, effect);
}

#[test]
fn test_save_and_load_both_formats() {
    let config = ColorShiftConfig::parse(ANIMATED_TOML, ConfigFormat::Toml).unwrap();
    let dir = tempfile::tempdir().unwrap();

    for name in ["shift.toml", "shift.json"] {
        let path = dir.path().join(name);
        config.save(&path).unwrap();
        let loaded = ColorShiftConfig::load(&path).unwrap();
        assert_eq!(loaded, config, "{name}");
    }

    let json = std::fs::read_to_string(dir.path().join("shift.json")).unwrap();
    assert!(json.trim_start().starts_with('{'));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ColorShiftConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ColorShiftError::Io(_)));
}

#[test]
fn test_json_keyframe_shape() {
    let config = ColorShiftConfig::parse(ANIMATED_TOML, ConfigFormat::Toml).unwrap();
    let text = config.to_text(ConfigFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let points = value["red_x"]["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1]["frame"], 11);
    assert_eq!(points[1]["value"], 0.5);
    assert_eq!(points[0]["interpolation"], "Linear");
    assert_eq!(value["green_x"], 0.1);
    assert!(value.get("red_y").is_none());
}
