use std::fs;

use unit_converter::config::{load_from, load_or_default_at, Config, ConfigError};
use unit_converter::input::MAX_PRECISION;
use unit_converter::quantity::Category;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let cfg = load_or_default_at(&path).expect("default config");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let content = fs::read_to_string(&path).expect("read back");
    assert!(content.contains("precision = 4"), "{content}");
    assert!(content.contains("default_category = \"length\""), "{content}");
}

#[test]
fn defaults_match_first_screen_units() {
    let cfg = Config::default();
    let speed = cfg.default_units.get(Category::Speed);
    assert_eq!(speed.from, "miles per hour");
    assert_eq!(speed.to, "kilometers per hour");
    assert_eq!(cfg.default_units.get(Category::Volume).from, "liters");
    assert!(cfg.validate().is_ok());
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");

    let mut cfg = Config::default();
    cfg.precision = 2;
    cfg.default_category = Category::Temperature;
    cfg.default_units.temperature.to = "kelvin".to_string();
    cfg.save_to(&path).expect("save");

    let loaded = load_from(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn unknown_default_unit_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");

    let mut cfg = Config::default();
    cfg.default_units.weight.from = "stones".to_string();
    cfg.save_to(&path).expect("save");

    match load_from(&path) {
        Err(ConfigError::InvalidDefault { category, unit }) => {
            assert_eq!(category, Category::Weight);
            assert_eq!(unit, "stones");
        }
        other => panic!("expected InvalidDefault, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "precision = \"four\"").expect("write");

    assert!(matches!(load_from(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn precision_out_of_range_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("wide.toml");

    let mut cfg = Config::default();
    cfg.precision = 100_000;
    cfg.save_to(&path).expect("save");

    match load_from(&path) {
        Err(ConfigError::InvalidPrecision(p)) => assert_eq!(p, 100_000),
        other => panic!("expected InvalidPrecision, got {other:?}"),
    }

    cfg.precision = MAX_PRECISION;
    assert!(cfg.validate().is_ok());
}

#[test]
fn precision_override_is_not_persisted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let cfg = load_or_default_at(&path).expect("default config");
    assert_eq!(cfg.display_precision(Some(9)), 9);
    assert_eq!(cfg.display_precision(None), 4);
    assert_eq!(cfg.display_precision(Some(70_000)), MAX_PRECISION);

    cfg.save_to(&path).expect("save");
    let loaded = load_from(&path).expect("load");
    assert_eq!(loaded.precision, 4);
}
