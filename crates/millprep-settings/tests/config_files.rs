use millprep_core::{Error, MeasurementSystem};
use millprep_settings::Config;
use tempfile::TempDir;

fn customised() -> Config {
    let mut config = Config::new();
    config.import.repair_on_import = false;
    config.import.weld_tolerance = 0.001;
    config.clipping.scale = 1000.0;
    config.toolpath.units = MeasurementSystem::Imperial;
    config.toolpath.default_tool_id = 4;
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    customised().save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, customised());
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    customised().save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, customised());
}

#[test]
fn test_save_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("millprep").join("config.toml");

    Config::new().save_to_file(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_unknown_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");

    assert!(matches!(Config::new().save_to_file(&path), Err(Error::Config(_))));
    std::fs::write(&path, "import: {}").unwrap();
    assert!(matches!(Config::load_from_file(&path), Err(Error::Config(_))));
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[import]\nrepair_on_import = false\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert!(!config.import.repair_on_import);
    assert_eq!(config.import.weld_tolerance, 1e-6);
    assert_eq!(config.clipping.scale, 1e6);
}

#[test]
fn test_invalid_values_fail_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"clipping":{"scale":-5.0}}"#).unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("scale"));
}

#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[import\nrepair_on_import = ").unwrap();

    assert!(matches!(Config::load_from_file(&path), Err(Error::Config(_))));
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}
