use millprep_core::{MeasurementSystem, ToolpathError, Vector3d};
use millprep_toolpath::{MoveType, Toolpath, ToolpathSegment};
use serde_json::Value;
use tempfile::TempDir;

fn two_segments() -> Toolpath {
    let mut tp = Toolpath::new();
    tp.append(
        ToolpathSegment::new(0, Vector3d::new(0.0, 0.0, 0.0))
            .with_feed(100.0)
            .with_spindle(12000.0)
            .with_move_type(MoveType::Rapid)
            .with_comment("approach"),
    );
    tp.append(
        ToolpathSegment::new(1, Vector3d::new(3.0, 4.0, 0.0))
            .with_feed(200.0)
            .with_tool(3),
    );
    tp
}

#[test]
fn test_json_shape() {
    let json = two_segments().to_json().unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["meta"]["units"], "mm");
    let segments = value["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["index"], 0);
    assert_eq!(segments[1]["index"], 1);
    assert_eq!(segments[1]["pos"], serde_json::json!([3.0, 4.0, 0.0]));
    assert_eq!(segments[1]["feed"], 200.0);
}

#[test]
fn test_json_omits_unexported_fields() {
    let json = two_segments().to_json().unwrap();
    for field in ["spindle", "tool_id", "move_type", "flags", "comment", "time_from_start"] {
        assert!(!json.contains(field), "unexpected field {field} in {json}");
    }

    let value: Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<&String> = value["segments"][0].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);
}

#[test]
fn test_json_units_follow_toolpath() {
    let tp = Toolpath::with_units(MeasurementSystem::Imperial);
    let value: Value = serde_json::from_str(&tp.to_json().unwrap()).unwrap();
    assert_eq!(value["meta"]["units"], "in");
}

#[test]
fn test_save_json_writes_to_json_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("path.json");
    let tp = two_segments();

    tp.save_json(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, tp.to_json().unwrap());
}

#[test]
fn test_save_json_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("path.json");
    std::fs::write(&path, "stale contents that are much longer than the new document").unwrap();

    Toolpath::new().save_json(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, r#"{"meta":{"units":"mm"},"segments":[]}"#);
}

#[test]
fn test_save_json_unwritable_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("path.json");

    let err = two_segments().save_json(&path).unwrap_err();
    assert!(matches!(err, ToolpathError::Write { .. }));
}

#[test]
fn test_load_json_is_stub() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("path.json");
    two_segments().save_json(&path).unwrap();

    let loaded = Toolpath::load_json(&path);
    assert!(loaded.is_load_stub());
    assert_eq!(loaded.size(), 0);
}

#[test]
fn test_failed_save_leaves_no_partial_files() {
    let dir = TempDir::new().unwrap();
    // a non-empty directory cannot be replaced by the saved file
    let target = dir.path().join("path.json");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("keep.txt"), "keep").unwrap();

    let err = two_segments().save_json(&target).unwrap_err();
    assert!(matches!(err, ToolpathError::Write { .. }));

    assert_eq!(std::fs::read_to_string(target.join("keep.txt")).unwrap(), "keep");
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("path.json")]);
}

#[test]
fn test_save_json_leaves_only_the_target() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("out");
    std::fs::create_dir(&nested).unwrap();
    let path = nested.join("path.json");

    two_segments().save_json(&path).unwrap();
    let entries = std::fs::read_dir(&nested).unwrap().count();
    assert_eq!(entries, 1);
}
