use millprep_core::Vector3d;
use millprep_toolpath::{MoveType, Toolpath, ToolpathSegment};

fn three_four_five() -> Toolpath {
    let mut tp = Toolpath::new();
    tp.append(ToolpathSegment::new(0, Vector3d::new(0.0, 0.0, 0.0)).with_feed(100.0));
    tp.append(ToolpathSegment::new(1, Vector3d::new(3.0, 4.0, 0.0)).with_feed(200.0));
    tp.append(ToolpathSegment::new(2, Vector3d::new(3.0, 4.0, 5.0)).with_feed(300.0));
    tp
}

#[test]
fn test_length_sums_consecutive_distances() {
    let tp = three_four_five();
    assert!((tp.length() - 10.0).abs() < 1e-9);
}

#[test]
fn test_length_of_short_toolpaths() {
    let mut tp = Toolpath::new();
    assert_eq!(tp.length(), 0.0);

    tp.append(ToolpathSegment::new(0, Vector3d::new(7.0, 7.0, 7.0)));
    assert_eq!(tp.length(), 0.0);
}

#[test]
fn test_length_ignores_move_type() {
    let mut tp = Toolpath::new();
    tp.append(ToolpathSegment::new(0, Vector3d::ZERO).with_move_type(MoveType::Rapid));
    tp.append(ToolpathSegment::new(1, Vector3d::new(0.0, 0.0, 2.0)).with_move_type(MoveType::Dwell));
    tp.append(ToolpathSegment::new(2, Vector3d::new(0.0, 3.0, 2.0)).with_move_type(MoveType::ArcCW));
    assert!((tp.length() - 5.0).abs() < 1e-9);
}

#[test]
fn test_append_accepts_anything() {
    let mut tp = Toolpath::new();
    tp.append(ToolpathSegment::new(5, Vector3d::ZERO));
    tp.append(ToolpathSegment::new(2, Vector3d::new(f64::NAN, 0.0, 0.0)).with_feed(-1.0));
    assert_eq!(tp.size(), 2);
    assert_eq!(tp.segments()[0].index, 5);
    assert_eq!(tp.segments()[1].index, 2);
}

#[test]
fn test_clear_keeps_meta() {
    let mut tp = three_four_five();
    tp.meta.source = "planner".to_string();
    tp.clear();
    assert!(tp.is_empty());
    assert_eq!(tp.size(), 0);
    assert_eq!(tp.meta.source, "planner");
}

#[test]
fn test_iteration_order() {
    let tp = three_four_five();
    let indices: Vec<u64> = (&tp).into_iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}
