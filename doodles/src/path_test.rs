use super::*;

#[test]
fn empty_builder_is_empty() {
    assert_eq!(PathBuilder::new().build(), "");
}

#[test]
fn move_and_line_use_two_decimals() {
    let d = PathBuilder::new().move_to(Point::new(1.0, 2.346)).line_to(Point::new(10.5, -3.0)).build();
    assert_eq!(d, "M 1.00 2.35 L 10.50 -3.00");
}

#[test]
fn quad_and_cubic_commands() {
    let d = PathBuilder::new()
        .move_to(Point::new(0.0, 0.0))
        .quad_to(Point::new(5.0, 5.0), Point::new(10.0, 0.0))
        .cubic_to(Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0))
        .build();
    assert_eq!(d, "M 0.00 0.00 Q 5.00 5.00 10.00 0.00 C 1.00 1.00 2.00 2.00 3.00 3.00");
}

#[test]
fn close_appends_z() {
    let d = PathBuilder::new().move_to(Point::new(0.0, 0.0)).line_to(Point::new(1.0, 0.0)).close().build();
    assert!(d.ends_with(" Z"));
}

#[test]
fn polyline_starts_with_move() {
    let d = PathBuilder::polyline(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)]).build();
    assert_eq!(d, "M 0.00 0.00 L 1.00 1.00 L 2.00 0.00");
}

#[test]
fn polyline_of_nothing_is_empty() {
    assert_eq!(PathBuilder::polyline(&[]).build(), "");
}

#[test]
fn stroke_serializes_class_lowercase() {
    let stroke = Stroke::new("M 0.00 0.00".into(), StrokeClass::Accent);
    let json = serde_json::to_value(&stroke).unwrap();
    assert_eq!(json["class"], "accent");
    assert_eq!(json["d"], "M 0.00 0.00");
}
