#![allow(clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn dist_sq_is_squared_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.dist_sq(b), 25.0);
    assert_eq!(b.dist_sq(a), 25.0);
}

// --- Rect ---

#[test]
fn right_bottom_center() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.center(), Point::new(25.0, 40.0));
}

#[test]
fn expand_grows_every_side() {
    let r = Rect::new(10.0, 10.0, 20.0, 20.0).expand(8.0);
    assert_eq!(r, Rect::new(2.0, 2.0, 36.0, 36.0));
}

#[test]
fn contains_is_inclusive_on_edges() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(!r.contains(Point::new(10.01, 5.0)));
    assert!(!r.contains(Point::new(5.0, -0.01)));
}

#[test]
fn union_of_empty_is_none() {
    assert!(Rect::union(&[]).is_none());
}

#[test]
fn union_covers_all_line_boxes() {
    let rects = [Rect::new(100.0, 10.0, 200.0, 20.0), Rect::new(40.0, 32.0, 80.0, 20.0)];
    let u = Rect::union(&rects);
    assert_eq!(u, Some(Rect::new(40.0, 10.0, 260.0, 42.0)));
}

// --- clamp ---

#[test]
fn clamp_inside_range_is_identity() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
}

#[test]
fn clamp_limits_both_sides() {
    assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
}

#[test]
fn clamp_with_inverted_bounds_prefers_lower() {
    assert_eq!(clamp(5.0, 20.0, 10.0), 20.0);
    assert_eq!(clamp(50.0, 20.0, 10.0), 20.0);
}
