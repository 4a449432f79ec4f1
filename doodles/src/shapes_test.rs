use super::*;
use crate::region::Side;

fn segments(d: &str) -> usize {
    d.matches(" L ").count()
}

fn mark(kind: MarkKind, draw_seed: u32) -> PlacedMark {
    PlacedMark {
        kind,
        class: StrokeClass::Plain,
        side: Side::Left,
        x: 100.0,
        y: 200.0,
        footprint: kind.footprint(),
        seed: draw_seed,
        draw_seed,
    }
}

// =============================================================
// Building blocks
// =============================================================

#[test]
fn rough_ellipse_has_closed_step_count() {
    let d = rough_ellipse(Point::new(50.0, 50.0), 20.0, 10.0, 7);
    assert!(d.starts_with("M "));
    assert_eq!(segments(&d), ELLIPSE_STEPS);
}

#[test]
fn rough_ellipse_is_deterministic_per_seed() {
    let c = Point::new(50.0, 50.0);
    assert_eq!(rough_ellipse(c, 20.0, 10.0, 7), rough_ellipse(c, 20.0, 10.0, 7));
    assert_ne!(rough_ellipse(c, 20.0, 10.0, 7), rough_ellipse(c, 20.0, 10.0, 8));
}

#[test]
fn short_underline_uses_minimum_steps() {
    let d = squiggle_underline(Point::new(0.0, 10.0), Point::new(30.0, 10.0), 1);
    assert_eq!(segments(&d), 10);
    assert!(d.starts_with("M 0.00 10.00"));
}

#[test]
fn long_underline_scales_steps_with_length() {
    let d = squiggle_underline(Point::new(0.0, 10.0), Point::new(360.0, 10.0), 1);
    assert_eq!(segments(&d), 20);
}

// =============================================================
// Margin marks
// =============================================================

#[test]
fn star_draws_eight_rays() {
    let strokes = star(Point::new(0.0, 0.0), 10.0, StrokeClass::Ink, 3);
    assert_eq!(strokes.len(), 8);
    assert!(strokes.iter().all(|s| s.class == StrokeClass::Ink && segments(&s.d) == 1));
}

#[test]
fn spiral_samples_forty_three_points() {
    let s = spiral(Point::new(0.0, 0.0), 20.0, StrokeClass::Plain, 3);
    assert_eq!(segments(&s.d), 42);
}

#[test]
fn heart_is_two_cubics() {
    let s = heart(Point::new(0.0, 0.0), 10.0, StrokeClass::Ink, 3);
    assert_eq!(s.d.matches('C').count(), 2);
}

#[test]
fn sparkle_cluster_is_always_ink() {
    let strokes = sparkle_cluster(Point::new(0.0, 0.0), 2, 5);
    assert_eq!(strokes.len(), 16);
    assert!(strokes.iter().all(|s| s.class == StrokeClass::Ink));
}

#[test]
fn lightning_has_five_vertices() {
    let s = lightning(Point::new(0.0, 0.0), 20.0, StrokeClass::Ink, 3);
    assert_eq!(segments(&s.d), 4);
}

#[test]
fn wiggle_has_at_least_eight_steps() {
    let s = wiggle(Point::new(0.0, 0.0), 30.0, StrokeClass::Ink, 3);
    assert_eq!(segments(&s.d), 8);
    let long = wiggle(Point::new(0.0, 0.0), 120.0, StrokeClass::Ink, 3);
    assert_eq!(segments(&long.d), 12);
}

#[test]
fn mini_arrow_is_shaft_and_head() {
    let strokes = mini_arrow(Point::new(0.0, 0.0), 20.0, StrokeClass::Ink, 3);
    assert_eq!(strokes.len(), 2);
}

#[test]
fn flower_is_six_petals_and_a_center() {
    assert_eq!(flower(Point::new(0.0, 0.0), 10.0, StrokeClass::Ink, 3).len(), 7);
}

#[test]
fn every_kind_draws_something() {
    for kind in MarkKind::ALL {
        let strokes = draw_mark(&mark(kind, 1234));
        assert!(!strokes.is_empty(), "{kind:?} drew nothing");
        assert!(strokes.iter().all(|s| s.d.starts_with("M ")));
    }
}

#[test]
fn draw_mark_keeps_class_except_sparkle() {
    for kind in MarkKind::ALL {
        let strokes = draw_mark(&mark(kind, 99));
        let expected = if kind == MarkKind::Sparkle { StrokeClass::Ink } else { StrokeClass::Plain };
        assert!(strokes.iter().all(|s| s.class == expected), "{kind:?}");
    }
}

#[test]
fn draw_mark_is_deterministic() {
    for kind in MarkKind::ALL {
        assert_eq!(draw_mark(&mark(kind, 4321)), draw_mark(&mark(kind, 4321)));
    }
}

// =============================================================
// Hero doodles
// =============================================================

#[test]
fn paper_plane_is_path_and_closed_plane() {
    let strokes = paper_plane(Point::new(40.0, 140.0), Point::new(200.0, 190.0), 131);
    assert_eq!(strokes.len(), 2);
    assert!(strokes[0].d.contains(" Q "));
    assert!(strokes[1].d.ends_with('Z'));
}

#[test]
fn curly_bracket_is_two_cubics() {
    let s = curly_bracket(600.0, 400.0, 520.0, StrokeClass::Ink, 149);
    assert_eq!(s.d.matches('C').count(), 2);
}

#[test]
fn arrow_ends_at_target() {
    let strokes = arrow(Point::new(20.0, 80.0), Point::new(300.0, 400.0), StrokeClass::Ink, 47);
    assert_eq!(strokes.len(), 2);
    assert!(strokes[0].d.ends_with("300.00 400.00"));
    assert!(strokes[1].d.contains("L 300.00 400.00 L"));
}
