//! Jittered shape primitives.
//!
//! Every routine is a pure function of its geometry and a seed: a regular
//! curve (circle, spiral, zig-zag) is sampled and each sample is nudged by the
//! seeded stream, so the same inputs always draw the same wobbly line. The
//! order in which a routine pulls numbers from its stream is part of its
//! output; reordering draws changes the drawing.

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

use std::f64::consts::{PI, TAU};

use crate::assign::{MarkKind, StrokeClass};
use crate::consts::SIZE_SEED_OFFSET;
use crate::geom::Point;
use crate::path::{PathBuilder, Stroke};
use crate::placement::PlacedMark;
use crate::rng::Mulberry32;

const ELLIPSE_STEPS: usize = 22;
const ELLIPSE_JITTER: f64 = 1.4;

const UNDERLINE_AMPLITUDE: f64 = 2.6;

/// Arrowhead half-opening, measured back from the shaft direction.
const HEAD_SPREAD: f64 = PI * 0.85;

fn polar(origin: Point, angle: f64, dist: f64) -> Point {
    Point::new(origin.x + angle.cos() * dist, origin.y + angle.sin() * dist)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn step_count(length: f64, per_step: f64, min: usize) -> usize {
    ((length / per_step).floor().max(0.0) as usize).max(min)
}

#[allow(clippy::cast_precision_loss)]
fn fraction(i: usize, n: usize) -> f64 {
    i as f64 / n as f64
}

// =============================================================
// Building blocks
// =============================================================

/// Closed jittered polygon approximating an ellipse.
#[must_use]
pub fn rough_ellipse(center: Point, rx: f64, ry: f64, seed: u32) -> String {
    let mut rng = Mulberry32::new(seed);
    let points: Vec<Point> = (0..=ELLIPSE_STEPS)
        .map(|i| {
            let t = fraction(i, ELLIPSE_STEPS) * TAU;
            let x = center.x + t.cos() * rx + rng.centered() * ELLIPSE_JITTER * 2.0;
            let y = center.y + t.sin() * ry + rng.centered() * ELLIPSE_JITTER * 2.0;
            Point::new(x, y)
        })
        .collect();
    PathBuilder::polyline(&points).build()
}

/// Hand-drawn wavy underline from `from` to `to` (horizontal).
#[must_use]
pub fn squiggle_underline(from: Point, to: Point, seed: u32) -> String {
    let mut rng = Mulberry32::new(seed);
    let length = (to.x - from.x).max(20.0);
    let steps = step_count(length, 18.0, 10);
    let mut builder = PathBuilder::new().move_to(from);
    for i in 1..=steps {
        let t = fraction(i, steps);
        let x = from.x + (to.x - from.x) * t;
        let wave = (t * TAU * 2.0).sin() * UNDERLINE_AMPLITUDE;
        builder = builder.line_to(Point::new(x, from.y + wave + rng.centered() * 1.5));
    }
    builder.build()
}

fn arrow_head(tip: Point, angle: f64, size: f64) -> String {
    PathBuilder::polyline(&[polar(tip, angle + HEAD_SPREAD, size), tip, polar(tip, angle - HEAD_SPREAD, size)]).build()
}

// =============================================================
// Margin marks
// =============================================================

/// Eight short radial rays.
#[must_use]
pub fn star(center: Point, radius: f64, class: StrokeClass, seed: u32) -> Vec<Stroke> {
    let mut rng = Mulberry32::new(seed);
    (0..8)
        .map(|i| {
            let a = fraction(i, 8) * TAU + rng.centered() * 0.2;
            let inner = polar(center, a, radius * 0.4);
            let outer_x = center.x + a.cos() * (radius * (1.2 + rng.centered() * 0.2));
            let outer_y = center.y + a.sin() * (radius * (1.2 + rng.centered() * 0.2));
            Stroke::new(PathBuilder::polyline(&[inner, Point::new(outer_x, outer_y)]).build(), class)
        })
        .collect()
}

/// About two and a half turns winding out from the center.
#[must_use]
pub fn spiral(center: Point, radius: f64, class: StrokeClass, seed: u32) -> Stroke {
    const TURNS: f64 = 2.4;
    const STEPS: usize = 42;
    let mut rng = Mulberry32::new(seed);
    let points: Vec<Point> = (0..=STEPS)
        .map(|i| {
            let t = fraction(i, STEPS);
            let p = polar(center, t * TAU * TURNS, radius * t * 0.95);
            let x = p.x + rng.centered() * 1.2;
            let y = p.y + rng.centered() * 1.2;
            Point::new(x, y)
        })
        .collect();
    Stroke::new(PathBuilder::polyline(&points).build(), class)
}

/// Two cubic lobes meeting at the top notch.
#[must_use]
pub fn heart(center: Point, size: f64, class: StrokeClass, seed: u32) -> Stroke {
    let mut rng = Mulberry32::new(seed);
    let mut wobble = |x: f64, y: f64| {
        let wx = x + rng.centered() * 1.2;
        let wy = y + rng.centered() * 1.2;
        Point::new(wx, wy)
    };
    let (cx, cy, s) = (center.x, center.y, size);

    let start = wobble(cx, cy + s * 0.2);
    let l1 = wobble(cx - s, cy - s * 0.6);
    let l2 = wobble(cx - s * 1.2, cy + s * 0.6);
    let bottom = wobble(cx, cy + s);
    let r1 = wobble(cx + s * 1.2, cy + s * 0.6);
    let r2 = wobble(cx + s, cy - s * 0.6);
    let end = wobble(cx, cy + s * 0.2);

    let d = PathBuilder::new().move_to(start).cubic_to(l1, l2, bottom).cubic_to(r1, r2, end).build();
    Stroke::new(d, class)
}

/// A handful of small stars scattered around `center`. Always drawn in ink.
#[must_use]
pub fn sparkle_cluster(center: Point, count: usize, seed: u32) -> Vec<Stroke> {
    let mut rng = Mulberry32::new(seed);
    let mut strokes = Vec::new();
    for i in 0..count {
        let dx = rng.centered() * 40.0;
        let dy = rng.centered() * 30.0;
        let radius = 6.0 + rng.next_f64() * 6.0;
        #[allow(clippy::cast_possible_truncation)]
        let star_seed = seed.wrapping_add((i * 13) as u32);
        strokes.extend(star(Point::new(center.x + dx, center.y + dy), radius, StrokeClass::Ink, star_seed));
    }
    strokes
}

/// Zig-zag lightning bolt hanging down from `origin`.
#[must_use]
pub fn lightning(origin: Point, size: f64, class: StrokeClass, seed: u32) -> Stroke {
    const PROFILE: [(f64, f64); 5] = [(0.0, 0.0), (0.25, 0.15), (0.05, 0.55), (0.5, 0.45), (0.25, 0.95)];
    let mut rng = Mulberry32::new(seed);
    let points: Vec<Point> = PROFILE
        .iter()
        .map(|&(fx, fy)| {
            let x = origin.x + size * fx + rng.centered() * 2.2;
            let y = origin.y + size * fy + rng.centered() * 2.2;
            Point::new(x, y)
        })
        .collect();
    Stroke::new(PathBuilder::polyline(&points).build(), class)
}

/// Horizontal wavy line of `length` centred on `center`.
#[must_use]
pub fn wiggle(center: Point, length: f64, class: StrokeClass, seed: u32) -> Stroke {
    let mut rng = Mulberry32::new(seed);
    let steps = step_count(length, 10.0, 8);
    let amp = 4.0 + rng.next_f64() * 3.0;
    let x0 = center.x - length / 2.0;
    let x1 = center.x + length / 2.0;

    let mut builder = PathBuilder::new().move_to(Point::new(x0, center.y + rng.centered() * 2.0));
    for i in 1..=steps {
        let t = fraction(i, steps);
        let y = center.y + (t * TAU * 2.0).sin() * amp + rng.centered() * 2.0;
        builder = builder.line_to(Point::new(x0 + (x1 - x0) * t, y));
    }
    Stroke::new(builder.build(), class)
}

/// Short straight arrow leaving `origin` at a slight random tilt.
#[must_use]
pub fn mini_arrow(origin: Point, length: f64, class: StrokeClass, seed: u32) -> Vec<Stroke> {
    let mut rng = Mulberry32::new(seed);
    let angle = rng.centered() * 0.9;
    let tip = polar(origin, angle, length);
    vec![
        Stroke::new(PathBuilder::polyline(&[origin, tip]).build(), class),
        Stroke::new(arrow_head(tip, angle, 7.0), class),
    ]
}

/// Six elliptical petals around a small round center.
#[must_use]
pub fn flower(center: Point, radius: f64, class: StrokeClass, seed: u32) -> Vec<Stroke> {
    const PETALS: usize = 6;
    let mut rng = Mulberry32::new(seed);
    let mut strokes: Vec<Stroke> = (0..PETALS)
        .map(|i| {
            let a = fraction(i, PETALS) * TAU + rng.centered() * 0.12;
            let petal = polar(center, a, radius * 1.2);
            #[allow(clippy::cast_possible_truncation)]
            let petal_seed = seed.wrapping_add((i * 19) as u32);
            Stroke::new(rough_ellipse(petal, radius * 0.75, radius * 0.5, petal_seed), class)
        })
        .collect();
    strokes.push(Stroke::new(rough_ellipse(center, radius * 0.4, radius * 0.4, seed.wrapping_add(99)), class));
    strokes
}

/// Draw a placed margin mark.
///
/// Sizes come from a secondary stream so that the shape routine itself sees
/// the untouched `draw_seed`.
#[must_use]
pub fn draw_mark(mark: &PlacedMark) -> Vec<Stroke> {
    let mut sizes = Mulberry32::new(mark.draw_seed.wrapping_add(SIZE_SEED_OFFSET));
    let at = mark.position();
    let (class, seed) = (mark.class, mark.draw_seed);
    match mark.kind {
        MarkKind::Star => star(at, 6.0 + sizes.next_f64() * 9.0, class, seed),
        MarkKind::Sparkle => sparkle_cluster(at, 1 + sizes.index(2), seed),
        MarkKind::Spiral => vec![spiral(at, 10.0 + sizes.next_f64() * 16.0, class, seed)],
        MarkKind::Heart => vec![heart(at, 7.0 + sizes.next_f64() * 10.0, class, seed)],
        MarkKind::Bolt => vec![lightning(at, 14.0 + sizes.next_f64() * 18.0, class, seed)],
        MarkKind::Squiggle => vec![wiggle(at, 26.0 + sizes.next_f64() * 40.0, class, seed)],
        MarkKind::MiniArrow => mini_arrow(at, 16.0 + sizes.next_f64() * 26.0, class, seed),
        MarkKind::Flower => flower(at, 7.0 + sizes.next_f64() * 10.0, class, seed),
    }
}

// =============================================================
// Hero doodles
// =============================================================

/// Curved flight path from `from` ending in a small paper plane at `to`.
#[must_use]
pub fn paper_plane(from: Point, to: Point, seed: u32) -> Vec<Stroke> {
    const SIZE: f64 = 16.0;
    let mut rng = Mulberry32::new(seed);
    let mid_x = (from.x + to.x) / 2.0 + rng.centered() * 30.0;
    let mid_y = (from.y + to.y) / 2.0 + rng.centered() * 20.0;
    let mid = Point::new(mid_x, mid_y);

    let flight = PathBuilder::new().move_to(from).quad_to(mid, to).build();

    let heading = (to.y - mid.y).atan2(to.x - mid.x);
    let plane = PathBuilder::new()
        .move_to(polar(to, heading + HEAD_SPREAD, SIZE))
        .line_to(to)
        .line_to(polar(to, heading - HEAD_SPREAD, SIZE))
        .line_to(polar(to, heading + PI, SIZE * 0.55))
        .close()
        .build();

    vec![Stroke::new(flight, StrokeClass::Ink), Stroke::new(plane, StrokeClass::Ink)]
}

/// Tall curly brace at `x` spanning `y0..y1`.
#[must_use]
pub fn curly_bracket(x: f64, y0: f64, y1: f64, class: StrokeClass, seed: u32) -> Stroke {
    let mut rng = Mulberry32::new(seed);
    let mut wob = |px: f64, py: f64| {
        let wx = px + rng.centered() * 6.0;
        let wy = py + rng.centered() * 6.0;
        Point::new(wx, wy)
    };
    let mid = (y0 + y1) / 2.0;

    let start = wob(x, y0);
    let a1 = wob(x - 16.0, y0 + 18.0);
    let a2 = wob(x - 16.0, mid - 18.0);
    let nib = wob(x, mid);
    let b1 = wob(x + 16.0, mid + 18.0);
    let b2 = wob(x + 16.0, y1 - 18.0);
    let end = wob(x, y1);

    let d = PathBuilder::new().move_to(start).cubic_to(a1, a2, nib).cubic_to(b1, b2, end).build();
    Stroke::new(d, class)
}

/// Curved arrow from `from` pointing at `to`.
#[must_use]
pub fn arrow(from: Point, to: Point, class: StrokeClass, seed: u32) -> Vec<Stroke> {
    let mut rng = Mulberry32::new(seed);
    let mid_x = (from.x + to.x) / 2.0 + rng.centered() * 30.0;
    let mid_y = (from.y + to.y) / 2.0 + rng.centered() * 30.0;
    let mid = Point::new(mid_x, mid_y);

    let shaft = PathBuilder::new().move_to(from).quad_to(mid, to).build();
    let heading = (to.y - mid.y).atan2(to.x - mid.x);
    vec![Stroke::new(shaft, class), Stroke::new(arrow_head(to, heading, 10.0), class)]
}
