//! SVG path data and the stroke type handed to surfaces.
//!
//! Coordinates are written with two decimals, which is plenty for pen
//! wobble at CSS pixel scale and keeps the markup small.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use serde::Serialize;

use crate::assign::StrokeClass;
use crate::geom::Point;

/// One drawable path plus its style class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    /// SVG path data (`d` attribute).
    pub d: String,
    pub class: StrokeClass,
}

impl Stroke {
    #[must_use]
    pub fn new(d: String, class: StrokeClass) -> Self {
        Self { d, class }
    }
}

/// Incremental builder for SVG path data.
#[derive(Debug, Default, Clone)]
pub struct PathBuilder {
    d: String,
}

impl PathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn move_to(mut self, p: Point) -> Self {
        self.push('M', &[p]);
        self
    }

    #[must_use]
    pub fn line_to(mut self, p: Point) -> Self {
        self.push('L', &[p]);
        self
    }

    #[must_use]
    pub fn quad_to(mut self, ctrl: Point, to: Point) -> Self {
        self.push('Q', &[ctrl, to]);
        self
    }

    #[must_use]
    pub fn cubic_to(mut self, c1: Point, c2: Point, to: Point) -> Self {
        self.push('C', &[c1, c2, to]);
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.separate();
        self.d.push('Z');
        self
    }

    /// Polyline through `points`: a move to the first, lines to the rest.
    #[must_use]
    pub fn polyline(points: &[Point]) -> Self {
        let mut iter = points.iter();
        let Some(&first) = iter.next() else {
            return Self::new();
        };
        iter.fold(Self::new().move_to(first), |b, &p| b.line_to(p))
    }

    #[must_use]
    pub fn build(self) -> String {
        self.d
    }

    fn separate(&mut self) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
    }

    fn push(&mut self, cmd: char, points: &[Point]) {
        self.separate();
        self.d.push(cmd);
        for p in points {
            self.d.push_str(&format!(" {:.2} {:.2}", p.x, p.y));
        }
    }
}
