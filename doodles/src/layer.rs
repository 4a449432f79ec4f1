//! Decoration layer: draws a full layout pass onto a surface.
//!
//! DESIGN
//! ======
//! A layout pass is "clear, then draw everything again". The host owns the
//! actual drawing target (an SVG element, a canvas, a string buffer) and
//! exposes it through [`Surface`]; this module decides *what* goes on it.
//! There is no incremental update. Every trigger (initial load, fonts
//! settling, a debounced resize) produces a complete redraw from the current
//! measurements, which is idempotent for identical measurements.
//!
//! Two layers exist:
//!
//! - the margin layer ([`render_decorations`]) spanning the whole overlay, with
//!   the hero doodles and the scattered marks;
//! - the text layer ([`render_text_marks`]) sized to the letter column, with
//!   circles and underlines over anchor phrases.

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotate::{AnchorGeometry, DEFAULT_STYLES, annotate_all};
use crate::assign::StrokeClass;
use crate::consts::{CURLY_BRACKET_SEED, PAPER_PLANE_SEED, POINTER_ARROW_SEED};
use crate::geom::{Point, Rect, Size, clamp};
use crate::path::Stroke;
use crate::placement::{PlacedMark, PlacementConfig, scatter};
use crate::region::Region;
use crate::shapes::{arrow, curly_bracket, draw_mark, paper_plane};

/// Quiet period a resize burst must observe before a relayout fires.
pub const RESIZE_QUIET: Duration = Duration::from_millis(100);

// =============================================================
// Surfaces
// =============================================================

/// Something strokes can be drawn onto.
pub trait Surface {
    /// Drop everything drawn so far and resize to `width` x `height`.
    fn clear(&mut self, width: f64, height: f64);

    fn draw(&mut self, stroke: &Stroke);
}

/// In-memory surface that records strokes; renders to SVG markup on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrokeList {
    pub width: f64,
    pub height: f64,
    pub strokes: Vec<Stroke>,
}

impl StrokeList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Standalone `<svg>` element holding every recorded stroke.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height,
        );
        for stroke in &self.strokes {
            out.push_str(&format!(r#"<path d="{}" class="{}"/>"#, stroke.d, stroke.class.css_class()));
        }
        out.push_str("</svg>");
        out
    }
}

impl Surface for StrokeList {
    fn clear(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.strokes.clear();
    }

    fn draw(&mut self, stroke: &Stroke) {
        self.strokes.push(stroke.clone());
    }
}

// =============================================================
// Margin layer
// =============================================================

/// Everything a margin layout pass needs from the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scene {
    pub region: Region,
    /// Areas marks must keep out of (marginal notes, headings).
    pub exclusion_zones: Vec<Rect>,
    /// Where the pointing arrow lands, if the target phrase is on the page.
    pub arrow_target: Option<Point>,
    pub placement: PlacementConfig,
}

/// Clear `surface` and draw the margin layer for `scene`.
///
/// Returns the scattered marks that were placed, in placement order.
pub fn render_decorations(surface: &mut impl Surface, scene: &Scene) -> Vec<PlacedMark> {
    let region = scene.region.normalized();
    surface.clear(region.width, region.height);

    for stroke in hero_strokes(&region, scene.arrow_target) {
        surface.draw(&stroke);
    }

    let marks = scatter(&region, &scene.exclusion_zones, &scene.placement);
    for mark in &marks {
        for stroke in draw_mark(mark) {
            surface.draw(&stroke);
        }
    }

    debug!(width = region.width, height = region.height, marks = marks.len(), "margin layer rendered");
    marks
}

/// The fixed character doodles: paper plane, curly bracket, optional arrow.
fn hero_strokes(region: &Region, arrow_target: Option<Point>) -> Vec<Stroke> {
    let (w, h) = (region.width, region.height);
    let (ll, lr) = (region.letter_left, region.letter_right);

    let plane_from = Point::new(clamp(ll - 160.0, 24.0, (ll - 40.0).max(24.0)), (h * 0.12).max(120.0));
    let plane_to = Point::new(clamp(ll - 40.0, 80.0, ll - 8.0), (h * 0.16).max(160.0));
    let mut strokes = paper_plane(plane_from, plane_to, PAPER_PLANE_SEED);

    let bracket_x = clamp(lr + 22.0, lr + 12.0, w - 18.0);
    strokes.push(curly_bracket(bracket_x, h * 0.40, h * 0.52, StrokeClass::Ink, CURLY_BRACKET_SEED));

    if let Some(target) = arrow_target {
        let from = Point::new((ll - 120.0).max(20.0), (target.y - 20.0).max(80.0));
        strokes.extend(arrow(from, target, StrokeClass::Ink, POINTER_ARROW_SEED));
    }

    strokes
}

// =============================================================
// Text layer
// =============================================================

/// Clear `surface` to the letter's size and draw every anchor annotation.
pub fn render_text_marks(surface: &mut impl Surface, letter: Size, anchors: &AnchorGeometry) {
    let width = letter.width.floor().max(1.0);
    let height = letter.height.floor().max(1.0);
    surface.clear(width, height);

    let strokes = annotate_all(anchors, &DEFAULT_STYLES);
    for stroke in &strokes {
        surface.draw(stroke);
    }
    debug!(anchors = anchors.len(), strokes = strokes.len(), "text layer rendered");
}

// =============================================================
// Triggers
// =============================================================

/// Why a layout pass runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTrigger {
    /// The page finished loading.
    Ready,
    /// Web fonts settled and inline metrics may have shifted.
    FontsReady,
    /// A resize burst went quiet.
    Resize,
}

/// Collapses a burst of resize events into one relayout.
///
/// Each [`notify`](Self::notify) restarts the quiet period; [`poll`](Self::poll)
/// yields [`LayoutTrigger::Resize`] once the period has elapsed, then goes idle.
#[derive(Debug, Clone)]
pub struct ResizeDebounce {
    quiet: Duration,
    last_event: Option<Instant>,
}

impl Default for ResizeDebounce {
    fn default() -> Self {
        Self::new(RESIZE_QUIET)
    }
}

impl ResizeDebounce {
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, last_event: None }
    }

    pub fn notify(&mut self, now: Instant) {
        self.last_event = Some(now);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.last_event.is_some()
    }

    /// Instant at which the pending relayout becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.last_event.map(|t| t + self.quiet)
    }

    pub fn poll(&mut self, now: Instant) -> Option<LayoutTrigger> {
        let due = self.deadline()?;
        if now < due {
            return None;
        }
        self.last_event = None;
        Some(LayoutTrigger::Resize)
    }
}
