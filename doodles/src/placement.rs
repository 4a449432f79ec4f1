//! Collision-avoiding placement of margin marks.
//!
//! DESIGN
//! ======
//! Bands are visited top to bottom and each band's slots in order. A slot gets
//! its own seeded stream and tries a bounded number of jittered candidates in
//! its gutter; the first candidate that keeps clear of every mark placed so
//! far and of every exclusion zone wins, and the accepted mark becomes an
//! obstacle for the slots after it.
//!
//! The mark index that picks the kind and class and feeds both seeds counts
//! accepted marks only. A dropped slot leaves it unchanged, so the next slot
//! inherits the dropped assignment and a fresh seed.
//!
//! ERROR HANDLING
//! ==============
//! A slot whose attempts are all blocked is dropped. Under-filling the page is
//! an accepted outcome; there is no retry or re-planning pass.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::assign::{MarkKind, StrokeClass, assign};
use crate::consts::{
    BAND_JITTER, BOTTOM_SAFE, DEFAULT_ATTEMPTS, DEFAULT_PADDING, GUTTER_EDGE_INSET, GUTTER_SAMPLE_MARGIN, SAFE_INSET,
    TOP_SAFE,
};
use crate::geom::{Point, Rect, clamp};
use crate::plan::{Band, BandPlan};
use crate::region::{Gutters, Region, Side};
use crate::rng::Mulberry32;

/// Tunables for a placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Candidates tried per slot before the slot is dropped.
    pub attempts: usize,
    /// Extra clearance between marks and around exclusion zones.
    pub padding: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { attempts: DEFAULT_ATTEMPTS, padding: DEFAULT_PADDING }
    }
}

/// A mark that found a clear spot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedMark {
    pub kind: MarkKind,
    pub class: StrokeClass,
    pub side: Side,
    pub x: f64,
    pub y: f64,
    pub footprint: f64,
    /// Seed of the slot's placement stream.
    pub seed: u32,
    /// Seed handed to the shape routine.
    pub draw_seed: u32,
}

impl PlacedMark {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Placement seed for slot `slot` of band `band`, `index` being the count of marks accepted so far.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn slot_seed(band: usize, slot: usize, index: usize) -> u32 {
    ((band + 1) * 1000 + (slot + 1) * 97 + index * 13) as u32
}

/// Seed for the shape routine of the mark accepted at `index`.
#[must_use]
pub fn draw_seed(slot_seed: u32, index: usize) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    let offset = (index * 7) as u32;
    slot_seed.wrapping_add(offset)
}

/// Whether a mark of `footprint` at `candidate` keeps clear of `placed` and `zones`.
#[must_use]
pub fn is_clear(candidate: Point, footprint: f64, placed: &[PlacedMark], zones: &[Rect], padding: f64) -> bool {
    let near_mark = placed.iter().any(|p| {
        let min = footprint + p.footprint + padding;
        candidate.dist_sq(p.position()) < min * min
    });
    if near_mark {
        return false;
    }
    !zones.iter().any(|zone| zone.expand(padding).contains(candidate))
}

/// Scatter margin marks over `region`, avoiding `zones`.
///
/// The region is normalized first, so degenerate sizes still complete.
#[must_use]
pub fn scatter(region: &Region, zones: &[Rect], config: &PlacementConfig) -> Vec<PlacedMark> {
    let region = region.normalized();
    let gutters = region.gutters();
    let plan = BandPlan::for_region(&region);
    let assignments = assign(plan.total);

    let mut placed: Vec<PlacedMark> = Vec::with_capacity(plan.total);
    let mut index = 0;
    for band in plan.bands() {
        for slot in 0..band.count {
            let Some(assignment) = assignments.get(index) else {
                break;
            };
            let seed = slot_seed(band.index, slot, index);
            let side = gutters.resolve(Side::for_slot(slot));
            let footprint = assignment.kind.footprint();
            let mut rng = Mulberry32::new(seed);

            let found = (0..config.attempts)
                .map(|_| sample_candidate(&mut rng, &band, &region, &gutters, side))
                .find(|&p| is_clear(p, footprint, &placed, zones, config.padding));

            match found {
                Some(p) => {
                    placed.push(PlacedMark {
                        kind: assignment.kind,
                        class: assignment.class,
                        side,
                        x: p.x,
                        y: p.y,
                        footprint,
                        seed,
                        draw_seed: draw_seed(seed, index),
                    });
                    index += 1;
                }
                None => trace!(band = band.index, slot, kind = ?assignment.kind, "no clear position; slot dropped"),
            }
        }
    }

    debug!(requested = plan.total, placed = placed.len(), density = ?plan.density, "margin marks scattered");
    placed
}

/// One jittered candidate inside `band` and the gutter on `side`.
///
/// Draws `y` then `x` from `rng`, in that order.
fn sample_candidate(rng: &mut Mulberry32, band: &Band, region: &Region, gutters: &Gutters, side: Side) -> Point {
    let y = clamp(
        band.mid() + rng.centered() * band.height * BAND_JITTER,
        TOP_SAFE + SAFE_INSET,
        region.height - BOTTOM_SAFE - SAFE_INSET,
    );
    let r = rng.next_f64();
    let x = match side {
        Side::Left => clamp(
            GUTTER_SAMPLE_MARGIN + r * (gutters.left_max - GUTTER_SAMPLE_MARGIN),
            GUTTER_EDGE_INSET,
            gutters.left_max - GUTTER_EDGE_INSET,
        ),
        Side::Right => clamp(
            gutters.right_min + r * (region.width - gutters.right_min - GUTTER_SAMPLE_MARGIN),
            gutters.right_min + GUTTER_EDGE_INSET,
            region.width - GUTTER_EDGE_INSET,
        ),
    };
    Point::new(x, y)
}
