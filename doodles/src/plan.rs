//! Band planning.
//!
//! The usable vertical range of the margins is cut into equal horizontal
//! bands and every band is given a target number of marks, so doodles spread
//! from top to bottom instead of clumping. This step uses no randomness.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use crate::consts::{BOTTOM_SAFE, TOP_SAFE};
use crate::region::{Density, Region};

/// Target mark counts per band for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BandPlan {
    pub density: Density,
    /// Total marks requested across all bands.
    pub total: usize,
    pub band_height: f64,
    counts: Vec<usize>,
}

/// One horizontal slice of the usable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub index: usize,
    pub top: f64,
    pub height: f64,
    /// Marks this band should receive.
    pub count: usize,
}

impl Band {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.top + self.bottom()) / 2.0
    }
}

impl BandPlan {
    /// Plan bands for an already normalized region.
    #[must_use]
    pub fn for_region(region: &Region) -> Self {
        let density = region.density();
        let usable = (region.height - TOP_SAFE - BOTTOM_SAFE).max(1.0);
        Self::new(density, usable)
    }

    /// Split `usable` height into `density.bands()` bands carrying `density.total()` marks.
    #[must_use]
    pub fn new(density: Density, usable: f64) -> Self {
        let total = density.total();
        let band_count = density.bands();
        #[allow(clippy::cast_precision_loss)]
        let band_height = usable / band_count as f64;
        Self { density, total, band_height, counts: split_counts(total, band_count) }
    }

    #[must_use]
    pub fn band_count(&self) -> usize {
        self.counts.len()
    }

    /// Per-band counts in top-to-bottom order.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn bands(&self) -> impl Iterator<Item = Band> + '_ {
        self.counts.iter().enumerate().map(|(index, &count)| {
            #[allow(clippy::cast_precision_loss)]
            let top = TOP_SAFE + index as f64 * self.band_height;
            Band { index, top, height: self.band_height, count }
        })
    }
}

/// Divide `total` across `bands`, giving the remainder to the earliest bands.
///
/// The result always sums to `total`. Zero bands yields an empty split.
#[must_use]
pub fn split_counts(total: usize, bands: usize) -> Vec<usize> {
    if bands == 0 {
        return Vec::new();
    }
    let per_band = total / bands;
    let remainder = total % bands;
    (0..bands).map(|band| per_band + usize::from(band < remainder)).collect()
}
