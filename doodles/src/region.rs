//! Canvas region and gutter geometry.
//!
//! The margins overlay spans the whole page; the letter column sits somewhere
//! in the middle of it. Decorations live in the two strips (gutters) either
//! side of the letter. Everything here is plain arithmetic on four numbers the
//! host measures: overlay width/height and the letter's left/right edges.

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DENSE_BANDS, DENSE_GUTTER_MIN, DENSE_TOTAL, GUTTER_FLOOR, GUTTER_PAD, SPARSE_BANDS, SPARSE_TOTAL,
    USABLE_GUTTER_MIN,
};

/// Measured geometry of the margins overlay, relative to its own origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub width: f64,
    pub height: f64,
    /// Left edge of the letter column.
    pub letter_left: f64,
    /// Right edge of the letter column.
    pub letter_right: f64,
}

impl Region {
    #[must_use]
    pub fn new(width: f64, height: f64, letter_left: f64, letter_right: f64) -> Self {
        Self { width, height, letter_left, letter_right }
    }

    /// Floor width and height to whole units, never below 1.
    ///
    /// Zero-area or non-finite measurements still produce a usable (if
    /// degenerate) layout instead of an error.
    #[must_use]
    pub fn normalized(&self) -> Region {
        Region { width: self.width.floor().max(1.0), height: self.height.floor().max(1.0), ..*self }
    }

    #[must_use]
    pub fn gutters(&self) -> Gutters {
        let left_max = GUTTER_FLOOR.max(self.letter_left - GUTTER_PAD);
        let right_min = (self.width - GUTTER_FLOOR).min(self.letter_right + GUTTER_PAD);
        Gutters { left_max, right_min, left_width: left_max.max(0.0), right_width: (self.width - right_min).max(0.0) }
    }

    #[must_use]
    pub fn density(&self) -> Density {
        self.gutters().density()
    }
}

/// Usable strips either side of the letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gutters {
    /// Rightmost usable `x` of the left gutter.
    pub left_max: f64,
    /// Leftmost usable `x` of the right gutter.
    pub right_min: f64,
    pub left_width: f64,
    pub right_width: f64,
}

impl Gutters {
    /// Dense as soon as either gutter is strictly wider than the threshold.
    #[must_use]
    pub fn density(&self) -> Density {
        if self.left_width > DENSE_GUTTER_MIN || self.right_width > DENSE_GUTTER_MIN {
            Density::Dense
        } else {
            Density::Sparse
        }
    }

    #[must_use]
    pub fn width(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left_width,
            Side::Right => self.right_width,
        }
    }

    /// Whether `side` is wide enough to hold a mark.
    #[must_use]
    pub fn is_usable(&self, side: Side) -> bool {
        self.width(side) > USABLE_GUTTER_MIN
    }

    /// `preferred` if it is usable, otherwise the opposite side.
    ///
    /// When neither side is usable the opposite side is still returned; the
    /// placement clamps keep the mark inside the region.
    #[must_use]
    pub fn resolve(&self, preferred: Side) -> Side {
        if self.is_usable(preferred) { preferred } else { preferred.opposite() }
    }
}

/// Which gutter a mark goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Even slots go left, odd slots go right.
    #[must_use]
    pub fn for_slot(index_in_band: usize) -> Side {
        if index_in_band % 2 == 0 { Side::Left } else { Side::Right }
    }
}

/// How many marks a layout pass aims for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Dense,
    Sparse,
}

impl Density {
    #[must_use]
    pub fn total(self) -> usize {
        match self {
            Density::Dense => DENSE_TOTAL,
            Density::Sparse => SPARSE_TOTAL,
        }
    }

    #[must_use]
    pub fn bands(self) -> usize {
        match self {
            Density::Dense => DENSE_BANDS,
            Density::Sparse => SPARSE_BANDS,
        }
    }
}
