//! Mark kinds, stroke classes, and their assignment to slots.
//!
//! The base sets are tiny (eight kinds, three weights) while a pass asks for
//! up to 28 marks. Each set is shuffled, cycled to the requested length, then
//! shuffled again with a third seed so the modulo cycling does not show up as
//! a visible repeating pattern down the page.

#[cfg(test)]
#[path = "assign_test.rs"]
mod assign_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CLASS_RESHUFFLE_SEED, CLASS_SHUFFLE_SEED, KIND_RESHUFFLE_SEED, KIND_SHUFFLE_SEED};
use crate::rng::{Mulberry32, shuffle};

/// The small doodles scattered through the margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkKind {
    Star,
    Spiral,
    Heart,
    Sparkle,
    Bolt,
    Squiggle,
    MiniArrow,
    Flower,
}

impl MarkKind {
    /// Every kind in base order (the order the first shuffle starts from).
    pub const ALL: [MarkKind; 8] = [
        MarkKind::Star,
        MarkKind::Spiral,
        MarkKind::Heart,
        MarkKind::Sparkle,
        MarkKind::Bolt,
        MarkKind::Squiggle,
        MarkKind::MiniArrow,
        MarkKind::Flower,
    ];

    /// Spacing radius used for collision checks. Not the drawn extent.
    #[must_use]
    pub fn footprint(self) -> f64 {
        match self {
            MarkKind::Squiggle => 26.0,
            MarkKind::Bolt | MarkKind::Spiral | MarkKind::MiniArrow => 18.0,
            MarkKind::Star | MarkKind::Flower | MarkKind::Heart | MarkKind::Sparkle => 14.0,
        }
    }
}

/// Visual weight of a stroke, mapped to a CSS class on the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeClass {
    /// Dark ink.
    Ink,
    /// Default pencil weight.
    Plain,
    /// Accent colour, used for some text annotations.
    Accent,
}

impl StrokeClass {
    /// Base weights for margin marks. Ink appears twice so it dominates.
    pub const MARGIN_BASE: [StrokeClass; 3] = [StrokeClass::Ink, StrokeClass::Plain, StrokeClass::Ink];

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            StrokeClass::Ink => "doodle-stroke doodle-ink",
            StrokeClass::Plain => "doodle-stroke",
            StrokeClass::Accent => "doodle-stroke doodle-accent",
        }
    }
}

/// Kind and class for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub kind: MarkKind,
    pub class: StrokeClass,
}

/// Shuffle `base` with `first_seed`, cycle it to `len`, shuffle again with `second_seed`.
#[must_use]
pub fn decorrelated_sequence<T: Copy>(base: &[T], len: usize, first_seed: u32, second_seed: u32) -> Vec<T> {
    if base.is_empty() {
        return Vec::new();
    }
    let mut shuffled = base.to_vec();
    shuffle(&mut shuffled, &mut Mulberry32::new(first_seed));

    let mut cycled: Vec<T> = shuffled.iter().copied().cycle().take(len).collect();
    shuffle(&mut cycled, &mut Mulberry32::new(second_seed));
    cycled
}

/// Assignments for `total` marks, in placement order.
#[must_use]
pub fn assign(total: usize) -> Vec<Assignment> {
    let kinds = decorrelated_sequence(&MarkKind::ALL, total, KIND_SHUFFLE_SEED, KIND_RESHUFFLE_SEED);
    let classes = decorrelated_sequence(&StrokeClass::MARGIN_BASE, total, CLASS_SHUFFLE_SEED, CLASS_RESHUFFLE_SEED);
    kinds.into_iter().zip(classes).map(|(kind, class)| Assignment { kind, class }).collect()
}
