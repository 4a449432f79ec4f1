//! Marginal notes: the questions pinned beside the letter.
//!
//! Each note belongs to an anchor phrase in the letter and sits in the gutter
//! on its side, vertically centred on the phrase. Its prompt and context also
//! travel with a reader's reply to the note service.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use serde::Serialize;

use crate::geom::{Point, Rect, Size};
use crate::region::Side;

/// Minimum distance between a note and the top/bottom of the margins.
const NOTE_EDGE_PAD_Y: f64 = 12.0;
/// Minimum distance between a note and the left/right of the margins.
const NOTE_EDGE_PAD_X: f64 = 8.0;
/// Gap between the letter column and a note.
const NOTE_GUTTER: f64 = 28.0;

/// A marginal note and the reply prompt it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginalNote {
    pub id: &'static str,
    pub anchor_id: &'static str,
    /// Handwritten label shown in the margin.
    pub text: &'static str,
    pub side: Side,
    pub writing_href: Option<&'static str>,
    /// Question shown in the reply window.
    pub prompt: &'static str,
    pub context: &'static str,
}

pub const MARGINAL_NOTES: [MarginalNote; 7] = [
    MarginalNote {
        id: "beginner",
        anchor_id: "beginner",
        text: "what are you a beginner at?",
        side: Side::Right,
        writing_href: Some("writing.html#topic-beginner"),
        prompt: "What are you learning right now that makes you feel like a beginner again?",
        context: "On being a perpetual beginner...",
    },
    MarginalNote {
        id: "coordinate",
        anchor_id: "coordinate",
        text: "coordination without coercion?",
        side: Side::Left,
        writing_href: Some("writing.html#topic-coordination"),
        prompt: "What's an example of coordination that actually worked — or spectacularly failed?",
        context: "On interfaces for coordination at scale...",
    },
    MarginalNote {
        id: "invert",
        anchor_id: "invert",
        text: "what would this actually look like?",
        side: Side::Right,
        writing_href: Some("writing.html#topic-inversion"),
        prompt: "If the internet were built around individuals instead of platforms, what would change first?",
        context: "On inverting who the internet is built around...",
    },
    MarginalNote {
        id: "limits",
        anchor_id: "limits",
        text: "is this actually true?",
        side: Side::Left,
        writing_href: Some("writing.html#topic-money"),
        prompt: "Do you think money is really approaching its physical limits — or is this overstated?",
        context: "On monetary coordination collapsing toward its physical limits...",
    },
    MarginalNote {
        id: "freed",
        anchor_id: "freed",
        text: "what would you do with it?",
        side: Side::Right,
        writing_href: Some("writing.html#topic-capacity"),
        prompt: "If coordination suddenly became cheap, what would you spend the freed-up time and attention on?",
        context: "On what is freed up as coordination costs collapse...",
    },
    MarginalNote {
        id: "responsibility",
        anchor_id: "responsibility",
        text: "who holds the responsibility?",
        side: Side::Left,
        writing_href: Some("writing.html#topic-responsibility"),
        prompt: "When systems get more efficient, who ends up holding the responsibility — and is that good?",
        context: "On responsibility becoming more concentrated...",
    },
    MarginalNote {
        id: "living",
        anchor_id: "living",
        text: "letters deserve responses",
        side: Side::Right,
        writing_href: Some("writing.html#topic-living-letter"),
        prompt: "What's a question you've been carrying that you haven't found a good place to put yet?",
        context: "On this being a living letter...",
    },
];

/// Look up a note by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static MarginalNote> {
    MARGINAL_NOTES.iter().find(|n| n.id == id)
}

/// Top-left position of a note of `note` size beside `anchor`.
///
/// All rectangles are relative to the margins overlay of size `margins`.
/// The note is centred on the anchor vertically and placed `28` units outside
/// the letter on `side`, then clamped to stay inside the overlay.
#[must_use]
pub fn position_note(side: Side, anchor: Rect, letter: Rect, note: Size, margins: Size) -> Point {
    let raw_top = anchor.y + anchor.height / 2.0 - note.height / 2.0;
    let max_top = NOTE_EDGE_PAD_Y.max(margins.height - note.height - NOTE_EDGE_PAD_Y);
    let top = NOTE_EDGE_PAD_Y.max(raw_top.min(max_top));

    let raw_left = match side {
        Side::Right => letter.right() + NOTE_GUTTER,
        Side::Left => letter.x - note.width - NOTE_GUTTER,
    };
    let max_left = NOTE_EDGE_PAD_X.max(margins.width - note.width - NOTE_EDGE_PAD_X);
    let left = NOTE_EDGE_PAD_X.max(raw_left.min(max_left));

    Point::new(left, top)
}
