//! Reply windows: placement next to an anchor and stacking order.
//!
//! Opening a note shows a fixed-size window just below its anchor phrase.
//! Windows overlap freely; the most recently opened or touched one is on top.
//! Stacking is driven by an explicit [`StackContext`] so every ordering
//! decision is visible to the caller and testable without a page.

#[cfg(test)]
#[path = "windows_test.rs"]
mod windows_test;

use std::collections::HashMap;

use crate::geom::{Point, Rect, Size};

pub const WINDOW_WIDTH: f64 = 400.0;
pub const WINDOW_HEIGHT: f64 = 420.0;
/// Distance kept between a window and its anchor or the viewport edges.
const WINDOW_MARGIN: f64 = 20.0;
/// Top offset of a window whose anchor is not on the page.
const UNANCHORED_TOP: f64 = 100.0;
/// First ordering token handed out.
pub const FIRST_Z: u32 = 1000;

// =============================================================
// Placement
// =============================================================

/// Top-left corner for a reply window, in viewport coordinates.
///
/// The window is centred below `anchor` and kept 20 units inside the
/// viewport horizontally. If it would run past the bottom it flips above the
/// anchor, but never above the top margin. Without an anchor the window is
/// centred horizontally at a fixed top offset.
#[must_use]
pub fn position_window(anchor: Option<Rect>, viewport: Size) -> Point {
    let Some(anchor) = anchor else {
        return Point::new((viewport.width - WINDOW_WIDTH) / 2.0, UNANCHORED_TOP);
    };

    let mut top = anchor.bottom() + WINDOW_MARGIN;
    let mut left = anchor.x + anchor.width / 2.0 - WINDOW_WIDTH / 2.0;

    if left < WINDOW_MARGIN {
        left = WINDOW_MARGIN;
    }
    if left + WINDOW_WIDTH > viewport.width - WINDOW_MARGIN {
        left = viewport.width - WINDOW_WIDTH - WINDOW_MARGIN;
    }
    if top + WINDOW_HEIGHT > viewport.height - WINDOW_MARGIN {
        top = (anchor.y - WINDOW_HEIGHT - WINDOW_MARGIN).max(WINDOW_MARGIN);
    }

    Point::new(left, top)
}

// =============================================================
// Stacking
// =============================================================

/// Issues strictly increasing ordering tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackContext {
    next: u32,
}

impl Default for StackContext {
    fn default() -> Self {
        Self { next: FIRST_Z }
    }
}

impl StackContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next token; later tokens stack above earlier ones.
    pub fn issue(&mut self) -> u32 {
        let z = self.next;
        self.next = self.next.saturating_add(1);
        z
    }
}

/// What [`WindowStack::open`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opened {
    /// A new window was created at this z.
    Created(u32),
    /// The window already existed and was raised to this z.
    Raised(u32),
}

/// Open reply windows keyed by note id.
#[derive(Debug, Clone, Default)]
pub struct WindowStack {
    ctx: StackContext,
    open: HashMap<String, u32>,
}

impl WindowStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the window for `id`, or raise it if it is already open.
    pub fn open(&mut self, id: &str) -> Opened {
        if let Some(z) = self.bring_to_front(id) {
            return Opened::Raised(z);
        }
        let z = self.ctx.issue();
        self.open.insert(id.to_owned(), z);
        Opened::Created(z)
    }

    /// Raise an open window above every other. `None` if it is not open.
    pub fn bring_to_front(&mut self, id: &str) -> Option<u32> {
        let slot = self.open.get_mut(id)?;
        *slot = self.ctx.issue();
        Some(*slot)
    }

    /// Close `id`; returns whether it was open.
    pub fn close(&mut self, id: &str) -> bool {
        self.open.remove(id).is_some()
    }

    /// Id of the window currently on top.
    #[must_use]
    pub fn topmost(&self) -> Option<&str> {
        self.open.iter().max_by_key(|(_, z)| **z).map(|(id, _)| id.as_str())
    }

    /// Close the window on top (the Escape key). Returns its id.
    pub fn close_topmost(&mut self) -> Option<String> {
        let id = self.topmost()?.to_owned();
        self.open.remove(&id);
        Some(id)
    }

    #[must_use]
    pub fn z_of(&self, id: &str) -> Option<u32> {
        self.open.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
