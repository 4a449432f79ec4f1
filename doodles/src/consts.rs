//! Shared numeric constants for the doodles crate.

// ── Vertical safe area ──────────────────────────────────────────

/// Space kept clear at the top of the margins (navigation and header).
pub const TOP_SAFE: f64 = 90.0;

/// Space kept clear at the bottom of the margins.
pub const BOTTOM_SAFE: f64 = 60.0;

/// Extra inset from the safe area applied to candidate `y` positions.
pub const SAFE_INSET: f64 = 10.0;

// ── Gutters ─────────────────────────────────────────────────────

/// Gap between the letter column and the usable gutter.
pub const GUTTER_PAD: f64 = 22.0;

/// Floor for the left gutter edge and ceiling offset for the right one.
pub const GUTTER_FLOOR: f64 = 40.0;

/// A gutter must be strictly wider than this for the dense layout.
pub const DENSE_GUTTER_MIN: f64 = 70.0;

/// A side must be strictly wider than this to receive marks at all.
pub const USABLE_GUTTER_MIN: f64 = 40.0;

/// Outer margin of the sampled `x` range inside a gutter.
pub const GUTTER_SAMPLE_MARGIN: f64 = 18.0;

/// Clamp inset from the gutter edges.
pub const GUTTER_EDGE_INSET: f64 = 12.0;

// ── Density ─────────────────────────────────────────────────────

pub const DENSE_TOTAL: usize = 28;
pub const DENSE_BANDS: usize = 16;
pub const SPARSE_TOTAL: usize = 16;
pub const SPARSE_BANDS: usize = 10;

/// Fraction of a band's height a candidate may stray from the band middle.
pub const BAND_JITTER: f64 = 0.6;

// ── Placement ───────────────────────────────────────────────────

pub const DEFAULT_ATTEMPTS: usize = 12;
pub const DEFAULT_PADDING: f64 = 8.0;

// ── Seeds ───────────────────────────────────────────────────────

pub const KIND_SHUFFLE_SEED: u32 = 12_345;
pub const CLASS_SHUFFLE_SEED: u32 = 67_890;
pub const KIND_RESHUFFLE_SEED: u32 = 11_111;
pub const CLASS_RESHUFFLE_SEED: u32 = 22_222;

/// Offset of the sizing stream from a mark's drawing seed.
pub const SIZE_SEED_OFFSET: u32 = 555;

pub const PAPER_PLANE_SEED: u32 = 131;
pub const CURLY_BRACKET_SEED: u32 = 149;
pub const POINTER_ARROW_SEED: u32 = 47;
