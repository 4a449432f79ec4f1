//! Seeded random stream.
//!
//! The layout must come out identical on every machine and every run, so the
//! generator is a small 32-bit mix (mulberry32) with fully specified wrapping
//! arithmetic rather than anything that reads ambient entropy. It is fast and
//! statistically weak, which is fine for wobbling pen strokes.

#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

/// 2^32 as a float, the divisor that maps a `u32` into `[0, 1)`.
const U32_RANGE: f64 = 4_294_967_296.0;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Deterministic stream of floats in `[0, 1)`.
///
/// The stream never ends; [`Iterator::next`] always returns `Some`.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the stream and return the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let a = self.state;
        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        f64::from(t ^ (t >> 14)) / U32_RANGE
    }

    /// Next value re-centred on zero: `[-0.5, 0.5)`.
    pub fn centered(&mut self) -> f64 {
        self.next_f64() - 0.5
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        #[allow(clippy::cast_precision_loss)]
        let scaled = self.next_f64() * len as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = scaled.floor() as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// 32-bit FNV-1a over the UTF-16 code units of `s`.
///
/// Used to turn an anchor id into a stroke seed so the same phrase always
/// gets the same circle.
#[must_use]
pub fn hash_str(s: &str) -> u32 {
    s.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME))
}

/// In-place Fisher–Yates shuffle driven by `rng`.
pub fn shuffle<T>(items: &mut [T], rng: &mut Mulberry32) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}
