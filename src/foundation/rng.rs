use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded pseudo-random source shared by the animation units.
///
/// Draws follow the microcontroller convention: `range(lo, hi)` is half-open.
#[derive(Debug, Clone)]
pub struct FrameRng {
    inner: StdRng,
}

impl FrameRng {
    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Integer in `[lo, hi)`. Returns `lo` when the range is empty.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..hi)
    }

    /// Float in `[lo, hi)`. Returns `lo` when the range is empty.
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if !lo.is_finite() || !hi.is_finite() || hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..hi)
    }

    /// Bernoulli draw succeeding with probability `num / den`.
    pub fn chance(&mut self, num: u32, den: u32) -> bool {
        if den == 0 {
            return false;
        }
        self.inner.random_range(0..den) < num
    }

    /// Random byte in `[lo, hi)`, used for particle colors.
    pub fn channel(&mut self, lo: u8, hi: u8) -> u8 {
        self.range(i32::from(lo), i32::from(hi)) as u8
    }
}

impl Default for FrameRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}
