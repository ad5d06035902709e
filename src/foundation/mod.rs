//! Shared building blocks: colors, errors, clocks, randomness and fixed-capacity storage.

/// Monotonic time sources.
pub mod clock;
/// Color types and pure color math.
pub mod color;
/// Error taxonomy.
pub mod error;
pub(crate) mod math;
/// Seeded pseudo-random source.
pub mod rng;
/// Fixed-capacity position history.
pub mod trail;
