//! The animation catalog: one simulation per visual effect behind a uniform
//! [`Animation`] contract, plus the closed [`AnimationId`] tag set used for lookup.
//!
//! Every unit keeps its state in fixed-size fields sized at construction. `init` resets
//! that state in place and `render` advances it by exactly one frame.

use std::fmt;
use std::str::FromStr;

use crate::canvas::buffer::PixelCanvas;
use crate::foundation::error::PanelError;
use crate::foundation::rng::FrameRng;

/// Beach scene with a tidal sea.
pub mod beach;
/// Enum dispatch over every unit and the identity-indexed catalog.
pub mod catalog;
/// Flame gradient.
pub mod fire;
/// Rotating spiral.
pub mod galaxy;
/// Storm with progressively revealed bolts.
pub mod lightning;
/// Particles orbiting a bouncing gravity well.
pub mod orbital;
/// Drifting particle swarm.
pub mod particles;
/// Grid walkers with fading trails.
pub mod pipes;
/// Sine plasma field.
pub mod plasma;
/// Parallax city skyline.
pub mod skyline;
/// Twinkling starfield.
pub mod stars;

pub use catalog::{AnimationUnit, Catalog};

/// Identity of one catalog entry. Declaration order is the auto-cycle order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimationId {
    /// Phase-shifted sine plasma field.
    Plasma,
    /// Drifting particle swarm with decaying trails.
    Particles,
    /// Noise-modulated flame gradient.
    Fire,
    /// Parallax city skyline under a starry sky.
    Skyline,
    /// Rotating multi-arm spiral.
    Galaxy,
    /// Storm with progressively revealed bolts and rain.
    Lightning,
    /// Grid walkers leaving fading pipe trails.
    Pipes,
    /// Particles orbiting a bouncing gravity point.
    Orbital,
    /// Twinkling starfield.
    Stars,
    /// Beach scene with a tidal sea.
    Beach,
}

impl AnimationId {
    /// Number of catalog entries.
    pub const COUNT: usize = 10;

    /// Every identity in cycle order.
    pub const ALL: [AnimationId; Self::COUNT] = [
        AnimationId::Plasma,
        AnimationId::Particles,
        AnimationId::Fire,
        AnimationId::Skyline,
        AnimationId::Galaxy,
        AnimationId::Lightning,
        AnimationId::Pipes,
        AnimationId::Orbital,
        AnimationId::Stars,
        AnimationId::Beach,
    ];

    /// Position in the catalog.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Identity at catalog position `idx`, if any.
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// The identity after this one, wrapping at the end of the catalog.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Stable lowercase key, as used in config files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            AnimationId::Plasma => "plasma",
            AnimationId::Particles => "particles",
            AnimationId::Fire => "fire",
            AnimationId::Skyline => "skyline",
            AnimationId::Galaxy => "galaxy",
            AnimationId::Lightning => "lightning",
            AnimationId::Pipes => "pipes",
            AnimationId::Orbital => "orbital",
            AnimationId::Stars => "stars",
            AnimationId::Beach => "beach",
        }
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AnimationId {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| PanelError::validation(format!("unknown animation '{s}'")))
    }
}

/// Per-frame inputs shared by every unit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameCtx {
    /// Monotonic clock reading for this frame.
    pub now_ms: u64,
}

impl FrameCtx {
    /// Build the context for a clock reading.
    pub fn at(now_ms: u64) -> Self {
        Self { now_ms }
    }

    /// Clock reading in seconds.
    pub fn seconds(&self) -> f32 {
        // f64 keeps millisecond precision for long uptimes before narrowing.
        (self.now_ms as f64 * 0.001) as f32
    }
}

/// Capability set every catalog entry implements.
pub trait Animation {
    /// Reset private state to a fresh start. Safe to call any number of times.
    fn init(&mut self, rng: &mut FrameRng);

    /// Advance by one frame and draw into `canvas`.
    fn render(&mut self, canvas: &mut dyn PixelCanvas, ctx: &FrameCtx, rng: &mut FrameRng);

    /// Stable display label.
    fn name(&self) -> &'static str;
}

/// Canvas extent handed to units at construction so `init` can place things
/// without seeing the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Extent {
    /// Extent of a `width x height` canvas. Each edge is at least one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.clamp(1, i32::MAX as u32) as i32,
            height: height.clamp(1, i32::MAX as u32) as i32,
        }
    }

    pub(crate) fn wf(self) -> f32 {
        self.width as f32
    }

    pub(crate) fn hf(self) -> f32 {
        self.height as f32
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(
            crate::canvas::buffer::DISPLAY_WIDTH,
            crate::canvas::buffer::DISPLAY_HEIGHT,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animations/mod.rs"]
mod tests;
