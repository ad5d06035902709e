use std::f32::consts::TAU;

use crate::animations::{Animation, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::canvas::ops::apply_global_fade;
use crate::canvas::shapes::{draw_circle, fill_circle};
use crate::foundation::color::hsl_to_rgb;
use crate::foundation::rng::FrameRng;

/// Pool size.
pub const PARTICLE_COUNT: usize = 15;
/// Per-frame retention applied to the previous frame.
pub const RETENTION: u8 = 245;
/// Horizontal distance of the ghost copy behind each particle.
pub const GHOST_OFFSET: f32 = 8.0;
/// Ghost opacity (about 30 %).
pub const GHOST_ALPHA: u8 = 77;
/// Particles wrap this far beyond either edge so they slide fully in and out.
const EDGE_MARGIN: f32 = 6.0;

#[derive(Clone, Copy, Debug, Default)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    phase: f32,
    hue: f32,
}

/// Swarm drifting right while bobbing on per-particle sine phases.
///
/// Nothing is cleared between frames; the canvas is aged with [`RETENTION`] instead,
/// which leaves a decaying streak behind every particle.
#[derive(Clone, Debug)]
pub struct Particles {
    extent: Extent,
    pool: [Particle; PARTICLE_COUNT],
    frame: u64,
}

impl Particles {
    /// Swarm sized for `extent`.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            pool: [Particle::default(); PARTICLE_COUNT],
            frame: 0,
        }
    }

    /// Current particle centres.
    pub fn positions(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.pool.iter().map(|p| (p.x, p.y))
    }

    fn amplitude(&self) -> f32 {
        self.extent.hf() * 25.0 / 64.0
    }

    fn span(&self) -> f32 {
        self.extent.wf() + 2.0 * EDGE_MARGIN
    }
}

impl Animation for Particles {
    fn init(&mut self, rng: &mut FrameRng) {
        self.frame = 0;
        let span = self.span();
        let center = self.extent.hf() / 2.0;
        for (i, p) in self.pool.iter_mut().enumerate() {
            p.x = rng.range_f32(0.0, span) - EDGE_MARGIN;
            p.y = center;
            p.vx = rng.range_f32(0.3, 0.75);
            p.phase = rng.range_f32(0.0, TAU);
            p.hue = i as f32 * 40.0 + rng.range_f32(0.0, 20.0);
        }
    }

    fn render(&mut self, canvas: &mut dyn PixelCanvas, _ctx: &FrameCtx, _rng: &mut FrameRng) {
        apply_global_fade(canvas, RETENTION);

        let f = self.frame as f32;
        let span = self.span();
        let center = self.extent.hf() / 2.0;
        let amp = self.amplitude();
        let right = self.extent.wf() + EDGE_MARGIN;

        for p in &mut self.pool {
            p.x += p.vx;
            if p.x >= right {
                p.x -= span;
            } else if p.x < -EDGE_MARGIN {
                p.x += span;
            }
            p.y = center + (f * 0.02 + p.phase).sin() * amp;

            let hue = (f * 0.8 + p.hue).rem_euclid(360.0) / 360.0;
            let color = hsl_to_rgb(hue, 0.9, 0.6);
            let (x, y) = (p.x as i32, p.y as i32);
            draw_circle(canvas, x, y, 2, color, 255);
            fill_circle(canvas, x, y, 1, color, 255);
            draw_circle(canvas, (p.x - GHOST_OFFSET) as i32, y, 1, color, GHOST_ALPHA);
        }

        self.frame = self.frame.wrapping_add(1);
    }

    fn name(&self) -> &'static str {
        "Particles"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animations/particles.rs"]
mod tests;
