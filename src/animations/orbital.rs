use std::f32::consts::{FRAC_PI_2, TAU};

use crate::animations::{Animation, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::canvas::ops::{apply_global_fade, draw_pixel_blend};
use crate::foundation::color::Rgb888;
use crate::foundation::math::lerp_f32;
use crate::foundation::rng::FrameRng;
use crate::foundation::trail::Trail;

/// Number of orbiting particles.
pub const ORBITAL_COUNT: usize = 20;
/// Trail capacity per particle.
pub const TRAIL_LEN: usize = 64;
/// Per-frame retention applied to the previous frame.
pub const RETENTION: u8 = 250;
/// Attraction strength. Acceleration is `G / d^2` along the unit displacement.
pub const GRAVITY: f32 = 2.0;
/// Speed clamp, in pixels per frame.
pub const MAX_SPEED: f32 = 0.8;

#[derive(Clone, Copy, Debug)]
struct Body {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    color: Rgb888,
    trail: Trail<TRAIL_LEN>,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            color: Rgb888::BLACK,
            trail: Trail::new(),
        }
    }
}

/// Particles pulled around a gravity well that itself bounces off the canvas edges.
#[derive(Clone, Debug)]
pub struct Orbital {
    extent: Extent,
    well: (f32, f32),
    well_velocity: (f32, f32),
    bodies: [Body; ORBITAL_COUNT],
}

impl Orbital {
    /// Orbital system sized for `extent`.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            well: (extent.wf() / 2.0, extent.hf() / 2.0),
            well_velocity: (0.35, 0.25),
            bodies: [Body::default(); ORBITAL_COUNT],
        }
    }

    /// Current gravity well position.
    pub fn well(&self) -> (f32, f32) {
        self.well
    }

    /// Particle positions.
    pub fn positions(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.bodies.iter().map(|b| (b.x, b.y))
    }

    /// Trail length of each particle.
    pub fn trail_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.bodies.iter().map(|b| b.trail.len())
    }

    /// Particle speeds in pixels per frame.
    pub fn speeds(&self) -> impl Iterator<Item = f32> + '_ {
        self.bodies.iter().map(|b| b.vx.hypot(b.vy))
    }

    fn step_well(&mut self) {
        let max_x = self.extent.wf() - 1.0;
        let max_y = self.extent.hf() - 1.0;
        let (mut x, mut y) = self.well;
        let (mut vx, mut vy) = self.well_velocity;
        x += vx;
        y += vy;
        if x <= 0.0 || x >= max_x {
            vx = -vx;
            x = x.clamp(0.0, max_x.max(0.0));
        }
        if y <= 0.0 || y >= max_y {
            vy = -vy;
            y = y.clamp(0.0, max_y.max(0.0));
        }
        self.well = (x, y);
        self.well_velocity = (vx, vy);
    }
}

impl Animation for Orbital {
    fn init(&mut self, rng: &mut FrameRng) {
        self.well = (self.extent.wf() / 2.0, self.extent.hf() / 2.0);
        self.well_velocity = (0.35, 0.25);
        let reach = self.extent.hf().min(self.extent.wf()) * 0.7;
        for body in &mut self.bodies {
            let angle = rng.range_f32(0.0, TAU);
            let dist = rng.range_f32(5.0, reach.max(6.0));
            body.x = self.well.0 + angle.cos() * dist;
            body.y = self.well.1 + angle.sin() * dist;

            // Roughly circular orbit speed, jittered so the swarm spreads out.
            let speed = ((GRAVITY / dist).sqrt() * rng.range_f32(0.8, 1.2)).min(MAX_SPEED);
            let perp = angle + FRAC_PI_2;
            body.vx = perp.cos() * speed;
            body.vy = perp.sin() * speed;

            body.color = Rgb888::new(
                rng.channel(100, 255),
                rng.channel(100, 255),
                rng.channel(100, 255),
            );
            body.trail.clear();
        }
    }

    fn render(&mut self, canvas: &mut dyn PixelCanvas, _ctx: &FrameCtx, _rng: &mut FrameRng) {
        apply_global_fade(canvas, RETENTION);
        self.step_well();

        let (gx, gy) = self.well;
        let (w, h) = (self.extent.wf(), self.extent.hf());
        for body in &mut self.bodies {
            body.trail.push(body.x, body.y);

            let dx = gx - body.x;
            let dy = gy - body.y;
            let d2 = dx * dx + dy * dy;
            if d2 > 1.0 {
                let inv = d2.sqrt().recip();
                let force = GRAVITY * inv * inv * inv;
                body.vx += dx * force;
                body.vy += dy * force;
            }

            let speed = body.vx.hypot(body.vy);
            if speed > MAX_SPEED {
                let k = MAX_SPEED / speed;
                body.vx *= k;
                body.vy *= k;
            }

            body.x += body.vx;
            body.y += body.vy;
            if body.x < 0.0 {
                body.x = w - 1.0;
            } else if body.x >= w {
                body.x = 0.0;
            }
            if body.y < 0.0 {
                body.y = h - 1.0;
            } else if body.y >= h {
                body.y = 0.0;
            }

            let tail = body.color.halved();
            for (age, (tx, ty)) in body.trail.iter() {
                let fade = lerp_f32(1.0, 0.0, age as f32 / TRAIL_LEN as f32);
                draw_pixel_blend(canvas, tx as i32, ty as i32, tail, (fade * 128.0) as u8);
            }
            draw_pixel_blend(canvas, body.x as i32, body.y as i32, body.color, 255);
        }

        draw_pixel_blend(canvas, gx as i32, gy as i32, Rgb888::WHITE, 128);
    }

    fn name(&self) -> &'static str {
        "Orbital"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animations/orbital.rs"]
mod tests;
