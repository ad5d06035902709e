use std::f32::consts::TAU;

use crate::animations::{Animation, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::canvas::ops::draw_pixel_blend;
use crate::foundation::color::Rgb888;
use crate::foundation::math::unit_to_u8;
use crate::foundation::rng::FrameRng;

/// Number of stars.
pub const STAR_COUNT: usize = 50;
/// Stars dimmer than this are not drawn at all.
pub const MIN_BRIGHTNESS: f32 = 0.15;
/// Stars brighter than this get a 4-neighbour glow.
pub const GLOW_BRIGHTNESS: f32 = 0.6;
/// Night sky fill.
pub const SKY: Rgb888 = Rgb888::new(0, 0, 51);

#[derive(Clone, Copy, Debug, Default)]
struct Star {
    x: i32,
    y: i32,
    phase: f32,
    speed: f32,
}

/// Twinkling starfield.
#[derive(Clone, Debug)]
pub struct Stars {
    extent: Extent,
    stars: [Star; STAR_COUNT],
}

impl Stars {
    /// Starfield sized for `extent`.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            stars: [Star::default(); STAR_COUNT],
        }
    }

    /// Twinkle brightness for a phase, in `[0, 1]`.
    pub fn brightness(phase: f32) -> f32 {
        (phase.sin() + 1.0) / 2.0
    }
}

impl Animation for Stars {
    fn init(&mut self, rng: &mut FrameRng) {
        for star in &mut self.stars {
            star.x = rng.range(0, self.extent.width);
            star.y = rng.range(0, self.extent.height);
            star.phase = rng.range_f32(0.0, TAU);
            star.speed = rng.range_f32(0.05, 0.15);
        }
    }

    fn render(&mut self, canvas: &mut dyn PixelCanvas, _ctx: &FrameCtx, _rng: &mut FrameRng) {
        canvas.fill(SKY);
        for star in &mut self.stars {
            star.phase = (star.phase + star.speed).rem_euclid(TAU);
            let b = Self::brightness(star.phase);
            if b < MIN_BRIGHTNESS {
                continue;
            }
            let level = unit_to_u8(b);
            canvas.set_pixel(star.x, star.y, Rgb888::new(level, level, level.saturating_add(20)));
            if b > GLOW_BRIGHTNESS {
                let glow = Rgb888::gray(level);
                for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                    draw_pixel_blend(canvas, star.x + dx, star.y + dy, glow, 64);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "Stars"
    }
}
