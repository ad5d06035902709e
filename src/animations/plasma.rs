use crate::animations::{Animation, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::foundation::color::hsl_to_rgb;
use crate::foundation::rng::FrameRng;

const SCALE: f32 = 0.08;

/// Three phase-shifted sine waves averaged into a purple/magenta hue band.
///
/// Stateless: the color of `(x, y)` depends only on position and clock time.
#[derive(Clone, Debug)]
pub struct Plasma {
    extent: Extent,
}

impl Plasma {
    /// Plasma sized for `extent`.
    pub fn new(extent: Extent) -> Self {
        Self { extent }
    }

    /// Normalized plasma value in `[-1, 1]` at `(x, y)` and time `t` seconds.
    pub fn sample(x: f32, y: f32, t: f32) -> f32 {
        let v1 = (x * SCALE + t).sin();
        let v2 = (y * SCALE + t * 1.2).sin();
        let v3 = ((x + y) * 0.04 + t * 0.8).sin();
        (v1 + v2 + v3) / 3.0
    }
}

impl Animation for Plasma {
    fn init(&mut self, _rng: &mut FrameRng) {}

    fn render(&mut self, canvas: &mut dyn PixelCanvas, ctx: &FrameCtx, _rng: &mut FrameRng) {
        let t = ctx.seconds();
        for y in 0..self.extent.height {
            for x in 0..self.extent.width {
                let p = Self::sample(x as f32, y as f32, t);
                let hue = (280.0 + p * 80.0).rem_euclid(360.0) / 360.0;
                let color = hsl_to_rgb(hue, 0.7 + p * 0.3, 0.4 + p * 0.3);
                canvas.set_pixel(x, y, color);
            }
        }
    }

    fn name(&self) -> &'static str {
        "Plasma"
    }
}
