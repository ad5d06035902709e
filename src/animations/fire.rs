use crate::animations::{Animation, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::foundation::color::Rgb888;
use crate::foundation::rng::FrameRng;

/// Rows with a flame value at or below this stay untouched.
const FLAME_FLOOR: f32 = 0.1;

/// Flame gradient rising from the bottom edge, wobbled by a sin*cos noise term.
#[derive(Clone, Debug)]
pub struct Fire {
    extent: Extent,
    frame: u64,
}

impl Fire {
    /// Fire sized for `extent`.
    pub fn new(extent: Extent) -> Self {
        Self { extent, frame: 0 }
    }

    /// Flame intensity at `(x, y)` for frame `f`. Grows towards the bottom row.
    pub fn flame(&self, x: f32, y: f32, f: f32) -> f32 {
        let noise = (x * 0.08 + f * 0.04).sin() * (y * 0.12 + f * 0.03).cos();
        ((y + noise * 8.0) / self.extent.hf()).max(0.0)
    }

    /// Color ramp: red first, then green above 0.3, then blue above 0.7.
    pub fn ramp(flame: f32) -> Rgb888 {
        let r = (flame * 240.0).clamp(0.0, 255.0) as u8;
        let g = ((flame - 0.3) * 350.0).clamp(0.0, 200.0) as u8;
        let b = ((flame - 0.7) * 600.0).clamp(0.0, 255.0) as u8;
        Rgb888::new(r, g, b)
    }
}

impl Animation for Fire {
    fn init(&mut self, _rng: &mut FrameRng) {
        self.frame = 0;
    }

    fn render(&mut self, canvas: &mut dyn PixelCanvas, _ctx: &FrameCtx, _rng: &mut FrameRng) {
        let f = self.frame as f32;
        for y in 0..self.extent.height {
            for x in 0..self.extent.width {
                let flame = self.flame(x as f32, y as f32, f);
                if flame > FLAME_FLOOR {
                    canvas.set_pixel(x, y, Self::ramp(flame));
                }
            }
        }
        self.frame = self.frame.wrapping_add(1);
    }

    fn name(&self) -> &'static str {
        "Fire"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animations/fire.rs"]
mod tests;
