use crate::animations::{Animation, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::canvas::ops::{draw_pixel_blend, vertical_gradient};
use crate::canvas::shapes::{draw_line, fill_rect};
use crate::foundation::color::Rgb888;
use crate::foundation::math::map_range;
use crate::foundation::rng::FrameRng;

/// Frames per full tide cycle.
pub const TIDE_PERIOD: u64 = 600;

const SKY_TOP: Rgb888 = Rgb888::new(1, 2, 3);
const SKY_BOTTOM: Rgb888 = Rgb888::new(43, 86, 130);
const DRY_SAND: Rgb888 = Rgb888::new(253, 241, 215);
const WET_SAND: Rgb888 = Rgb888::new(236, 192, 117);
const SEA_STOPS: [Rgb888; 5] = [
    Rgb888::new(8, 122, 193),
    Rgb888::new(18, 156, 192),
    Rgb888::new(42, 212, 229),
    Rgb888::new(150, 233, 239),
    Rgb888::new(222, 236, 211),
];
const BIRD: Rgb888 = Rgb888::new(80, 80, 80);
const TRUNK: Rgb888 = Rgb888::new(170, 131, 102);
const LEAVES: [Rgb888; 3] = [
    Rgb888::new(57, 77, 0),
    Rgb888::new(70, 115, 1),
    Rgb888::new(70, 90, 5),
];

/// Sea height multiplier for a tide cycle position in `[0, 1)`.
///
/// Rises linearly to 1.3 over the first 35 %, falls back to 1.0 by 69 %, then rests.
pub fn tide_scale(cycle: f32) -> f32 {
    let c = cycle.rem_euclid(1.0);
    if c <= 0.35 {
        1.0 + (c / 0.35) * 0.3
    } else if c <= 0.69 {
        1.3 - ((c - 0.35) / (0.69 - 0.35)) * 0.3
    } else {
        1.0
    }
}

/// Opacity of the wet-sand band: darkens right at high tide, then dries out.
pub fn wet_sand_opacity(cycle: f32) -> f32 {
    let c = cycle.rem_euclid(1.0);
    if (0.34..=0.35).contains(&c) {
        0.2 + ((c - 0.34) / 0.01) * 0.2
    } else if c > 0.35 {
        0.4 - ((c - 0.35) / 0.65) * 0.2
    } else {
        0.2
    }
}

fn sea_color(t: f32) -> Rgb888 {
    let t = t.clamp(0.0, 1.0) * 4.0;
    let seg = (t as usize).min(3);
    SEA_STOPS[seg].lerp(SEA_STOPS[seg + 1], t - seg as f32)
}

/// Beach with a tidal sea, drifting bird and a leaning palm.
#[derive(Clone, Debug)]
pub struct Beach {
    extent: Extent,
    frame: u64,
    tide: f32,
}

impl Beach {
    /// Beach sized for `extent`.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            frame: 0,
            tide: 1.0,
        }
    }

    /// Current sea height multiplier.
    pub fn tide(&self) -> f32 {
        self.tide
    }

    /// First sea row and the sea height in rows for the current tide.
    pub fn sea_rows(&self) -> (i32, i32) {
        let h = self.extent.hf();
        let top = (h * 0.4) as i32;
        let height = (h * 0.3 * self.tide) as i32;
        (top, height)
    }

    fn draw_palm(&self, canvas: &mut dyn PixelCanvas) {
        let (w, h) = (self.extent.width, self.extent.height);
        let base_x = w - w / 6;
        let base_y = h - 4;
        let trunk_h = (h * 11 / 16).max(4);
        let mut crown = (base_x, base_y);
        for i in 0..trunk_h {
            let x = base_x + (i * i) / (trunk_h * 3);
            let y = base_y - i;
            fill_rect(canvas, x - 1, y, 3, 1, TRUNK, 255);
            crown = (x, y);
        }
        let reach = (w / 10).max(3);
        let fronds = [(-reach, 3), (-reach / 2, reach / 2 + 2), (reach / 2, reach / 2 + 2), (reach, 4), (0, -3)];
        for (i, (dx, dy)) in fronds.into_iter().enumerate() {
            let color = LEAVES[i % LEAVES.len()];
            let tip = (crown.0 + dx, crown.1 + dy);
            draw_line(canvas, crown, tip, color, 255);
            draw_line(canvas, (crown.0, crown.1 + 1), (tip.0, tip.1 + 1), color, 255);
        }
    }
}

impl Animation for Beach {
    fn init(&mut self, _rng: &mut FrameRng) {
        self.frame = 0;
        self.tide = 1.0;
    }

    fn render(&mut self, canvas: &mut dyn PixelCanvas, _ctx: &FrameCtx, _rng: &mut FrameRng) {
        let (w, h) = (self.extent.width, self.extent.height);
        let cycle = (self.frame % TIDE_PERIOD) as f32 / TIDE_PERIOD as f32;
        self.tide = tide_scale(cycle);
        let (sea_top, sea_height) = self.sea_rows();

        vertical_gradient(canvas, SKY_TOP, SKY_BOTTOM, 0, sea_top);
        fill_rect(canvas, 0, sea_top, w, h - sea_top, DRY_SAND, 255);

        let wet_rows = map_range(24, 0, 64, 0, h);
        let wet_alpha = (wet_sand_opacity(cycle) * 255.0) as u8;
        fill_rect(canvas, 0, sea_top, w, wet_rows, WET_SAND, wet_alpha);

        for y in sea_top..(sea_top + sea_height).min(h) {
            let t = (y - sea_top) as f32 / sea_height.max(1) as f32;
            let c = sea_color(t);
            for x in 0..w {
                canvas.set_pixel(x, y, c);
            }
        }

        let t = self.frame as f32 * 0.05;
        for i in 0..(w + 3) / 4 {
            let x = i * 4;
            let wave_y = sea_top + ((t * 3.0 + i as f32 * 0.3).sin() * 1.5) as i32;
            let alpha = (((t * 2.0 + i as f32 * 0.2).sin() * 0.3 + 0.3) * 255.0) as u8;
            draw_pixel_blend(canvas, x, wave_y, Rgb888::WHITE, alpha);
            draw_pixel_blend(canvas, x + 1, wave_y, Rgb888::WHITE, alpha);
        }

        let bird_x = (self.frame as f32 * 0.3).rem_euclid((w + 22) as f32) as i32 - 10;
        let bird_y = h / 8 + ((t * 0.5).sin() * 3.0) as i32;
        for (dx, dy) in [(0, -1), (-2, 0), (2, 0), (1, 1)] {
            canvas.set_pixel(bird_x + dx, bird_y + dy, BIRD);
        }

        self.draw_palm(canvas);
        self.frame = self.frame.wrapping_add(1);
    }

    fn name(&self) -> &'static str {
        "Beach"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animations/beach.rs"]
mod tests;
