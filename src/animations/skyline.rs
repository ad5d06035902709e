use crate::animations::{Animation, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::canvas::ops::{draw_pixel_blend, vertical_gradient};
use crate::canvas::shapes::{draw_line, fill_rect};
use crate::foundation::color::Rgb888;
use crate::foundation::math::map_range;
use crate::foundation::rng::FrameRng;

/// Parallax layers, far to near.
pub const LAYERS: usize = 3;
/// Buildings per layer.
pub const BUILDINGS_PER_LAYER: usize = 14;
/// Scroll speed of each layer in pixels per frame.
pub const LAYER_SPEED: [f32; LAYERS] = [0.1, 0.25, 0.45];

const SKY_TOP: Rgb888 = Rgb888::new(0, 0, 51);
const SKY_BOTTOM: Rgb888 = Rgb888::new(0, 0, 102);
const SKY_STARS: usize = 30;
const WINDOW: Rgb888 = Rgb888::new(255, 214, 120);
const BEACON: Rgb888 = Rgb888::new(255, 40, 40);
// Buildings re-enter this far left of column 0.
const LEAD_IN: f32 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Roof {
    #[default]
    Flat,
    Slanted,
    Spire,
    Antenna,
}

#[derive(Clone, Copy, Debug, Default)]
struct Building {
    offset: f32,
    width: i32,
    height: i32,
    roof: Roof,
    windows: u32,
}

#[derive(Clone, Copy, Debug, Default)]
struct Layer {
    buildings: [Building; BUILDINGS_PER_LAYER],
    span: f32,
    scroll: f32,
}

/// City skyline scrolling at per-layer parallax speeds under a twinkling sky.
#[derive(Clone, Debug)]
pub struct Skyline {
    extent: Extent,
    layers: [Layer; LAYERS],
    frame: u64,
}

impl Skyline {
    /// Skyline sized for `extent`.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            layers: [Layer::default(); LAYERS],
            frame: 0,
        }
    }

    /// Accumulated scroll of each layer.
    pub fn scroll(&self) -> [f32; LAYERS] {
        [self.layers[0].scroll, self.layers[1].scroll, self.layers[2].scroll]
    }

    fn layer_gray(layer: usize) -> u8 {
        map_range(layer as i32, 0, LAYERS as i32 - 1, 40, 90) as u8
    }

    fn draw_building(&self, canvas: &mut dyn PixelCanvas, b: &Building, x: i32, layer: usize) {
        let h = self.extent.height;
        let top = h - b.height;
        let color = Rgb888::gray(Self::layer_gray(layer));
        fill_rect(canvas, x, top, b.width, b.height, color, 255);

        match b.roof {
            Roof::Flat => {}
            Roof::Slanted => {
                for r in 1..=b.width / 3 {
                    fill_rect(canvas, x, top - r, b.width - 2 * r, 1, color, 255);
                }
            }
            Roof::Spire => {
                let cx = x + b.width / 2;
                draw_line(canvas, (cx, top - 1), (cx, top - 6), color, 255);
                fill_rect(canvas, cx - 1, top - 2, 3, 2, color, 255);
            }
            Roof::Antenna => {
                let ax = x + b.width / 3;
                draw_line(canvas, (ax, top - 1), (ax, top - 4), color, 255);
                if (self.frame / 30) % 2 == 0 {
                    canvas.set_pixel(ax, top - 5, BEACON);
                }
            }
        }

        if layer + 1 == LAYERS {
            let mut bit = 0;
            for wy in (top + 2..h - 2).step_by(4) {
                for wx in (x + 2..x + b.width - 2).step_by(3) {
                    if b.windows & (1 << (bit % 32)) != 0 {
                        fill_rect(canvas, wx, wy, 1, 2, WINDOW, 200);
                    }
                    bit += 1;
                }
            }
        }
    }
}

impl Animation for Skyline {
    fn init(&mut self, rng: &mut FrameRng) {
        self.frame = 0;
        let h = self.extent.height;
        let min_span = self.extent.wf() + LEAD_IN;
        for (li, layer) in self.layers.iter_mut().enumerate() {
            let mut x = 0.0;
            // Far layers are taller so they peek out above the near ones.
            let tallest = (h * (3 - li as i32) / 4).max(4);
            for b in &mut layer.buildings {
                b.offset = x;
                b.width = rng.range(8, 20);
                b.height = rng.range((h / 6).max(2), tallest);
                b.roof = match rng.range(0, 14) {
                    0..=2 => Roof::Slanted,
                    3 => Roof::Spire,
                    4 | 5 => Roof::Antenna,
                    _ => Roof::Flat,
                };
                b.windows = rng.range(0, i32::MAX) as u32;
                x += (b.width + rng.range(2, 8)) as f32;
            }
            layer.span = x.max(min_span);
            layer.scroll = 0.0;
        }
    }

    fn render(&mut self, canvas: &mut dyn PixelCanvas, _ctx: &FrameCtx, _rng: &mut FrameRng) {
        let (w, h) = (self.extent.width, self.extent.height);
        vertical_gradient(canvas, SKY_TOP, SKY_BOTTOM, 0, h);

        let f = self.frame as f32;
        let star_rows = (h * 5 / 8).max(1);
        for i in 0..SKY_STARS {
            let sx = (i as i32 * 13) % w;
            let sy = (i as i32 * 7) % star_rows;
            let b = ((f * 0.05 + i as f32).sin() * 0.5 + 0.5) * 255.0;
            draw_pixel_blend(canvas, sx, sy, Rgb888::WHITE, b as u8);
        }

        for li in 0..LAYERS {
            let layer = self.layers[li];
            for b in &layer.buildings {
                let x = (b.offset - layer.scroll).rem_euclid(layer.span) - LEAD_IN;
                let xi = x as i32;
                if xi + b.width < 0 || xi >= w {
                    continue;
                }
                self.draw_building(canvas, b, xi, li);
            }
        }

        for (li, layer) in self.layers.iter_mut().enumerate() {
            layer.scroll = (layer.scroll + LAYER_SPEED[li]).rem_euclid(layer.span.max(1.0));
        }
        self.frame = self.frame.wrapping_add(1);
    }

    fn name(&self) -> &'static str {
        "Skyline"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animations/skyline.rs"]
mod tests;
