use std::f32::consts::PI;

use crate::animations::{Animation, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::canvas::ops::draw_pixel_blend;
use crate::foundation::color::{Rgb888, hsl_to_rgb};
use crate::foundation::rng::FrameRng;

/// Spiral layers.
pub const LAYERS: usize = 4;
/// Arms per layer.
pub const ARMS: usize = 2;

const CORE: Rgb888 = Rgb888::new(0, 0, 0x11);
const RIM: Rgb888 = Rgb888::new(0, 0, 0x33);
const GRADIENT_RADIUS: f32 = 40.0;
const ANGLE_STEP: f32 = 0.03;
const SWEEP: f32 = PI * 4.0;
const ARM_ALPHA: u8 = 153;

/// Rotating spiral whose radius grows linearly with angle, one hue per layer.
#[derive(Clone, Debug)]
pub struct Galaxy {
    extent: Extent,
    frame: u64,
}

impl Galaxy {
    /// Galaxy sized for `extent`.
    pub fn new(extent: Extent) -> Self {
        Self { extent, frame: 0 }
    }

    fn center(&self) -> (f32, f32) {
        (self.extent.wf() / 2.0, self.extent.hf() / 2.0)
    }

    /// Background color at distance `d` from the centre.
    pub fn background(d: f32) -> Rgb888 {
        CORE.lerp(RIM, d / GRADIENT_RADIUS)
    }
}

impl Animation for Galaxy {
    fn init(&mut self, _rng: &mut FrameRng) {
        self.frame = 0;
    }

    fn render(&mut self, canvas: &mut dyn PixelCanvas, _ctx: &FrameCtx, _rng: &mut FrameRng) {
        let (cx, cy) = self.center();
        for y in 0..self.extent.height {
            for x in 0..self.extent.width {
                let d = (x as f32 - cx).hypot(y as f32 - cy);
                canvas.set_pixel(x, y, Self::background(d));
            }
        }

        let t = self.frame as f32 * 0.01;
        for layer in 0..LAYERS {
            let lf = layer as f32;
            let depth = 0.8 + lf * 0.2;
            let rotation = 0.8 + lf * 0.2;
            let hue = (lf * 45.0 + t * 30.0).rem_euclid(360.0) / 360.0;
            let color = hsl_to_rgb(hue, 1.0, 0.6);
            for arm in 0..ARMS {
                let start = arm as f32 * PI + lf * PI / 4.0;
                let steps = (SWEEP / ANGLE_STEP) as usize;
                for s in 0..steps {
                    let angle = s as f32 * ANGLE_STEP;
                    let radius = angle * 3.0 * depth;
                    let theta = angle + t * rotation + start;
                    let x = (cx + theta.cos() * radius) as i32;
                    let y = (cy + theta.sin() * radius) as i32;
                    if !canvas.contains(x, y) {
                        continue;
                    }
                    draw_pixel_blend(canvas, x, y, color, ARM_ALPHA);
                    draw_pixel_blend(canvas, x + 1, y, color, ARM_ALPHA);
                    draw_pixel_blend(canvas, x, y + 1, color, ARM_ALPHA);
                }
            }
        }

        self.frame = self.frame.wrapping_add(1);
    }

    fn name(&self) -> &'static str {
        "Galaxy"
    }
}
