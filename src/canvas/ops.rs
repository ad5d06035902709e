use crate::canvas::buffer::PixelCanvas;
use crate::foundation::color::{Rgb888, blend};
use crate::foundation::math::scale_floor_u8;

/// Composite `color` over whatever the canvas already holds at `(x, y)`.
///
/// Blending happens in 8-bit space on the value read back from the canvas, so packed
/// canvases lose low bits on every call. `alpha = 255` writes straight through.
pub fn draw_pixel_blend(canvas: &mut dyn PixelCanvas, x: i32, y: i32, color: Rgb888, alpha: u8) {
    if alpha == 0 || !canvas.contains(x, y) {
        return;
    }
    if alpha == 255 {
        canvas.set_pixel(x, y, color);
        return;
    }
    let bg = canvas.get_pixel(x, y);
    canvas.set_pixel(x, y, blend(bg, color, alpha));
}

/// Scale every channel of every pixel by `amount / 255`.
///
/// Uses truncating arithmetic: black stays black and repeated fades never brighten.
pub fn apply_global_fade(canvas: &mut dyn PixelCanvas, amount: u8) {
    if amount == 255 {
        return;
    }
    if amount == 0 {
        canvas.clear();
        return;
    }
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    for y in 0..h {
        for x in 0..w {
            let c = canvas.get_pixel(x, y);
            if c.is_black() {
                continue;
            }
            canvas.set_pixel(
                x,
                y,
                Rgb888::new(
                    scale_floor_u8(c.r, amount),
                    scale_floor_u8(c.g, amount),
                    scale_floor_u8(c.b, amount),
                ),
            );
        }
    }
}

/// Fill rows `y0..y1` with a vertical interpolation from `top` to `bottom`.
///
/// Rows are clipped to the canvas; an empty band is a no-op.
pub fn vertical_gradient(canvas: &mut dyn PixelCanvas, top: Rgb888, bottom: Rgb888, y0: i32, y1: i32) {
    let span = y1 - y0;
    if span <= 0 {
        return;
    }
    let w = canvas.width() as i32;
    let first = y0.max(0);
    let last = y1.min(canvas.height() as i32);
    for y in first..last {
        let t = if span > 1 {
            (y - y0) as f32 / (span - 1) as f32
        } else {
            0.0
        };
        let c = top.lerp(bottom, t);
        for x in 0..w {
            canvas.set_pixel(x, y, c);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/ops.rs"]
mod tests;
