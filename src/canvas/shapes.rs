//! Blended drawing primitives. Every write goes through [`draw_pixel_blend`], so shapes
//! clip at the canvas edge for free.

use crate::canvas::buffer::PixelCanvas;
use crate::canvas::ops::draw_pixel_blend;
use crate::foundation::color::Rgb888;

/// Axis-aligned filled rectangle with top-left corner `(x, y)`.
pub fn fill_rect(canvas: &mut dyn PixelCanvas, x: i32, y: i32, w: i32, h: i32, color: Rgb888, alpha: u8) {
    if w <= 0 || h <= 0 {
        return;
    }
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(w).min(canvas.width() as i32);
    let y1 = y.saturating_add(h).min(canvas.height() as i32);
    for py in y0..y1 {
        for px in x0..x1 {
            draw_pixel_blend(canvas, px, py, color, alpha);
        }
    }
}

/// Bresenham line between two inclusive endpoints.
pub fn draw_line(
    canvas: &mut dyn PixelCanvas,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    color: Rgb888,
    alpha: u8,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        draw_pixel_blend(canvas, x, y, color, alpha);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Midpoint circle outline.
pub fn draw_circle(canvas: &mut dyn PixelCanvas, cx: i32, cy: i32, r: i32, color: Rgb888, alpha: u8) {
    if r < 0 {
        return;
    }
    if r == 0 {
        draw_pixel_blend(canvas, cx, cy, color, alpha);
        return;
    }
    let mut x = r;
    let mut y = 0;
    let mut err = 1 - r;
    while x >= y {
        // Octant points coincide on the diagonals and axes; skip the duplicates so
        // translucent outlines do not double-blend.
        let mut pts = [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ];
        pts.sort_unstable();
        let mut prev = None;
        for p in pts {
            if prev != Some(p) {
                draw_pixel_blend(canvas, p.0, p.1, color, alpha);
            }
            prev = Some(p);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Filled disc of radius `r`.
pub fn fill_circle(canvas: &mut dyn PixelCanvas, cx: i32, cy: i32, r: i32, color: Rgb888, alpha: u8) {
    if r < 0 {
        return;
    }
    let r2 = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                draw_pixel_blend(canvas, cx + dx, cy + dy, color, alpha);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/shapes.rs"]
mod tests;
