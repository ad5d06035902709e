use super::*;
use crate::canvas::buffer::FrameBuffer;

fn noisy_canvas() -> FrameBuffer {
    let mut fb = FrameBuffer::new(16, 8).unwrap();
    for y in 0..8 {
        for x in 0..16 {
            let v = (x * 16 + y * 31) as u8;
            fb.set_pixel(x, y, Rgb888::new(v, v.wrapping_mul(3), 255 - v));
        }
    }
    fb
}

fn pixels(fb: &FrameBuffer) -> Vec<Rgb888> {
    let mut out = Vec::new();
    for y in 0..fb.height() as i32 {
        for x in 0..fb.width() as i32 {
            out.push(fb.get_pixel(x, y));
        }
    }
    out
}

#[test]
fn fade_full_is_identity() {
    let mut fb = noisy_canvas();
    let before = pixels(&fb);
    apply_global_fade(&mut fb, 255);
    assert_eq!(pixels(&fb), before);
}

#[test]
fn fade_zero_blacks_out() {
    let mut fb = noisy_canvas();
    apply_global_fade(&mut fb, 0);
    assert!(pixels(&fb).iter().all(|c| c.is_black()));
}

#[test]
fn fade_twice_never_brightens() {
    let mut once = noisy_canvas();
    apply_global_fade(&mut once, 128);
    let mut twice = once.clone();
    apply_global_fade(&mut twice, 128);
    for (a, b) in pixels(&once).iter().zip(pixels(&twice).iter()) {
        assert!(b.r <= a.r && b.g <= a.g && b.b <= a.b);
    }
}

#[test]
fn fade_keeps_black_black() {
    let mut fb = FrameBuffer::new(4, 4).unwrap();
    for amount in [1, 77, 200, 254] {
        apply_global_fade(&mut fb, amount);
        assert!(pixels(&fb).iter().all(|c| c.is_black()));
    }
}

#[test]
fn blend_pixel_opaque_overwrites_and_transparent_keeps() {
    let mut fb = noisy_canvas();
    let before = fb.get_pixel(3, 3);
    draw_pixel_blend(&mut fb, 3, 3, Rgb888::new(8, 8, 8), 0);
    assert_eq!(fb.get_pixel(3, 3), before);

    draw_pixel_blend(&mut fb, 3, 3, Rgb888::new(8, 8, 8), 255);
    assert_eq!(fb.get_pixel(3, 3), Rgb888::new(8, 8, 8));
}

#[test]
fn blend_pixel_ignores_out_of_range() {
    let mut fb = FrameBuffer::new(4, 4).unwrap();
    draw_pixel_blend(&mut fb, -1, 2, Rgb888::WHITE, 128);
    draw_pixel_blend(&mut fb, 4, 2, Rgb888::WHITE, 255);
    assert!(pixels(&fb).iter().all(|c| c.is_black()));
}

#[test]
fn gradient_spans_endpoints_and_clips() {
    let mut fb = FrameBuffer::new(2, 10).unwrap();
    let top = Rgb888::new(0, 0, 248);
    let bottom = Rgb888::new(248, 0, 0);
    vertical_gradient(&mut fb, top, bottom, 0, 10);
    assert_eq!(fb.get_pixel(0, 0), top);
    assert_eq!(fb.get_pixel(1, 9), bottom);

    vertical_gradient(&mut fb, Rgb888::WHITE, Rgb888::WHITE, -5, 2);
    assert_eq!(fb.get_pixel(0, 1), Rgb888::WHITE.quantized());
    assert_eq!(fb.get_pixel(0, 2), fb.get_pixel(1, 2));
}
