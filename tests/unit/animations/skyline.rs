use super::*;
use crate::canvas::buffer::FrameBuffer;

fn city() -> (Skyline, FrameBuffer, FrameRng) {
    let mut rng = FrameRng::seeded(14);
    let mut unit = Skyline::new(Extent::default());
    unit.init(&mut rng);
    (unit, FrameBuffer::panel(), rng)
}

#[test]
fn layers_are_populated_within_limits() {
    let (unit, _, _) = city();
    for layer in &unit.layers {
        assert!(layer.span >= 128.0 + LEAD_IN);
        for b in &layer.buildings {
            assert!((8..20).contains(&b.width));
            assert!(b.height >= 2 && b.height < 64);
        }
    }
}

#[test]
fn near_layers_scroll_faster() {
    let (mut unit, mut fb, mut rng) = city();
    for _ in 0..20 {
        unit.render(&mut fb, &FrameCtx::default(), &mut rng);
    }
    let [far, mid, near] = unit.scroll();
    assert!(far < mid && mid < near);
    unit.init(&mut rng);
    assert_eq!(unit.scroll(), [0.0; LAYERS]);
}

#[test]
fn top_left_is_sky() {
    let (mut unit, mut fb, mut rng) = city();
    unit.render(&mut fb, &FrameCtx::default(), &mut rng);
    // Sky stars sit on multiples of 13 columns; column 1 holds only sky at row 0.
    let px = fb.get_pixel(1, 0);
    assert_eq!(px, SKY_TOP.quantized());
}

#[test]
fn layer_gray_brightens_towards_viewer() {
    assert!(Skyline::layer_gray(0) < Skyline::layer_gray(1));
    assert!(Skyline::layer_gray(1) < Skyline::layer_gray(2));
}
