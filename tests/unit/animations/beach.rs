use super::*;
use crate::canvas::buffer::FrameBuffer;

#[test]
fn tide_cycle_is_piecewise_linear() {
    assert_eq!(tide_scale(0.0), 1.0);
    assert!((tide_scale(0.35) - 1.3).abs() < 1e-5);
    assert!((tide_scale(0.69) - 1.0).abs() < 1e-5);
    assert_eq!(tide_scale(0.9), 1.0);
    assert!(tide_scale(0.2) < tide_scale(0.3));
    assert!(tide_scale(0.5) > tide_scale(0.6));
    assert!((tide_scale(1.2) - tide_scale(0.2)).abs() < 1e-4);
}

#[test]
fn tide_stays_in_band() {
    for i in 0..1_000 {
        let s = tide_scale(i as f32 / 1_000.0);
        assert!((1.0..=1.3 + 1e-5).contains(&s));
        let o = wet_sand_opacity(i as f32 / 1_000.0);
        assert!((0.2 - 1e-5..=0.4 + 1e-5).contains(&o));
    }
}

#[test]
fn sea_gradient_hits_its_stops() {
    assert_eq!(sea_color(0.0), SEA_STOPS[0]);
    assert_eq!(sea_color(1.0), SEA_STOPS[4]);
    assert_eq!(sea_color(0.5), SEA_STOPS[2]);
}

#[test]
fn sea_grows_with_the_tide() {
    let mut rng = FrameRng::seeded(0);
    let mut unit = Beach::new(Extent::default());
    unit.init(&mut rng);
    let mut fb = FrameBuffer::panel();

    unit.render(&mut fb, &FrameCtx::default(), &mut rng);
    let (top, low) = unit.sea_rows();
    assert_eq!(top, 25);
    assert_eq!(low, 19);

    // Frame 210 of 600 is the 0.35 peak.
    for _ in 0..210 {
        unit.render(&mut fb, &FrameCtx::default(), &mut rng);
    }
    let (_, high) = unit.sea_rows();
    assert!(high > low);
    assert!((unit.tide() - 1.3).abs() < 1e-3);
}

#[test]
fn sky_sea_and_sand_are_layered() {
    let mut rng = FrameRng::seeded(0);
    let mut unit = Beach::new(Extent::default());
    unit.init(&mut rng);
    let mut fb = FrameBuffer::panel();
    unit.render(&mut fb, &FrameCtx::default(), &mut rng);

    let sea = fb.get_pixel(10, 30);
    assert!(sea.b > sea.r);
    let sand = fb.get_pixel(10, 62);
    assert_eq!(sand, DRY_SAND.quantized());
}
