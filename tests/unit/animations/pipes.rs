use super::*;
use crate::canvas::buffer::FrameBuffer;

fn setup(seed: u64) -> (Pipes, FrameBuffer, FrameRng) {
    let mut rng = FrameRng::seeded(seed);
    let mut unit = Pipes::new(Extent::default());
    unit.init(&mut rng);
    (unit, FrameBuffer::panel(), rng)
}

#[test]
fn walkers_step_every_other_frame() {
    let (mut unit, mut fb, mut rng) = setup(2);
    unit.render(&mut fb, &FrameCtx::default(), &mut rng);
    assert!(unit.trail_lens().all(|n| n == 0));
    unit.render(&mut fb, &FrameCtx::default(), &mut rng);
    assert!(unit.trail_lens().all(|n| n == 1));
}

#[test]
fn walkers_stay_within_margin() {
    let (mut unit, mut fb, mut rng) = setup(8);
    for _ in 0..4_000 {
        unit.render(&mut fb, &FrameCtx::default(), &mut rng);
        for (x, y) in unit.positions() {
            assert!((1..=126).contains(&x), "x = {x}");
            assert!((1..=62).contains(&y), "y = {y}");
        }
    }
    assert!(unit.trail_lens().all(|n| n == TRAIL_LEN));
}

#[test]
fn canvas_is_cleared_each_frame() {
    let (mut unit, mut fb, mut rng) = setup(4);
    fb.fill(Rgb888::WHITE);
    unit.render(&mut fb, &FrameCtx::default(), &mut rng);
    fb.present();
    // Only the five 2x2 heads exist before the first step.
    assert!(fb.snapshot().lit_pixels() <= WALKERS * 4);
}

#[test]
fn headings_cover_all_directions() {
    let mut rng = FrameRng::seeded(0);
    let mut seen = [false; 4];
    for _ in 0..200 {
        let h = Heading::random(&mut rng);
        seen[Heading::ALL.iter().position(|&x| x == h).unwrap()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
