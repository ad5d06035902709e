use super::*;
use crate::canvas::buffer::FrameBuffer;

fn storm() -> (Lightning, FrameRng) {
    let mut rng = FrameRng::seeded(5);
    let mut unit = Lightning::new(Extent::default());
    unit.init(&mut rng);
    (unit, rng)
}

#[test]
fn first_strike_always_lands() {
    let (mut unit, mut rng) = storm();
    assert_eq!(unit.active_bolts(), 0);
    assert!(unit.strike(&mut rng));
    assert_eq!(unit.active_bolts(), 1);
}

#[test]
fn pool_cap_and_spacing_hold() {
    let (mut unit, mut rng) = storm();
    for _ in 0..200 {
        unit.strike(&mut rng);
        assert!(unit.active_bolts() <= MAX_BOLTS);
        let origins: Vec<i32> = unit.active_origins().collect();
        for (i, a) in origins.iter().enumerate() {
            for b in &origins[i + 1..] {
                assert!((a - b).abs() >= MIN_SPACING, "{a} vs {b}");
            }
        }
    }
}

#[test]
fn every_branch_reaches_the_ground() {
    let (mut unit, mut rng) = storm();
    for _ in 0..10 {
        unit.init(&mut rng);
        assert!(unit.strike(&mut rng));
        let ends: Vec<_> = unit.branch_ends().collect();
        assert!(!ends.is_empty() && ends.len() <= MAX_BRANCHES);
        for (x, y) in ends {
            assert!(y >= 64.0);
            assert!((0.0..128.0).contains(&x));
        }
    }
}

#[test]
fn grounded_bolts_fade_and_recycle() {
    let (mut unit, mut rng) = storm();
    let mut fb = FrameBuffer::panel();
    assert!(unit.strike(&mut rng));
    assert!(unit.bolts[0].active);

    // Reveal takes ceil(64 / 1.5) frames, then the ground fade runs to completion.
    let expected = (64.0 / REVEAL_SPEED).ceil() as u32 + GROUND_FADE_FRAMES;
    let mut frames = 0;
    while unit.bolts[0].active && frames < expected + 10 {
        unit.render(&mut fb, &FrameCtx::default(), &mut rng);
        frames += 1;
    }
    assert_eq!(frames, expected);
}

#[test]
fn init_clears_the_pool() {
    let (mut unit, mut rng) = storm();
    unit.strike(&mut rng);
    unit.strike(&mut rng);
    unit.init(&mut rng);
    assert_eq!(unit.active_bolts(), 0);
    assert_eq!(unit.branch_ends().count(), 0);
}

#[test]
fn empty_extent_strikes_without_points() {
    let mut rng = FrameRng::seeded(9);
    let mut unit = Lightning::new(Extent {
        width: 0,
        height: 0,
    });
    unit.init(&mut rng);
    assert!(unit.strike(&mut rng));
    assert_eq!(unit.branch_ends().count(), 0);

    let mut fb = FrameBuffer::new(4, 4).unwrap();
    for _ in 0..50 {
        unit.render(&mut fb, &FrameCtx::default(), &mut rng);
    }
}
