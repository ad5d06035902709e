use super::*;
use crate::canvas::buffer::FrameBuffer;

#[test]
fn catalog_is_indexed_by_identity() {
    let catalog = Catalog::new(Extent::default());
    assert_eq!(catalog.len(), AnimationId::COUNT);
    for id in AnimationId::ALL {
        assert_eq!(catalog.get(id).id(), id);
    }
}

#[test]
fn names_are_stable_labels() {
    let catalog = Catalog::new(Extent::default());
    let names: Vec<_> = AnimationId::ALL.iter().map(|&id| catalog.name(id)).collect();
    assert_eq!(
        names,
        [
            "Plasma",
            "Particles",
            "Fire",
            "Skyline",
            "Galaxy",
            "Lightning",
            "Pipes",
            "Orbital",
            "Stars",
            "Beach"
        ]
    );
}

#[test]
fn every_unit_survives_reinit_and_small_canvases() {
    for (w, h) in [(128, 64), (16, 8), (1, 1), (300, 20)] {
        let extent = Extent::new(w, h);
        let mut catalog = Catalog::new(extent);
        let mut fb = FrameBuffer::new(w, h).unwrap();
        let mut rng = FrameRng::seeded(u64::from(w * h));
        for id in AnimationId::ALL {
            let unit = catalog.get_mut(id);
            for round in 0..3 {
                unit.init(&mut rng);
                for f in 0..25 {
                    unit.render(&mut fb, &FrameCtx::at(round * 1_000 + f * 33), &mut rng);
                }
            }
        }
    }
}

#[test]
fn zero_sized_extent_builds_a_usable_catalog() {
    let mut catalog = Catalog::new(Extent::new(0, 5));
    let mut fb = FrameBuffer::new(1, 5).unwrap();
    let mut rng = FrameRng::seeded(21);
    for id in AnimationId::ALL {
        let unit = catalog.get_mut(id);
        unit.init(&mut rng);
        for f in 0..60 {
            unit.render(&mut fb, &FrameCtx::at(f * 33), &mut rng);
        }
    }
}

#[test]
fn init_twice_renders_like_init_once() {
    // Deterministic units only: their next frame depends on nothing but their own state.
    for id in [AnimationId::Plasma, AnimationId::Fire, AnimationId::Galaxy, AnimationId::Beach] {
        let mut catalog = Catalog::new(Extent::default());
        let mut rng = FrameRng::seeded(1);
        let unit = catalog.get_mut(id);

        unit.init(&mut rng);
        let mut once = FrameBuffer::panel();
        unit.render(&mut once, &FrameCtx::at(500), &mut rng);

        unit.init(&mut rng);
        unit.init(&mut rng);
        let mut twice = FrameBuffer::panel();
        unit.render(&mut twice, &FrameCtx::at(500), &mut rng);

        once.present();
        twice.present();
        assert_eq!(once.snapshot(), twice.snapshot(), "{id}");
    }
}
