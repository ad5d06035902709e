use super::*;

fn controller() -> TransitionController {
    TransitionController::new(AnimationId::Plasma, 1_000, FadeCurve::Linear)
}

#[test]
fn idle_is_full_brightness_and_self_start_is_ignored() {
    let mut c = controller();
    assert_eq!(c.fade_level(), 255);
    assert_eq!(c.phase(), None);
    assert_eq!(c.start(AnimationId::Plasma), StartOutcome::Ignored);
    assert_eq!(c.state(), TransitionState::Idle { active: AnimationId::Plasma });
    assert_eq!(c.frame_tick(50), TickOutcome::Idle);
}

#[test]
fn start_enters_transitioning_at_zero() {
    let mut c = controller();
    assert_eq!(c.start(AnimationId::Fire), StartOutcome::Started(AnimationId::Fire));
    assert_eq!(
        c.state(),
        TransitionState::Transitioning {
            active: AnimationId::Plasma,
            target: AnimationId::Fire,
            elapsed_ms: 0,
        }
    );
    assert_eq!(c.fade_level(), 255);
    assert_eq!(c.visible(), AnimationId::Plasma);
}

#[test]
fn target_differs_from_active_until_completion() {
    let mut c = controller();
    c.start(AnimationId::Stars);
    let mut completed = None;
    for _ in 0..200 {
        assert!(c.is_transitioning());
        assert_ne!(c.target(), c.active());
        if let TickOutcome::Completed(id) = c.frame_tick(7) {
            completed = Some(id);
            break;
        }
    }
    assert_eq!(completed, Some(AnimationId::Stars));
    assert!(!c.is_transitioning());
    assert_eq!(c.active(), AnimationId::Stars);
    assert_eq!(c.target(), c.active());
    assert_eq!(c.fade_level(), 255);
}

#[test]
fn fade_is_monotonic_within_each_half() {
    let mut c = controller();
    c.start(AnimationId::Galaxy);
    let mut out_levels = vec![c.fade_level()];
    let mut in_levels = Vec::new();
    let mut swapped = 0;
    loop {
        match c.frame_tick(10) {
            TickOutcome::Running => {}
            TickOutcome::Swapped => swapped += 1,
            TickOutcome::Completed(_) => break,
            TickOutcome::Idle => unreachable!(),
        }
        match c.phase() {
            Some(FadePhase::Out) => out_levels.push(c.fade_level()),
            Some(FadePhase::In) => in_levels.push(c.fade_level()),
            None => unreachable!(),
        }
    }
    assert_eq!(swapped, 1);
    assert!(out_levels.windows(2).all(|w| w[1] <= w[0]));
    assert!(in_levels.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(out_levels[0], 255);
    assert_eq!(in_levels[0], 0);
}

#[test]
fn visible_unit_swaps_at_midpoint() {
    let mut c = controller();
    c.start(AnimationId::Pipes);
    c.frame_tick(499);
    assert_eq!(c.visible(), AnimationId::Plasma);
    assert_eq!(c.frame_tick(1), TickOutcome::Swapped);
    assert_eq!(c.visible(), AnimationId::Pipes);
    assert_eq!(c.active(), AnimationId::Plasma);
    assert_eq!(c.fade_level(), 0);
}

#[test]
fn retarget_keeps_elapsed_and_never_lands_on_old_target() {
    let mut c = controller();
    c.start(AnimationId::Fire);
    c.frame_tick(300);
    assert_eq!(c.start(AnimationId::Galaxy), StartOutcome::Retargeted(AnimationId::Galaxy));
    assert_eq!(c.elapsed_ms(), 300);
    assert_eq!(c.target(), AnimationId::Galaxy);

    assert_eq!(c.start(AnimationId::Galaxy), StartOutcome::Ignored);

    assert_eq!(c.frame_tick(700), TickOutcome::Completed(AnimationId::Galaxy));
    assert_eq!(c.active(), AnimationId::Galaxy);
}

#[test]
fn oversized_tick_completes_in_one_step() {
    let mut c = controller();
    c.start(AnimationId::Beach);
    assert_eq!(c.frame_tick(u64::MAX), TickOutcome::Completed(AnimationId::Beach));
    assert_eq!(c.progress(), 0.0);
}

#[test]
fn eased_curve_keeps_endpoints() {
    let mut c = TransitionController::new(AnimationId::Plasma, 100, FadeCurve::InOutCubic);
    c.start(AnimationId::Fire);
    assert_eq!(c.fade_level(), 255);
    c.frame_tick(50);
    assert_eq!(c.fade_level(), 0);
    c.frame_tick(49);
    assert!(c.fade_level() > 240);
}

#[test]
fn retarget_back_to_outgoing_unit_lands_there() {
    let mut c = controller();
    c.start(AnimationId::Fire);
    c.frame_tick(100);
    assert_eq!(c.start(AnimationId::Plasma), StartOutcome::Retargeted(AnimationId::Plasma));
    assert_eq!(c.elapsed_ms(), 100);
    assert_eq!(c.target(), AnimationId::Plasma);
    assert!(c.is_transitioning());

    assert_eq!(c.frame_tick(900), TickOutcome::Completed(AnimationId::Plasma));
    assert_eq!(c.state(), TransitionState::Idle { active: AnimationId::Plasma });
}
