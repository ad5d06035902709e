//! The per-frame composition root.

use crate::animations::{Animation, AnimationId, Catalog, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::canvas::ops::apply_global_fade;
use crate::engine::config::EngineConfig;
use crate::engine::transition::{StartOutcome, TickOutcome, TransitionController, TransitionState};
use crate::foundation::clock::Clock;
use crate::foundation::error::PanelResult;
use crate::foundation::rng::FrameRng;

/// Read-only snapshot for control surfaces.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CoordinatorStatus {
    /// Active unit.
    pub current: AnimationId,
    /// Display name of the active unit.
    pub current_name: &'static str,
    /// Pending target while transitioning.
    pub target: Option<AnimationId>,
    /// Whether a transition is running.
    pub in_transition: bool,
    /// Transition progress in percent.
    pub fade_progress: u8,
    /// Global brightness applied to the last frame.
    pub fade_level: u8,
    /// Whether the auto-cycle timer is armed.
    pub auto_cycle: bool,
}

/// Composition root: owns every unit, the transition state machine and the auto-cycle timer.
///
/// Drive it with one [`AnimationCoordinator::tick`] per display frame, then present the canvas.
#[derive(Debug)]
pub struct AnimationCoordinator<K: Clock> {
    catalog: Catalog,
    transition: TransitionController,
    clock: K,
    rng: FrameRng,
    auto_cycle: bool,
    cycle_interval_ms: u64,
    last_cycle_ms: u64,
    last_tick_ms: u64,
    shown: AnimationId,
    frames: u64,
}

impl<K: Clock> AnimationCoordinator<K> {
    /// Validate `config`, build the catalog and initialize the start unit.
    #[tracing::instrument(skip(config, clock), fields(start = %config.start))]
    pub fn new(config: &EngineConfig, clock: K) -> PanelResult<Self> {
        config.validate()?;
        let mut catalog = Catalog::new(Extent::new(config.width, config.height));
        let mut rng = FrameRng::seeded(config.seed);
        catalog.get_mut(config.start).init(&mut rng);

        let now = clock.now_ms();
        tracing::debug!(
            width = config.width,
            height = config.height,
            transition_ms = config.transition_ms,
            cycle_interval_ms = config.cycle_interval_ms,
            "coordinator ready"
        );
        Ok(Self {
            catalog,
            transition: TransitionController::new(
                config.start,
                config.transition_ms,
                config.fade_curve,
            ),
            clock,
            rng,
            auto_cycle: config.auto_cycle,
            cycle_interval_ms: config.cycle_interval_ms,
            last_cycle_ms: now,
            last_tick_ms: now,
            shown: config.start,
            frames: 0,
        })
    }

    /// Produce one composited frame in `canvas`. The caller presents it afterwards.
    pub fn tick(&mut self, canvas: &mut dyn PixelCanvas) {
        let now = self.clock.now_ms();
        let dt = now.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now;

        match self.transition.frame_tick(dt) {
            TickOutcome::Swapped => {
                tracing::debug!(target_id = %self.transition.target(), "transition midpoint");
            }
            TickOutcome::Completed(id) => {
                self.last_cycle_ms = now;
                tracing::debug!(active = %id, "transition complete");
            }
            TickOutcome::Idle | TickOutcome::Running => {}
        }

        if self.auto_cycle
            && !self.transition.is_transitioning()
            && now.saturating_sub(self.last_cycle_ms) >= self.cycle_interval_ms
        {
            let next = self.transition.active().next();
            tracing::info!(from = %self.transition.active(), to = %next, "auto-cycle");
            self.begin(next);
            self.last_cycle_ms = now;
        }

        let visible = self.transition.visible();
        if visible != self.shown {
            // The incoming unit starts from black, not from the outgoing unit's leftovers.
            canvas.clear();
            self.shown = visible;
        }
        let ctx = FrameCtx::at(now);
        self.catalog
            .get_mut(visible)
            .render(canvas, &ctx, &mut self.rng);

        let level = self.transition.fade_level();
        if level < 255 {
            apply_global_fade(canvas, level);
        }
        self.frames = self.frames.wrapping_add(1);
    }

    /// Manual override: start or retarget a transition to `id`. Leaves the auto flag alone.
    pub fn select_animation(&mut self, id: AnimationId) -> StartOutcome {
        let outcome = self.begin(id);
        if outcome != StartOutcome::Ignored {
            self.last_cycle_ms = self.clock.now_ms();
        }
        outcome
    }

    /// Like [`Self::select_animation`] for a raw catalog index. Out-of-range indices are
    /// ignored.
    pub fn select_animation_index(&mut self, idx: usize) -> StartOutcome {
        match AnimationId::from_index(idx) {
            Some(id) => self.select_animation(id),
            None => {
                tracing::debug!(idx, "ignoring out-of-range animation index");
                StartOutcome::Ignored
            }
        }
    }

    /// Arm or disarm auto-cycling. Arming restarts the interval from now.
    pub fn set_auto_cycle(&mut self, enabled: bool) {
        if enabled {
            self.last_cycle_ms = self.clock.now_ms();
        }
        if self.auto_cycle != enabled {
            tracing::info!(enabled, "auto-cycle toggled");
        }
        self.auto_cycle = enabled;
    }

    fn begin(&mut self, id: AnimationId) -> StartOutcome {
        let outcome = self.transition.start(id);
        match outcome {
            StartOutcome::Started(target) => {
                tracing::debug!(from = %self.transition.active(), to = %target, "transition start");
                self.catalog.get_mut(target).init(&mut self.rng);
            }
            StartOutcome::Retargeted(target) => {
                tracing::debug!(to = %target, elapsed_ms = self.transition.elapsed_ms(), "transition retarget");
                self.catalog.get_mut(target).init(&mut self.rng);
            }
            StartOutcome::Ignored => {}
        }
        outcome
    }

    /// Active unit (the outgoing one while transitioning).
    pub fn current_animation(&self) -> AnimationId {
        self.transition.active()
    }

    /// Pending target while transitioning.
    pub fn target_animation(&self) -> Option<AnimationId> {
        self.transition
            .is_transitioning()
            .then(|| self.transition.target())
    }

    /// Whether a transition is running.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_transitioning()
    }

    /// Transition progress in `[0, 1]`; 0 while idle.
    pub fn fade_progress(&self) -> f32 {
        self.transition.progress()
    }

    /// Current global brightness.
    pub fn fade_level(&self) -> u8 {
        self.transition.fade_level()
    }

    /// Whether auto-cycling is armed.
    pub fn auto_cycle(&self) -> bool {
        self.auto_cycle
    }

    /// Full transition state.
    pub fn transition_state(&self) -> TransitionState {
        self.transition.state()
    }

    /// Number of ticks so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The unit catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The clock driving this coordinator.
    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Snapshot for control surfaces.
    pub fn status(&self) -> CoordinatorStatus {
        let current = self.current_animation();
        CoordinatorStatus {
            current,
            current_name: self.catalog.name(current),
            target: self.target_animation(),
            in_transition: self.is_transitioning(),
            fade_progress: (self.fade_progress() * 100.0).round() as u8,
            fade_level: self.fade_level(),
            auto_cycle: self.auto_cycle,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/coordinator.rs"]
mod tests;
