//! Sequential crossfade between two catalog units.

use crate::animations::AnimationId;
use crate::engine::ease::FadeCurve;

/// Where the controller is in its two-state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionState {
    /// One unit on screen at full brightness.
    Idle {
        /// Unit on screen.
        active: AnimationId,
    },
    /// Fading `active` out, then `target` in.
    Transitioning {
        /// Unit being replaced.
        active: AnimationId,
        /// Unit that becomes active when the transition completes.
        target: AnimationId,
        /// Time spent in this transition.
        elapsed_ms: u64,
    },
}

/// Half of a transition currently running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
    /// The outgoing unit is dimming towards black.
    Out,
    /// The incoming unit is brightening from black.
    In,
}

/// Result of [`TransitionController::start`]. When anything other than `Ignored` comes
/// back, the caller must `init()` the returned target before it is next rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// The request named the unit already on its way in, or the idle unit on screen.
    Ignored,
    /// A new transition began from idle.
    Started(AnimationId),
    /// A running transition now heads to a different target, possibly back to the
    /// outgoing unit; elapsed time is kept.
    Retargeted(AnimationId),
}

/// Result of [`TransitionController::frame_tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No transition in progress.
    Idle,
    /// Still fading, same half as before.
    Running,
    /// Crossed the midpoint this tick: the incoming unit is now the visible one.
    Swapped,
    /// Reached the full duration; the target is now active.
    Completed(AnimationId),
}

/// Sequential fade-out/fade-in state machine.
///
/// The first half of the duration dims the active unit from 255 to 0, the second half
/// brightens the target from 0 to 255. Only one unit is visible at any time.
#[derive(Clone, Debug)]
pub struct TransitionController {
    state: TransitionState,
    duration_ms: u64,
    curve: FadeCurve,
}

impl TransitionController {
    /// Idle on `active` with the given total transition length.
    pub fn new(active: AnimationId, duration_ms: u64, curve: FadeCurve) -> Self {
        Self {
            state: TransitionState::Idle { active },
            duration_ms: duration_ms.max(1),
            curve,
        }
    }

    /// Current state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Total transition length.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// The unit that owns the screen until a transition completes.
    pub fn active(&self) -> AnimationId {
        match self.state {
            TransitionState::Idle { active } | TransitionState::Transitioning { active, .. } => active,
        }
    }

    /// Pending target, equal to [`Self::active`] while idle.
    pub fn target(&self) -> AnimationId {
        match self.state {
            TransitionState::Idle { active } => active,
            TransitionState::Transitioning { target, .. } => target,
        }
    }

    /// `true` between a successful start and completion.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    /// Time spent in the running transition, 0 while idle.
    pub fn elapsed_ms(&self) -> u64 {
        match self.state {
            TransitionState::Idle { .. } => 0,
            TransitionState::Transitioning { elapsed_ms, .. } => elapsed_ms,
        }
    }

    /// Fraction of the running transition completed, in `[0, 1]`; 0 while idle.
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms() as f64 / self.duration_ms as f64).min(1.0) as f32
    }

    /// Which half of the transition is running, if any.
    pub fn phase(&self) -> Option<FadePhase> {
        match self.state {
            TransitionState::Idle { .. } => None,
            TransitionState::Transitioning { elapsed_ms, .. } => {
                if elapsed_ms.saturating_mul(2) < self.duration_ms {
                    Some(FadePhase::Out)
                } else {
                    Some(FadePhase::In)
                }
            }
        }
    }

    /// The unit to render this frame.
    pub fn visible(&self) -> AnimationId {
        match self.phase() {
            Some(FadePhase::In) => self.target(),
            _ => self.active(),
        }
    }

    /// Global brightness to apply after rendering the visible unit.
    pub fn fade_level(&self) -> u8 {
        let p = self.progress();
        let level = match self.phase() {
            None => return 255,
            Some(FadePhase::Out) => 1.0 - self.curve.apply(p * 2.0),
            Some(FadePhase::In) => self.curve.apply((p - 0.5) * 2.0),
        };
        (level * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// Begin (or redirect) a transition towards `target`.
    pub fn start(&mut self, target: AnimationId) -> StartOutcome {
        match self.state {
            TransitionState::Idle { active } => {
                if active == target {
                    return StartOutcome::Ignored;
                }
                self.state = TransitionState::Transitioning {
                    active,
                    target,
                    elapsed_ms: 0,
                };
                StartOutcome::Started(target)
            }
            TransitionState::Transitioning {
                active,
                target: current,
                elapsed_ms,
            } => {
                if target == current {
                    return StartOutcome::Ignored;
                }
                self.state = TransitionState::Transitioning {
                    active,
                    target,
                    elapsed_ms,
                };
                StartOutcome::Retargeted(target)
            }
        }
    }

    /// Advance the running transition by `dt_ms`.
    pub fn frame_tick(&mut self, dt_ms: u64) -> TickOutcome {
        let TransitionState::Transitioning {
            active,
            target,
            elapsed_ms,
        } = self.state
        else {
            return TickOutcome::Idle;
        };

        let before = self.phase();
        let elapsed_ms = elapsed_ms.saturating_add(dt_ms);
        if elapsed_ms >= self.duration_ms {
            self.state = TransitionState::Idle { active: target };
            return TickOutcome::Completed(target);
        }
        self.state = TransitionState::Transitioning {
            active,
            target,
            elapsed_ms,
        };
        if before == Some(FadePhase::Out) && self.phase() == Some(FadePhase::In) {
            TickOutcome::Swapped
        } else {
            TickOutcome::Running
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/transition.rs"]
mod tests;
