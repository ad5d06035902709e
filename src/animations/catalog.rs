use crate::animations::beach::Beach;
use crate::animations::fire::Fire;
use crate::animations::galaxy::Galaxy;
use crate::animations::lightning::Lightning;
use crate::animations::orbital::Orbital;
use crate::animations::particles::Particles;
use crate::animations::pipes::Pipes;
use crate::animations::plasma::Plasma;
use crate::animations::skyline::Skyline;
use crate::animations::stars::Stars;
use crate::animations::{Animation, AnimationId, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::foundation::rng::FrameRng;

/// Closed set of catalog entries. Dispatch is a single `match` per capability.
#[derive(Clone, Debug)]
pub enum AnimationUnit {
    /// See [`Plasma`].
    Plasma(Plasma),
    /// See [`Particles`].
    Particles(Particles),
    /// See [`Fire`].
    Fire(Fire),
    /// See [`Skyline`].
    Skyline(Skyline),
    /// See [`Galaxy`].
    Galaxy(Galaxy),
    /// See [`Lightning`].
    Lightning(Lightning),
    /// See [`Pipes`].
    Pipes(Pipes),
    /// See [`Orbital`].
    Orbital(Orbital),
    /// See [`Stars`].
    Stars(Stars),
    /// See [`Beach`].
    Beach(Beach),
}

macro_rules! dispatch {
    ($self:expr, $unit:ident => $body:expr) => {
        match $self {
            AnimationUnit::Plasma($unit) => $body,
            AnimationUnit::Particles($unit) => $body,
            AnimationUnit::Fire($unit) => $body,
            AnimationUnit::Skyline($unit) => $body,
            AnimationUnit::Galaxy($unit) => $body,
            AnimationUnit::Lightning($unit) => $body,
            AnimationUnit::Pipes($unit) => $body,
            AnimationUnit::Orbital($unit) => $body,
            AnimationUnit::Stars($unit) => $body,
            AnimationUnit::Beach($unit) => $body,
        }
    };
}

impl AnimationUnit {
    /// Construct the unit for `id`.
    pub fn build(id: AnimationId, extent: Extent) -> Self {
        match id {
            AnimationId::Plasma => Self::Plasma(Plasma::new(extent)),
            AnimationId::Particles => Self::Particles(Particles::new(extent)),
            AnimationId::Fire => Self::Fire(Fire::new(extent)),
            AnimationId::Skyline => Self::Skyline(Skyline::new(extent)),
            AnimationId::Galaxy => Self::Galaxy(Galaxy::new(extent)),
            AnimationId::Lightning => Self::Lightning(Lightning::new(extent)),
            AnimationId::Pipes => Self::Pipes(Pipes::new(extent)),
            AnimationId::Orbital => Self::Orbital(Orbital::new(extent)),
            AnimationId::Stars => Self::Stars(Stars::new(extent)),
            AnimationId::Beach => Self::Beach(Beach::new(extent)),
        }
    }

    /// Identity tag of this unit.
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Plasma(_) => AnimationId::Plasma,
            Self::Particles(_) => AnimationId::Particles,
            Self::Fire(_) => AnimationId::Fire,
            Self::Skyline(_) => AnimationId::Skyline,
            Self::Galaxy(_) => AnimationId::Galaxy,
            Self::Lightning(_) => AnimationId::Lightning,
            Self::Pipes(_) => AnimationId::Pipes,
            Self::Orbital(_) => AnimationId::Orbital,
            Self::Stars(_) => AnimationId::Stars,
            Self::Beach(_) => AnimationId::Beach,
        }
    }
}

impl Animation for AnimationUnit {
    fn init(&mut self, rng: &mut FrameRng) {
        dispatch!(self, unit => unit.init(rng))
    }

    fn render(&mut self, canvas: &mut dyn PixelCanvas, ctx: &FrameCtx, rng: &mut FrameRng) {
        dispatch!(self, unit => unit.render(canvas, ctx, rng))
    }

    fn name(&self) -> &'static str {
        dispatch!(self, unit => unit.name())
    }
}

/// Every unit, built once and indexed by [`AnimationId`].
#[derive(Clone, Debug)]
pub struct Catalog {
    units: Vec<AnimationUnit>,
}

impl Catalog {
    /// Build all units for a canvas of `extent`.
    pub fn new(extent: Extent) -> Self {
        let units = AnimationId::ALL
            .iter()
            .map(|&id| AnimationUnit::build(id, extent))
            .collect();
        Self { units }
    }

    /// Unit for `id`.
    pub fn get(&self, id: AnimationId) -> &AnimationUnit {
        &self.units[id.index()]
    }

    /// Mutable unit for `id`.
    pub fn get_mut(&mut self, id: AnimationId) -> &mut AnimationUnit {
        &mut self.units[id.index()]
    }

    /// Display name of `id`.
    pub fn name(&self, id: AnimationId) -> &'static str {
        self.get(id).name()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animations/catalog.rs"]
mod tests;
