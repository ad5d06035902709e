//! panelfx is a procedural animation engine for fixed-resolution LED matrix panels.
//!
//! A catalog of ten self-contained simulations (plasma, fire, particle swarms, lightning,
//! orbital gravity, starfields and composite scenes) draws into a [`PixelCanvas`]. An
//! [`AnimationCoordinator`] picks what is on screen, crossfades between units and
//! auto-cycles through the catalog:
//!
//! - Load and validate an [`EngineConfig`]
//! - Create an [`AnimationCoordinator`] with a [`Clock`]
//! - Call [`AnimationCoordinator::tick`] once per frame, then present the canvas
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// The animation catalog and its units.
pub mod animations;
/// Canvas trait, frame buffer and ColorOps.
pub mod canvas;
/// Transition controller, coordinator and configuration.
pub mod engine;
/// Colors, errors, clocks and other shared building blocks.
pub mod foundation;

pub use crate::animations::{Animation, AnimationId, AnimationUnit, Catalog, Extent, FrameCtx};
pub use crate::canvas::buffer::{FrameBuffer, FrameRGBA, PixelCanvas};
pub use crate::canvas::export::{upscale_nearest, write_png};
pub use crate::canvas::ops::{apply_global_fade, draw_pixel_blend, vertical_gradient};
pub use crate::engine::config::EngineConfig;
pub use crate::engine::coordinator::{AnimationCoordinator, CoordinatorStatus};
pub use crate::engine::ease::FadeCurve;
pub use crate::engine::transition::{
    FadePhase, StartOutcome, TickOutcome, TransitionController, TransitionState,
};
pub use crate::foundation::clock::{Clock, ManualClock, MonotonicClock};
pub use crate::foundation::color::{Rgb565, Rgb888, blend, hsl_to_rgb};
pub use crate::foundation::error::{PanelError, PanelResult};
pub use crate::foundation::rng::FrameRng;
pub use crate::foundation::trail::Trail;
