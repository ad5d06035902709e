//! Frame scheduling: configuration, the crossfade state machine and the coordinator that
//! ties units, timers and the canvas together.

/// Engine configuration loaded from JSON.
pub mod config;
pub mod coordinator;
/// Easing curves for the fade ramp.
pub mod ease;
pub mod transition;
