//! The pixel grid animations draw into, plus the ColorOps that write to it.

/// Canvas trait and the RGB565 double-buffered implementation.
pub mod buffer;
/// PNG export of presented frames.
pub mod export;
/// Per-pixel blending, global fade and gradients.
pub mod ops;
pub mod shapes;
