use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animations::AnimationId;
use crate::canvas::buffer::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MAX_CANVAS_EDGE};
use crate::engine::ease::FadeCurve;
use crate::foundation::error::{PanelError, PanelResult};

/// Default crossfade length.
pub const DEFAULT_TRANSITION_MS: u64 = 2_000;
/// Default auto-cycle interval (three hours).
pub const DEFAULT_CYCLE_INTERVAL_MS: u64 = 3 * 60 * 60 * 1_000;

/// Engine settings. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Full transition length (fade-out plus fade-in).
    pub transition_ms: u64,
    /// Time between automatic transitions.
    pub cycle_interval_ms: u64,
    /// Start with auto-cycling enabled.
    pub auto_cycle: bool,
    /// Animation shown at start-up.
    pub start: AnimationId,
    /// Seed for the shared random source.
    pub seed: u64,
    /// Shape of the fade ramp.
    pub fade_curve: FadeCurve,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            transition_ms: DEFAULT_TRANSITION_MS,
            cycle_interval_ms: DEFAULT_CYCLE_INTERVAL_MS,
            auto_cycle: true,
            start: AnimationId::Plasma,
            seed: 0,
            fade_curve: FadeCurve::Linear,
        }
    }
}

impl EngineConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PanelResult<Self> {
        serde_json::from_reader(r).map_err(|e| PanelError::config(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PanelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| PanelError::config(format!("open config '{}': {e}", path.display())))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check field ranges. The two timers are independent.
    pub fn validate(&self) -> PanelResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PanelError::config("width and height must be > 0"));
        }
        if self.width > MAX_CANVAS_EDGE || self.height > MAX_CANVAS_EDGE {
            return Err(PanelError::config(format!(
                "width and height must be <= {MAX_CANVAS_EDGE}, got {}x{}",
                self.width, self.height
            )));
        }
        if self.transition_ms == 0 {
            return Err(PanelError::config("transition_ms must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
