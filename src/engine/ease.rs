/// Shape applied to the transition fade ramp.
///
/// All curves are monotonic on `[0, 1]` and fix both endpoints, so the fade level stays
/// monotonic within each half of a transition whichever curve is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeCurve {
    /// Straight ramp.
    #[default]
    Linear,
    /// Slow start.
    InQuad,
    /// Slow end.
    OutQuad,
    /// Slow start and end.
    InOutQuad,
    /// Slow start, steeper.
    InCubic,
    /// Slow end, steeper.
    OutCubic,
    /// Slow start and end, steeper.
    InOutCubic,
}

impl FadeCurve {
    /// Map `t` in `[0, 1]` through the curve. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}
