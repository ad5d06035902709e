/// Convenience result type used across panelfx.
pub type PanelResult<T> = Result<T, PanelError>;

/// Top-level error taxonomy.
///
/// The per-frame engine never fails; these errors only surface at the edges (configuration
/// loading and frame export).
#[derive(thiserror::Error, Debug)]
pub enum PanelError {
    /// Invalid user-provided values (dimensions, durations, identifiers).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// A rendered frame could not be exported.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PanelError {
    /// Build a [`PanelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PanelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PanelError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
