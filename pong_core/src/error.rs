use thiserror::Error;

/// Rejected configuration. Raised when a setting is applied, never mid-tick.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("win score must be at least 1, got {0}")]
    InvalidWinScore(u32),

    #[error("unknown difficulty level {0}, expected 1..=10")]
    UnknownLevel(u8),

    #[error("field dimensions must be finite and at least 50, got {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
