use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::error::ConfigError;
use crate::geometry::Field;
use crate::input::ControlMode;
use crate::params::Params;

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub win_score: u32,
    pub level: u8,
    pub paddle_smoothing: bool,
    pub control_mode: ControlMode,
    /// Fixed RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            win_score: Params::WIN_SCORE,
            level: 1,
            paddle_smoothing: true,
            control_mode: ControlMode::Pointer,
            seed: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_win_score(self.win_score)?;
        Difficulty::for_level(self.level)?;
        validate_field(self.field_width, self.field_height)?;
        Ok(())
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Size factor relative to the reference field height
    pub fn size_scale(&self) -> f32 {
        self.field_height / Params::FIELD_HEIGHT
    }
}

pub(crate) fn validate_win_score(win_score: u32) -> Result<(), ConfigError> {
    if win_score == 0 {
        return Err(ConfigError::InvalidWinScore(win_score));
    }
    Ok(())
}

pub(crate) fn validate_field(width: f32, height: f32) -> Result<(), ConfigError> {
    let valid = |v: f32| v.is_finite() && v >= Params::MIN_FIELD_SIZE;
    if !valid(width) || !valid(height) {
        return Err(ConfigError::InvalidField { width, height });
    }
    Ok(())
}
