use crate::components::Side;
use crate::params::Params;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of its allowed range
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game configuration, fixed for the session once the game starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub cpu_speed: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub speed_increment: f32,
    pub score_margin: f32,
    pub pause_ms: f64,
    pub max_elapsed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            cpu_speed: Params::CPU_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_base_speed: Params::BALL_BASE_SPEED,
            speed_increment: Params::SPEED_INCREMENT,
            score_margin: Params::SCORE_MARGIN,
            pause_ms: Params::SCORE_PAUSE_MS,
            max_elapsed: Params::MAX_ELAPSED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document. Missing keys fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("max_elapsed", self.max_elapsed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        let non_negative = [
            ("paddle_inset", self.paddle_inset),
            ("paddle_speed", self.paddle_speed),
            ("cpu_speed", self.cpu_speed),
            ("ball_base_speed", self.ball_base_speed),
            ("speed_increment", self.speed_increment),
            ("score_margin", self.score_margin),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be zero or a positive number",
                });
            }
        }

        if !self.pause_ms.is_finite() || self.pause_ms < 0.0 {
            return Err(ConfigError::Invalid {
                field: "pause_ms",
                reason: "must be zero or a positive number",
            });
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::Invalid {
                field: "paddle_height",
                reason: "paddle does not fit inside the field",
            });
        }
        if 2.0 * (self.paddle_inset + self.paddle_width) >= self.field_width {
            return Err(ConfigError::Invalid {
                field: "paddle_inset",
                reason: "paddles overlap across the field",
            });
        }
        Ok(())
    }

    /// Get the left-edge X position of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Cpu => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to the field bounds. A paddle taller than
    /// the field is pinned to the top.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, (self.field_height - self.paddle_height).max(0.0))
    }
}
