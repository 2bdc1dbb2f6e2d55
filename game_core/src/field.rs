use glam::Vec2;
use serde::Serialize;

use crate::config::Config;

/// Fixed-size playing area. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.field_width, config.field_height)
    }

    /// Ball spawn point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top edge that vertically centres an object of the given height
    pub fn centered_top(&self, object_height: f32) -> f32 {
        (self.height - object_height) / 2.0
    }

    /// Whether a ball centred at `x` is past a goal line by more than `margin`
    pub fn is_beyond_left(&self, x: f32, margin: f32) -> bool {
        x < -margin
    }

    pub fn is_beyond_right(&self, x: f32, margin: f32) -> bool {
        x > self.width + margin
    }
}
