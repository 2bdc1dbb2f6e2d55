use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::params::Params;
use crate::GameRng;

/// Which paddle an entity or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Player, // Left, human controlled
    Cpu,    // Right, AI controlled
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed
    pub y: f32, // Top edge, clamped to field
    pub width: f32,
    pub height: f32,
    pub vy: f32,
    pub max_speed: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32, max_speed: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            vy: 0.0,
            max_speed,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Horizontal direction of a serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeDirection {
    Left,  // Toward the player, vx < 0
    Right, // Toward the CPU, vx > 0
}

impl ServeDirection {
    pub fn random(rng: &mut GameRng) -> Self {
        if rng.0.gen_bool(0.5) {
            ServeDirection::Right
        } else {
            ServeDirection::Left
        }
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ball {
    pub pos: Vec2, // Centre
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32, // Nominal speed, |vel| after a serve or bounce
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed: vel.length(),
        }
    }

    /// Reset ball to `center` with a random angle within ±30° of horizontal
    pub fn serve(
        &mut self,
        center: Vec2,
        speed: f32,
        direction: ServeDirection,
        rng: &mut GameRng,
    ) {
        let angle: f32 = rng
            .0
            .gen_range(-Params::MAX_SERVE_ANGLE..=Params::MAX_SERVE_ANGLE);
        let sign = match direction {
            ServeDirection::Left => -1.0,
            ServeDirection::Right => 1.0,
        };

        self.pos = center;
        self.speed = speed;
        self.vel = Vec2::new(sign * angle.cos(), angle.sin()) * speed;
    }
}
