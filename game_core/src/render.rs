use serde::Serialize;

use crate::components::{Ball, Paddle};
use crate::field::Field;
use crate::resources::Score;

/// Read-only snapshot of everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub field: Field,
    pub player: Paddle,
    pub cpu: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub paused: bool,
}

/// Draws a frame. Nothing flows back into the simulation.
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Frame) {}
}

/// Keeps the most recent frame, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct LastFrame {
    pub frame: Option<Frame>,
    pub count: u64,
}

impl Renderer for LastFrame {
    fn render(&mut self, frame: &Frame) {
        self.frame = Some(*frame);
        self.count += 1;
    }
}
