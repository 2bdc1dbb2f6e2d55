//! Player paddle input
//!
//! Platform glue (mouse and keyboard listeners) feeds these types. The
//! simulation only ever sees a resolved [`PaddleControl`].

/// Discrete key-style direction. Up moves toward y = 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Up,
    #[default]
    None,
    Down,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::None => 0.0,
            Direction::Down => 1.0,
        }
    }
}

/// Input sampled for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSignal {
    /// Latest pointer y in field coordinates, if the pointer moved
    pub pointer_y: Option<f32>,
    pub direction: Direction,
}

impl InputSignal {
    pub fn pointer(y: f32) -> Self {
        Self {
            pointer_y: Some(y),
            direction: Direction::None,
        }
    }

    pub fn direction(direction: Direction) -> Self {
        Self {
            pointer_y: None,
            direction,
        }
    }

    /// Pointer samples take precedence over key direction
    pub fn resolve(&self) -> PaddleControl {
        match self.pointer_y {
            Some(y) if y.is_finite() => PaddleControl::Absolute(y),
            _ => PaddleControl::Direction(self.direction),
        }
    }
}

/// How the player paddle moves this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleControl {
    /// Centre the paddle on this y, no velocity integration
    Absolute(f32),
    Direction(Direction),
}

impl Default for PaddleControl {
    fn default() -> Self {
        PaddleControl::Direction(Direction::None)
    }
}

/// Produces the player's control signal once per tick
pub trait InputSource {
    fn poll(&mut self) -> InputSignal;
}

/// Source with no player at the controls
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self) -> InputSignal {
        InputSignal::default()
    }
}

/// Held-key tracking for key-style control
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    up: bool,
    down: bool,
    last: Direction,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    fn key_direction(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Handle key down event. Returns true if the key controls the paddle.
    pub fn key_down(&mut self, key: &str) -> bool {
        match Self::key_direction(key) {
            Some(Direction::Up) => {
                self.up = true;
                self.last = Direction::Up;
                true
            }
            Some(Direction::Down) => {
                self.down = true;
                self.last = Direction::Down;
                true
            }
            _ => false,
        }
    }

    /// Handle key up event. Returns true if the key controls the paddle.
    pub fn key_up(&mut self, key: &str) -> bool {
        match Self::key_direction(key) {
            Some(Direction::Up) => {
                self.up = false;
                true
            }
            Some(Direction::Down) => {
                self.down = false;
                true
            }
            _ => false,
        }
    }

    /// Most recent press wins while both keys are held
    pub fn direction(&self) -> Direction {
        match (self.up, self.down) {
            (true, true) => self.last,
            (true, false) => Direction::Up,
            (false, true) => Direction::Down,
            (false, false) => Direction::None,
        }
    }
}

/// Accumulates polled input across frames where the simulation does not step
#[derive(Debug, Clone, Copy, Default)]
pub struct InputBuffer {
    pending: InputSignal,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a fresh sample. The last pointer sample wins, direction is current state.
    pub fn push(&mut self, signal: InputSignal) {
        if signal.pointer_y.is_some() {
            self.pending.pointer_y = signal.pointer_y;
        }
        self.pending.direction = signal.direction;
    }

    /// Hand the buffered signal to a stepping tick. Pointer samples are consumed.
    pub fn take(&mut self) -> InputSignal {
        let signal = self.pending;
        self.pending.pointer_y = None;
        signal
    }

    pub fn peek(&self) -> InputSignal {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_takes_precedence() {
        let signal = InputSignal {
            pointer_y: Some(120.0),
            direction: Direction::Down,
        };
        assert_eq!(signal.resolve(), PaddleControl::Absolute(120.0));
    }

    #[test]
    fn test_direction_without_pointer() {
        let signal = InputSignal::direction(Direction::Up);
        assert_eq!(signal.resolve(), PaddleControl::Direction(Direction::Up));
    }

    #[test]
    fn test_non_finite_pointer_is_ignored() {
        let signal = InputSignal {
            pointer_y: Some(f32::NAN),
            direction: Direction::Down,
        };
        assert_eq!(signal.resolve(), PaddleControl::Direction(Direction::Down));
    }

    #[test]
    fn test_key_down_sets_direction() {
        let mut keys = KeyState::new();
        assert!(keys.key_down("ArrowUp"));
        assert_eq!(keys.direction(), Direction::Up);
        assert!(keys.key_up("ArrowUp"));
        assert_eq!(keys.direction(), Direction::None);

        assert!(keys.key_down("s"));
        assert_eq!(keys.direction(), Direction::Down);
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let mut keys = KeyState::new();
        keys.key_down("w");
        assert!(!keys.key_down("Enter"));
        assert!(!keys.key_up("Enter"));
        assert_eq!(keys.direction(), Direction::Up);
    }

    #[test]
    fn test_latest_key_wins_and_release_falls_back() {
        let mut keys = KeyState::new();
        keys.key_down("ArrowUp");
        keys.key_down("ArrowDown");
        assert_eq!(keys.direction(), Direction::Down);

        keys.key_up("ArrowDown");
        assert_eq!(keys.direction(), Direction::Up);
    }

    #[test]
    fn test_buffer_keeps_last_pointer_sample() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputSignal::pointer(100.0));
        buffer.push(InputSignal::pointer(140.0));
        buffer.push(InputSignal::direction(Direction::Up));

        let signal = buffer.take();
        assert_eq!(signal.pointer_y, Some(140.0));
        assert_eq!(signal.direction, Direction::Up);

        // Pointer is consumed, held direction is not
        let next = buffer.take();
        assert_eq!(next.pointer_y, None);
        assert_eq!(next.direction, Direction::Up);
    }
}
