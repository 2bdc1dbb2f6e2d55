use serde::Serialize;

use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub player: u32, // Left
    pub cpu: u32,    // Right
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Cpu => self.cpu += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Cpu => self.cpu,
        }
    }
}

/// Random number generator, only drawn from when serving
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something that happened during a step, for the sound and render layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    WallBounce,
    PaddleBounce(Side),
    /// `Scored(Side::Player)` is a left score, `Scored(Side::Cpu)` a right score
    Scored(Side),
}

/// Events that occurred during this step, in order
#[derive(Debug, Clone, Default)]
pub struct Events {
    list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        log::debug!("event: {event:?}");
        self.list.push(event);
    }

    pub fn as_slice(&self) -> &[GameEvent] {
        &self.list
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn contains(&self, event: GameEvent) -> bool {
        self.list.contains(&event)
    }

    pub fn scored(&self) -> Option<Side> {
        self.list.iter().find_map(|e| match e {
            GameEvent::Scored(side) => Some(*side),
            _ => None,
        })
    }
}

/// Post-score pause, checked by the caller against a monotonic clock
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PauseState {
    pub pause_until_ms: Option<f64>,
}

impl PauseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now_ms: f64, duration_ms: f64) {
        self.pause_until_ms = Some(now_ms + duration_ms.max(0.0));
    }

    /// Whether the simulation should step at `now_ms`. Clears an expired pause.
    pub fn is_advancing(&mut self, now_ms: f64) -> bool {
        match self.pause_until_ms {
            Some(until) if now_ms < until => false,
            Some(_) => {
                self.pause_until_ms = None;
                true
            }
            None => true,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause_until_ms.is_some()
    }
}
