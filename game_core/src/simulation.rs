use glam::Vec2;
use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Events, Field, Frame, GameEvent,
    GameRng, Paddle, PaddleControl, Score, ServeDirection, Side,
};

/// The whole game state: entities, score and serve randomness
pub struct Simulation {
    world: World,
    field: Field,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
}

impl Simulation {
    /// Paddles centred, ball resting at the field centre. Call [`Simulation::start`] to serve.
    ///
    /// Fails if `config` does not pass [`Config::validate`].
    pub fn new(config: Config, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = Field::from_config(&config);
        let mut world = World::new();

        // Create paddles
        create_paddle(&mut world, &config, &field, Side::Player);
        create_paddle(&mut world, &config, &field, Side::Cpu);

        // Create ball
        create_ball(&mut world, field.center(), Vec2::ZERO, config.ball_radius);

        Ok(Self {
            world,
            field,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
        })
    }

    pub fn with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::new(seed))
    }

    /// Initial serve in a random horizontal direction
    pub fn start(&mut self) {
        let direction = ServeDirection::random(&mut self.rng);
        log::info!("opening serve toward {direction:?}");
        self.serve(direction);
    }

    /// Re-centre the ball with a fresh random angle. Paddles and score are untouched.
    pub fn serve(&mut self, direction: ServeDirection) {
        let center = self.field.center();
        let speed = self.config.ball_base_speed;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(center, speed, direction, &mut self.rng);
        }
    }

    /// Advance one tick and return the events it produced
    pub fn step(&mut self, control: PaddleControl, elapsed: f32) -> &[GameEvent] {
        step(
            &mut self.world,
            &self.field,
            &self.config,
            control,
            elapsed,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.events.as_slice()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    /// Replace the ball's state, e.g. to set up a scenario
    pub fn set_ball(&mut self, new_ball: Ball) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            *ball = new_ball;
        }
    }

    /// Move a paddle's top edge, clamped to the field
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Snapshot for the renderer
    pub fn frame(&self, paused: bool) -> Option<Frame> {
        Some(Frame {
            field: self.field,
            player: self.paddle(Side::Player)?,
            cpu: self.paddle(Side::Cpu)?,
            ball: self.ball()?,
            score: self.score,
            paused,
        })
    }
}
