pub mod components;
pub mod config;
pub mod field;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod simulation;
pub mod sound;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;
pub use simulation::*;
pub use sound::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
///
/// `elapsed` is in frame units (1.0 = one nominal frame). Negative or
/// non-finite values produce a zero-motion tick. Only serves draw from `rng`.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    field: &Field,
    config: &Config,
    control: PaddleControl,
    elapsed: f32,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let elapsed = sanitize_elapsed(elapsed, config.max_elapsed);

    // Clear events at start of tick
    events.clear();

    // 1. Player paddle follows input
    apply_player_control(world, control, elapsed, config);

    // 2. CPU paddle chases the ball
    move_cpu_paddle(world, elapsed, field, config);

    // 3. Move ball
    move_ball(world, elapsed);

    // 4. Check collisions (walls, then paddles)
    check_collisions(world, field, config.speed_increment, elapsed, events);

    // 5. Check scoring (ball well past a goal line)
    check_scoring(world, field, config, score, events, rng);
}

/// Helper to create a vertically centred paddle entity
pub fn create_paddle(world: &mut World, config: &Config, field: &Field, side: Side) -> hecs::Entity {
    let max_speed = match side {
        Side::Player => config.paddle_speed,
        Side::Cpu => config.cpu_speed * Params::MOTION_SCALE,
    };
    world.spawn((Paddle::new(
        side,
        config.paddle_x(side),
        field.centered_top(config.paddle_height),
        config.paddle_width,
        config.paddle_height,
        max_speed,
    ),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
