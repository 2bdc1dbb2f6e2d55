use hecs::World;

use crate::{Ball, Config, Field, Paddle, PaddleControl, Side};

/// Apply the player's control signal to the left paddle
pub fn apply_player_control(
    world: &mut World,
    control: PaddleControl,
    elapsed: f32,
    config: &Config,
) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }
        match control {
            PaddleControl::Absolute(target_y) => {
                paddle.vy = 0.0;
                paddle.y = target_y - paddle.height / 2.0;
            }
            PaddleControl::Direction(dir) => {
                paddle.vy = dir.sign() * paddle.max_speed;
                paddle.y += paddle.vy * elapsed;
            }
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Where the CPU paddle's top edge wants to be
///
/// Tracks the ball while it approaches, otherwise drifts back to the middle.
pub fn cpu_target_y(ball: &Ball, paddle_height: f32, field: &Field) -> f32 {
    if ball.vel.x > 0.0 {
        ball.pos.y - paddle_height / 2.0
    } else {
        field.centered_top(paddle_height)
    }
}

/// Move the CPU paddle toward its target at a capped rate
pub fn move_cpu_paddle(world: &mut World, elapsed: f32, field: &Field, config: &Config) {
    let Some(ball) = world.query_mut::<&Ball>().into_iter().next().map(|(_e, b)| *b) else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Cpu {
            continue;
        }
        // max_speed is already in field units per frame
        let max_step = (paddle.max_speed * elapsed).max(0.0);
        let target = cpu_target_y(&ball, paddle.height, field);
        let step = (target - paddle.y).clamp(-max_step, max_step);

        paddle.y = config.clamp_paddle_y(paddle.y + step);
        paddle.vy = if elapsed > 0.0 { step / elapsed } else { 0.0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Direction, Params};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Field) {
        let config = Config::new();
        let field = Field::from_config(&config);
        (World::new(), config, field)
    }

    fn paddle(world: &World, side: Side) -> Paddle {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
            .expect("paddle spawned")
    }

    #[test]
    fn test_pointer_centres_paddle_on_target() {
        let (mut world, config, field) = setup_world();
        create_paddle(&mut world, &config, &field, Side::Player);

        apply_player_control(&mut world, PaddleControl::Absolute(200.0), 1.0, &config);

        let p = paddle(&world, Side::Player);
        assert_eq!(p.y, 200.0 - config.paddle_height / 2.0);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn test_pointer_outside_field_is_clamped() {
        let (mut world, config, field) = setup_world();
        create_paddle(&mut world, &config, &field, Side::Player);

        apply_player_control(&mut world, PaddleControl::Absolute(-500.0), 1.0, &config);
        assert_eq!(paddle(&world, Side::Player).y, 0.0);

        apply_player_control(&mut world, PaddleControl::Absolute(5000.0), 1.0, &config);
        assert_eq!(
            paddle(&world, Side::Player).y,
            config.field_height - config.paddle_height
        );
    }

    #[test]
    fn test_direction_integrates_velocity() {
        let (mut world, config, field) = setup_world();
        create_paddle(&mut world, &config, &field, Side::Player);
        let start = paddle(&world, Side::Player).y;

        apply_player_control(
            &mut world,
            PaddleControl::Direction(Direction::Up),
            0.5,
            &config,
        );

        let p = paddle(&world, Side::Player);
        assert_eq!(p.vy, -config.paddle_speed);
        assert_eq!(p.y, start - config.paddle_speed * 0.5);

        apply_player_control(
            &mut world,
            PaddleControl::Direction(Direction::None),
            1.0,
            &config,
        );
        let p = paddle(&world, Side::Player);
        assert_eq!(p.vy, 0.0);
        assert_eq!(p.y, start - config.paddle_speed * 0.5);
    }

    #[test]
    fn test_player_control_leaves_cpu_alone() {
        let (mut world, config, field) = setup_world();
        create_paddle(&mut world, &config, &field, Side::Player);
        create_paddle(&mut world, &config, &field, Side::Cpu);
        let cpu_before = paddle(&world, Side::Cpu);

        apply_player_control(&mut world, PaddleControl::Absolute(10.0), 1.0, &config);

        assert_eq!(paddle(&world, Side::Cpu), cpu_before);
    }

    #[test]
    fn test_cpu_tracks_approaching_ball() {
        let (_world, config, field) = setup_world();
        let ball = Ball::new(Vec2::new(400.0, 100.0), Vec2::new(0.6, 0.0), 8.0);
        assert_eq!(
            cpu_target_y(&ball, config.paddle_height, &field),
            100.0 - config.paddle_height / 2.0
        );
    }

    #[test]
    fn test_cpu_recentres_when_ball_moves_away() {
        let (_world, config, field) = setup_world();
        let ball = Ball::new(Vec2::new(400.0, 100.0), Vec2::new(-0.6, 0.0), 8.0);
        assert_eq!(
            cpu_target_y(&ball, config.paddle_height, &field),
            field.height / 2.0 - config.paddle_height / 2.0
        );
    }

    #[test]
    fn test_cpu_step_is_capped() {
        let (mut world, config, field) = setup_world();
        create_paddle(&mut world, &config, &field, Side::Cpu);
        for (_e, p) in world.query_mut::<&mut Paddle>() {
            p.y = 0.0;
        }
        create_ball(&mut world, Vec2::new(400.0, 500.0), Vec2::new(0.6, 0.0), 8.0);

        move_cpu_paddle(&mut world, 1.0, &field, &config);

        let max_step = config.cpu_speed * Params::MOTION_SCALE;
        let p = paddle(&world, Side::Cpu);
        assert!((p.y - max_step).abs() < 1e-4);
        assert!((p.vy - max_step).abs() < 1e-4);
    }

    #[test]
    fn test_cpu_step_follows_paddle_max_speed() {
        let (mut world, config, field) = setup_world();
        create_paddle(&mut world, &config, &field, Side::Cpu);
        for (_e, p) in world.query_mut::<&mut Paddle>() {
            p.y = 0.0;
            p.max_speed = 1.5;
        }
        create_ball(&mut world, Vec2::new(400.0, 500.0), Vec2::new(0.6, 0.0), 8.0);

        move_cpu_paddle(&mut world, 2.0, &field, &config);

        let p = paddle(&world, Side::Cpu);
        assert!((p.y - 3.0).abs() < 1e-4);
        assert!((p.vy - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_cpu_negative_max_speed_holds_still() {
        let (mut world, config, field) = setup_world();
        create_paddle(&mut world, &config, &field, Side::Cpu);
        for (_e, p) in world.query_mut::<&mut Paddle>() {
            p.max_speed = -4.5;
        }
        create_ball(&mut world, Vec2::new(400.0, 20.0), Vec2::new(0.6, 0.0), 8.0);
        let before = paddle(&world, Side::Cpu).y;

        move_cpu_paddle(&mut world, 1.0, &field, &config);

        assert_eq!(paddle(&world, Side::Cpu).y, before);
    }

    #[test]
    fn test_cpu_zero_elapsed_does_not_move() {
        let (mut world, config, field) = setup_world();
        create_paddle(&mut world, &config, &field, Side::Cpu);
        create_ball(&mut world, Vec2::new(400.0, 20.0), Vec2::new(0.6, 0.0), 8.0);
        let before = paddle(&world, Side::Cpu).y;

        move_cpu_paddle(&mut world, 0.0, &field, &config);

        let p = paddle(&world, Side::Cpu);
        assert_eq!(p.y, before);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn test_cpu_without_ball_is_noop() {
        let (mut world, config, field) = setup_world();
        create_paddle(&mut world, &config, &field, Side::Cpu);
        let before = paddle(&world, Side::Cpu);

        move_cpu_paddle(&mut world, 1.0, &field, &config);

        assert_eq!(paddle(&world, Side::Cpu), before);
    }
}
