use crate::{Ball, Params};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World, elapsed: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * elapsed * Params::MOTION_SCALE;
    }
}

/// Negative and non-finite elapsed values become zero-motion ticks
pub fn sanitize_elapsed(elapsed: f32, max_elapsed: f32) -> f32 {
    if elapsed.is_finite() {
        elapsed.clamp(0.0, max_elapsed.max(0.0))
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball spawned")
    }

    #[test]
    fn test_ball_integrates_with_motion_scale() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(0.5, -0.25), 8.0);

        move_ball(&mut world, 1.0);
        assert_eq!(ball(&world).pos, Vec2::new(405.0, 297.5));

        move_ball(&mut world, 2.0);
        assert_eq!(ball(&world).pos, Vec2::new(415.0, 292.5));
    }

    #[test]
    fn test_zero_elapsed_freezes_ball() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(0.6, 0.2), 8.0);
        move_ball(&mut world, 0.0);
        assert_eq!(ball(&world).pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_sanitize_elapsed() {
        assert_eq!(sanitize_elapsed(-1.0, 4.0), 0.0);
        assert_eq!(sanitize_elapsed(f32::NAN, 4.0), 0.0);
        assert_eq!(sanitize_elapsed(f32::INFINITY, 4.0), 0.0);
        assert_eq!(sanitize_elapsed(1.5, 4.0), 1.5);
        assert_eq!(sanitize_elapsed(30.0, 4.0), 4.0);
    }
}
