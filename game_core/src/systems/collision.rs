use crate::{Ball, Events, Field, GameEvent, Paddle, Params, Side};
use glam::Vec2;
use hecs::World;

/// Bounce the ball off the top and bottom walls. Returns true on contact.
pub fn bounce_off_walls(ball: &mut Ball, field: &Field) -> bool {
    let r = ball.radius;
    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
        ball.vel.y = ball.vel.y.abs();
        true
    } else if ball.pos.y + r > field.height {
        ball.pos.y = field.height - r;
        ball.vel.y = -ball.vel.y.abs();
        true
    } else {
        false
    }
}

fn approaching(ball: &Ball, paddle: &Paddle) -> bool {
    match paddle.side {
        Side::Player => ball.vel.x < 0.0,
        Side::Cpu => ball.vel.x > 0.0,
    }
}

fn overlaps_y(y: f32, radius: f32, paddle: &Paddle) -> bool {
    y + radius > paddle.y && y - radius < paddle.y + paddle.height
}

/// Whether the ball is moving into `paddle` and overlaps it on both axes
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let r = ball.radius;
    let overlaps_x = ball.pos.x - r < paddle.x + paddle.width && ball.pos.x + r > paddle.x;

    approaching(ball, paddle) && overlaps_x && overlaps_y(ball.pos.y, r, paddle)
}

/// Ball y at the moment it meets `paddle` while travelling from `prev_pos` to `ball.pos`
///
/// Catches fast balls that cross the whole paddle within one tick, where an
/// end-of-tick overlap test would miss them.
pub fn paddle_contact_y(ball: &Ball, prev_pos: Vec2, paddle: &Paddle) -> Option<f32> {
    if touches_paddle(ball, paddle) {
        return Some(ball.pos.y);
    }
    if !approaching(ball, paddle) {
        return None;
    }

    let r = ball.radius;
    // Leading edge and the paddle face it must cross
    let (face, lead_prev, lead_new) = match paddle.side {
        Side::Player => (paddle.x + paddle.width, prev_pos.x - r, ball.pos.x - r),
        Side::Cpu => (paddle.x, prev_pos.x + r, ball.pos.x + r),
    };
    let crossed = match paddle.side {
        Side::Player => lead_prev >= face && lead_new < face,
        Side::Cpu => lead_prev <= face && lead_new > face,
    };
    if !crossed {
        return None;
    }

    let t = (lead_prev - face) / (lead_prev - lead_new);
    let y = prev_pos.y + t * (ball.pos.y - prev_pos.y);
    overlaps_y(y, r, paddle).then_some(y)
}

/// Outgoing velocity for a hit at `relative_y` (-1 top edge, 1 bottom edge)
pub fn bounce_velocity(speed: f32, relative_y: f32, side: Side) -> Vec2 {
    let angle = relative_y * Params::MAX_BOUNCE_ANGLE;
    let away = match side {
        Side::Player => 1.0,
        Side::Cpu => -1.0,
    };
    Vec2::new(away * speed * angle.cos(), speed * angle.sin())
}

/// Reflect the ball off `paddle`, speeding it up. Returns true on contact.
///
/// `prev_pos` is where the ball was before this tick's motion.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    prev_pos: Vec2,
    paddle: &Paddle,
    speed_increment: f32,
) -> bool {
    let Some(contact_y) = paddle_contact_y(ball, prev_pos, paddle) else {
        return false;
    };

    // Not re-clamped: a hit on the very corner can exceed ±1 slightly
    let relative_y = (contact_y - paddle.center_y()) / (paddle.height / 2.0);

    ball.speed += speed_increment;
    ball.vel = bounce_velocity(ball.speed, relative_y, paddle.side);

    // Push ball clear of the paddle so it cannot re-trigger next tick
    let clearance = ball.radius + Params::UNSTICK_MARGIN;
    ball.pos.x = match paddle.side {
        Side::Player => paddle.x + paddle.width + clearance,
        Side::Cpu => paddle.x - clearance,
    };
    ball.pos.y = contact_y;
    true
}

/// Check ball collisions with walls and paddles
///
/// `elapsed` is the tick's sanitised elapsed time, used to recover where the
/// ball started so fast balls cannot tunnel through a paddle.
pub fn check_collisions(
    world: &mut World,
    field: &Field,
    speed_increment: f32,
    elapsed: f32,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();
    paddles.sort_by_key(|p| p.side == Side::Cpu);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let prev_pos = ball.pos - ball.vel * elapsed * Params::MOTION_SCALE;

        if bounce_off_walls(ball, field) {
            events.push(GameEvent::WallBounce);
        }

        for paddle in &paddles {
            if bounce_off_paddle(ball, prev_pos, paddle, speed_increment) {
                events.push(GameEvent::PaddleBounce(paddle.side));
                break;
            }
        }
    }
}
