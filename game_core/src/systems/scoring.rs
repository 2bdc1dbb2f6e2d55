use crate::{Ball, Config, Events, Field, GameEvent, GameRng, Score, ServeDirection, Side};
use hecs::World;

/// Which side scores when the ball sits at `x`, if any
pub fn scoring_side(x: f32, field: &Field, margin: f32) -> Option<Side> {
    if field.is_beyond_left(x, margin) {
        Some(Side::Cpu)
    } else if field.is_beyond_right(x, margin) {
        Some(Side::Player)
    } else {
        None
    }
}

/// Serve direction after `scorer` scores: the ball heads toward the scorer's side
pub fn serve_after_score(scorer: Side) -> ServeDirection {
    match scorer {
        Side::Cpu => ServeDirection::Right,
        Side::Player => ServeDirection::Left,
    }
}

/// Check if ball left the field (scoring)
pub fn check_scoring(
    world: &mut World,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let Some(scorer) = scoring_side(ball.pos.x, field, config.score_margin) else {
            continue;
        };

        score.increment(scorer);
        events.push(GameEvent::Scored(scorer));
        log::info!(
            "{scorer:?} scored against {:?} (player {} - cpu {})",
            scorer.opponent(),
            score.player,
            score.cpu
        );

        ball.serve(
            field.center(),
            config.ball_base_speed,
            serve_after_score(scorer),
            rng,
        );
    }
}
