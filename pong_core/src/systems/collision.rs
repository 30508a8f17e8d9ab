use crate::court::Court;
use crate::paddle::Owner;
use crate::resources::{Events, GameEvent};

/// Bounce the ball off the top and bottom walls
pub fn check_walls(court: &mut Court, events: &mut Events) -> bool {
    let bounced = court.ball.reflect_vertical(court.field.height);
    if bounced {
        tracing::trace!(x = court.ball.pos.x, y = court.ball.pos.y, "wall bounce");
        events.push(GameEvent::WallBounce);
    }
    bounced
}

/// Check the ball against the paddle guarding the half it is in.
///
/// Only a ball travelling toward that paddle is returned; one already
/// heading back out is left alone.
pub fn check_paddle_collision(court: &mut Court, events: &mut Events) -> Option<Owner> {
    let side = court.ball_side();
    let (paddle, ball) = court.paddle_and_ball_mut(side);

    if !paddle.is_approached_by(ball) || !paddle.check_collision(ball) {
        return None;
    }

    paddle.resolve_collision(ball);
    events.push(GameEvent::PaddleHit(side));
    Some(side)
}
