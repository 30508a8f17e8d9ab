use crate::ai::Difficulty;
use crate::court::Court;
use crate::paddle::{Owner, PaddleContext};
use crate::resources::GameRng;

/// Move one paddle by its own control scheme
pub fn move_paddle(
    court: &mut Court,
    owner: Owner,
    difficulty: &Difficulty,
    smoothing: bool,
    scale: f32,
    rng: &mut GameRng,
) {
    let Court {
        field,
        ball,
        player,
        ai,
    } = court;
    let paddle = match owner {
        Owner::Player => player,
        Owner::Ai => ai,
    };
    let ctx = PaddleContext {
        ball,
        field,
        difficulty,
        smoothing,
        scale,
    };
    paddle.update(&ctx, rng);
}

/// Move ball based on velocity
pub fn move_ball(court: &mut Court, scale: f32) {
    court.ball.advance(scale);
}
