//! Computer opponent
//!
//! The AI paddle predicts where the ball will cross its face, folding the
//! straight-line projection through the top and bottom walls, then blurs that
//! prediction with noise that shrinks as the difficulty level rises. It only
//! re-aims when the ball is coming toward it or has drifted further than the
//! level's reaction delay since the last look.

use crate::ball::Ball;
use crate::error::ConfigError;
use crate::geometry::Field;
use crate::params::Params;
use crate::resources::GameRng;

/// (speed, reaction delay) for levels 1 through 10
const DIFFICULTY_TABLE: [(f32, f32); 10] = [
    (3.0, 50.0),
    (3.5, 45.0),
    (4.0, 40.0),
    (4.5, 35.0),
    (5.0, 30.0),
    (5.5, 25.0),
    (6.0, 20.0),
    (6.5, 15.0),
    (7.0, 10.0),
    (8.0, 5.0),
];

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

/// Tuning for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub level: u8,
    pub speed: f32,          // Paddle movement per frame
    pub reaction_delay: f32, // Ball drift required before re-aiming
}

impl Difficulty {
    pub fn for_level(level: u8) -> Result<Self, ConfigError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(ConfigError::UnknownLevel(level));
        }
        let (speed, reaction_delay) = DIFFICULTY_TABLE[usize::from(level - 1)];
        Ok(Self {
            level,
            speed,
            reaction_delay,
        })
    }

    /// Scale of the prediction noise: 1.0 at level 1, 0.1 at level 10
    pub fn imperfection(&self) -> f32 {
        (11.0 - f32::from(self.level)) / 10.0
    }

    /// Scale of the wander around center while the ball moves away
    pub fn idle_jitter(&self) -> f32 {
        1.0 - f32::from(self.level) / 10.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        let (speed, reaction_delay) = DIFFICULTY_TABLE[0];
        Self {
            level: MIN_LEVEL,
            speed,
            reaction_delay,
        }
    }
}

/// Fold a straight-line projection through reflective top/bottom walls.
///
/// An odd number of crossings mirrors the remainder, an even number keeps it.
pub fn fold_bounces(y: f32, height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let bounces = (y / height).floor() as i64;
    let rem = y.rem_euclid(height);
    if bounces.rem_euclid(2) == 1 {
        height - rem
    } else {
        rem
    }
}

/// Frames until the ball reaches `face_x`, if it is heading there
pub fn time_to_reach(ball: &Ball, face_x: f32) -> Option<f32> {
    if ball.vel.x == 0.0 {
        return None;
    }
    let t = (face_x - ball.pos.x) / ball.vel.x;
    (t.is_finite() && t >= 0.0).then_some(t)
}

/// Ball-center Y when it crosses `face_x`, accounting for wall bounces
pub fn predict_intercept_y(ball: &Ball, face_x: f32, field_height: f32) -> Option<f32> {
    let t = time_to_reach(ball, face_x)?;
    let future_y = ball.pos.y + ball.vel.y * t;
    Some(fold_bounces(future_y, field_height))
}

/// Targeting state for the computer paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiControl {
    pub target_y: f32,
    pub last_ball_y: f32,
}

impl AiControl {
    pub fn new(target_y: f32) -> Self {
        Self {
            target_y,
            last_ball_y: 0.0,
        }
    }

    /// Reaction-delay throttle
    pub fn should_retarget(&self, ball: &Ball, approaching: bool, difficulty: &Difficulty) -> bool {
        approaching || (ball.pos.y - self.last_ball_y).abs() > difficulty.reaction_delay
    }

    /// Recompute `target_y` (paddle top edge) for a paddle of `paddle_height`
    /// whose face sits at `face_x`.
    pub fn retarget(
        &mut self,
        ball: &Ball,
        face_x: f32,
        paddle_height: f32,
        field: &Field,
        difficulty: &Difficulty,
        rng: &mut GameRng,
    ) {
        self.last_ball_y = ball.pos.y;

        let target = match predict_intercept_y(ball, face_x, field.height) {
            Some(future_y) => {
                let offset = rng.symmetric(Params::AI_NOISE) * difficulty.imperfection();
                future_y + offset - paddle_height / 2.0
            }
            None => {
                let center = field.height / 2.0 - paddle_height / 2.0;
                center + rng.symmetric(Params::AI_NOISE) * difficulty.idle_jitter()
            }
        };
        self.target_y = field.clamp_top(target, paddle_height);

        tracing::debug!(
            level = difficulty.level,
            target_y = self.target_y,
            "ai retargeted"
        );
    }
}

/// Move `current` toward `target` by at most `step`
pub fn step_toward(current: f32, target: f32, step: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= step {
        target
    } else {
        current + step.copysign(diff)
    }
}
