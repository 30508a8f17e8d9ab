use glam::Vec2;

use crate::ai::Difficulty;
use crate::ball::Ball;
use crate::geometry::Field;
use crate::paddle::{Owner, Paddle};
use crate::params::Params;

/// The field and everything on it
#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub field: Field,
    pub ball: Ball,
    pub player: Paddle,
    pub ai: Paddle,
}

impl Court {
    /// Lay out paddles and ball for `field`, sized relative to the
    /// reference field height.
    pub fn new(field: Field, size_scale: f32, difficulty: &Difficulty) -> Self {
        let paddle_size = Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT) * size_scale;
        let margin = Params::PADDLE_MARGIN * size_scale;
        Self {
            field,
            ball: Ball::at_center(field.center(), Params::BALL_RADIUS * size_scale),
            player: Paddle::player(&field, paddle_size, margin),
            ai: Paddle::ai(&field, paddle_size, margin, difficulty),
        }
    }

    pub fn paddle(&self, owner: Owner) -> &Paddle {
        match owner {
            Owner::Player => &self.player,
            Owner::Ai => &self.ai,
        }
    }

    /// Split borrow of one paddle and the ball
    pub fn paddle_and_ball_mut(&mut self, owner: Owner) -> (&mut Paddle, &mut Ball) {
        match owner {
            Owner::Player => (&mut self.player, &mut self.ball),
            Owner::Ai => (&mut self.ai, &mut self.ball),
        }
    }

    /// Steps needed to cover `scale` nominal frames at top ball speed while
    /// moving at most half the paddle collision window per step. The window
    /// is the band of ball-center x positions that overlap a paddle.
    pub fn substeps(&self, scale: f32) -> u32 {
        let window = self.player.width.min(self.ai.width) + 2.0 * self.ball.radius;
        let travel = Params::BALL_SPEED_MAX * scale;
        // Tolerance keeps a float-rounded nominal frame at one step
        let steps = (travel / (window / 2.0) - 1e-4).ceil();
        if steps.is_finite() && steps > 1.0 {
            steps as u32
        } else {
            1
        }
    }

    /// Owner of the half the ball is currently in
    pub fn ball_side(&self) -> Owner {
        if self.ball.pos.x < self.field.width / 2.0 {
            Owner::Player
        } else {
            Owner::Ai
        }
    }

    /// Clear the per-tick glow flags
    pub fn clear_glow(&mut self) {
        self.player.glowing = false;
        self.ai.glowing = false;
    }

    /// Move to a new field size, scaling positions and sizes proportionally
    pub fn resize(&mut self, field: Field) {
        let scale = self.field.scale_to(&field);
        let size_scale = scale.y;

        self.ball.pos *= scale;
        self.ball.radius *= size_scale;
        self.player.rescale(scale, size_scale, &field);
        self.ai.rescale(scale, size_scale, &field);
        self.field = field;
    }
}
