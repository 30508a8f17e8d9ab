use glam::Vec2;
use rand::Rng;

use crate::params::Params;
use crate::resources::GameRng;

/// The pong ball. Velocity is in field units per nominal frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Ball resting at `center`, about to be served toward the right
    pub fn at_center(center: Vec2, radius: f32) -> Self {
        Self::new(center, Vec2::splat(Params::BALL_SPEED_INITIAL), radius)
    }

    /// Move by velocity; `scale` is elapsed time in nominal frames
    pub fn advance(&mut self, scale: f32) {
        self.pos += self.vel * scale;
    }

    /// Bounce off the top or bottom wall if the ball crossed it.
    ///
    /// The ball is left sitting exactly on the boundary so it cannot
    /// re-trigger on the next step.
    pub fn reflect_vertical(&mut self, field_height: f32) -> bool {
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            if self.vel.y < 0.0 {
                self.vel.y = -self.vel.y;
            }
            true
        } else if self.pos.y + self.radius > field_height {
            self.pos.y = field_height - self.radius;
            if self.vel.y > 0.0 {
                self.vel.y = -self.vel.y;
            }
            true
        } else {
            false
        }
    }

    /// Re-centre after a point with the serve heading back the other way.
    ///
    /// Rally speed above the serve limit drops back to the reset speed.
    pub fn serve(&mut self, center: Vec2, rng: &mut GameRng) {
        self.pos = center;

        self.vel.x = if self.vel.x == 0.0 {
            Params::BALL_SPEED_INITIAL
        } else {
            -self.vel.x
        };
        if self.vel.x.abs() > Params::SERVE_SPEED_LIMIT {
            self.vel.x = Params::SERVE_SPEED_RESET.copysign(self.vel.x);
        }

        self.vel.y = rng.0.gen_range(-Params::SERVE_VY_MAX..=Params::SERVE_VY_MAX);

        tracing::debug!(vx = self.vel.x, vy = self.vel.y, "ball served");
    }

    /// Enforce the per-axis speed cap
    pub fn clamp_speed(&mut self) {
        let max = Params::BALL_SPEED_MAX;
        self.vel = self.vel.clamp(Vec2::splat(-max), Vec2::splat(max));
    }

    pub fn is_moving_right(&self) -> bool {
        self.vel.x > 0.0
    }
}
