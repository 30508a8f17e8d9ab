//! Per-frame view of the match for the presentation layer

use serde::Serialize;

use crate::ball::Ball;
use crate::fsm::MatchState;
use crate::paddle::{Owner, Paddle};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            x: ball.pos.x,
            y: ball.pos.y,
            radius: ball.radius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub glowing: bool,
}

impl From<&Paddle> for PaddleView {
    fn from(paddle: &Paddle) -> Self {
        Self {
            x: paddle.x,
            y: paddle.y,
            width: paddle.width,
            height: paddle.height,
            glowing: paddle.glowing,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub field_width: f32,
    pub field_height: f32,
    pub ball: BallView,
    pub player: PaddleView,
    pub ai: PaddleView,
    pub player_score: u32,
    pub ai_score: u32,
    pub state: MatchState,
    pub winner: Option<Owner>,
    pub level: u8,
    /// Side whose score should be highlighted right now
    pub score_flash: Option<Owner>,
}

impl FrameSnapshot {
    pub fn paddle(&self, owner: Owner) -> &PaddleView {
        match owner {
            Owner::Player => &self.player,
            Owner::Ai => &self.ai,
        }
    }
}
