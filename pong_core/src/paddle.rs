use glam::Vec2;
use serde::Serialize;

use crate::ai::{step_toward, AiControl, Difficulty};
use crate::ball::Ball;
use crate::geometry::{Aabb, Field};
use crate::input::MoveIntent;
use crate::params::Params;
use crate::resources::GameRng;

/// Gap left between ball and paddle face when rounding would keep them touching
const CONTACT_SLOP: f32 = 1e-3;

/// Who controls a paddle. The player defends the left wall, the AI the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    Player,
    Ai,
}

impl Owner {
    pub fn opponent(self) -> Owner {
        match self {
            Owner::Player => Owner::Ai,
            Owner::Ai => Owner::Player,
        }
    }

    /// Horizontal direction pointing from this side into the field
    pub fn inward(self) -> f32 {
        match self {
            Owner::Player => 1.0,
            Owner::Ai => -1.0,
        }
    }
}

/// Pointer/key driven paddle state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerControl {
    pub target_y: f32,
    pub intent: MoveIntent,
}

/// Paddle behaviour variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Player(PlayerControl),
    Ai(AiControl),
}

/// Read-only inputs for one paddle movement step
#[derive(Debug, Clone, Copy)]
pub struct PaddleContext<'a> {
    pub ball: &'a Ball,
    pub field: &'a Field,
    pub difficulty: &'a Difficulty,
    pub smoothing: bool,
    pub scale: f32, // Elapsed nominal frames
}

/// A paddle. `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub speed: f32,
    /// Struck the ball this tick. Presentation only.
    pub glowing: bool,
    pub control: Control,
}

impl Paddle {
    /// Player paddle, vertically centered against the left wall
    pub fn player(field: &Field, size: Vec2, margin: f32) -> Self {
        let y = field.clamp_top(field.height / 2.0 - size.y / 2.0, size.y);
        Self {
            x: Self::home_x(Owner::Player, field, size.x, margin),
            y,
            width: size.x,
            height: size.y,
            margin,
            speed: Params::PLAYER_PADDLE_SPEED,
            glowing: false,
            control: Control::Player(PlayerControl {
                target_y: y,
                intent: MoveIntent::new(),
            }),
        }
    }

    /// Computer paddle, vertically centered against the right wall
    pub fn ai(field: &Field, size: Vec2, margin: f32, difficulty: &Difficulty) -> Self {
        let y = field.clamp_top(field.height / 2.0 - size.y / 2.0, size.y);
        Self {
            x: Self::home_x(Owner::Ai, field, size.x, margin),
            y,
            width: size.x,
            height: size.y,
            margin,
            speed: difficulty.speed,
            glowing: false,
            control: Control::Ai(AiControl::new(y)),
        }
    }

    fn home_x(owner: Owner, field: &Field, width: f32, margin: f32) -> f32 {
        match owner {
            Owner::Player => margin,
            Owner::Ai => field.width - width - margin,
        }
    }

    pub fn owner(&self) -> Owner {
        match self.control {
            Control::Player(_) => Owner::Player,
            Control::Ai(_) => Owner::Ai,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// X of the face that points into the field
    pub fn face_x(&self) -> f32 {
        match self.owner() {
            Owner::Player => self.x + self.width,
            Owner::Ai => self.x,
        }
    }

    pub fn max_y(&self, field_height: f32) -> f32 {
        (field_height - self.height).max(0.0)
    }

    pub fn clamp_to_field(&mut self, field_height: f32) {
        self.y = self.y.clamp(0.0, self.max_y(field_height));
    }

    /// Desired top edge for the player paddle. Ignored by the AI paddle.
    pub fn set_target_y(&mut self, y: f32, field_height: f32) {
        let max_y = self.max_y(field_height);
        if let Control::Player(player) = &mut self.control {
            player.target_y = y.clamp(0.0, max_y);
        }
    }

    pub fn target_y(&self) -> f32 {
        match &self.control {
            Control::Player(player) => player.target_y,
            Control::Ai(ai) => ai.target_y,
        }
    }

    /// Player movement intents, if this is the player paddle
    pub fn intent_mut(&mut self) -> Option<&mut MoveIntent> {
        match &mut self.control {
            Control::Player(player) => Some(&mut player.intent),
            Control::Ai(_) => None,
        }
    }

    pub fn check_collision(&self, ball: &Ball) -> bool {
        self.bounds().intersects_circle(ball.pos, ball.radius)
    }

    /// Ball is travelling toward this paddle's wall
    pub fn is_approached_by(&self, ball: &Ball) -> bool {
        ball.vel.x * self.owner().inward() < 0.0
    }

    /// Send the ball back into the field.
    ///
    /// The rebound angle follows where the ball met the face; returns that
    /// hit offset (-1 at the top edge, 0 at the center, 1 at the bottom).
    pub fn resolve_collision(&mut self, ball: &mut Ball) -> f32 {
        let inward = self.owner().inward();
        ball.pos.x = self.face_x() + ball.radius * inward;
        if self.check_collision(ball) {
            ball.pos.x += CONTACT_SLOP * inward;
        }

        ball.vel.x = -ball.vel.x;

        let hit_offset = (ball.pos.y - self.center_y()) / (self.height / 2.0);
        ball.vel.y = hit_offset * Params::HIT_ANGLE_SPEED;

        ball.vel.x *= Params::BALL_SPEED_INCREASE;
        ball.clamp_speed();

        self.glowing = true;
        tracing::trace!(owner = ?self.owner(), hit_offset, vx = ball.vel.x, "paddle hit");
        hit_offset
    }

    /// Advance one movement step for whichever variant this paddle is
    pub fn update(&mut self, ctx: &PaddleContext<'_>, rng: &mut GameRng) {
        match self.control {
            Control::Player(_) => self.update_player(ctx),
            Control::Ai(_) => self.update_ai(ctx, rng),
        }
        self.clamp_to_field(ctx.field.height);
    }

    fn update_player(&mut self, ctx: &PaddleContext<'_>) {
        let step = self.speed * ctx.scale;
        let max_y = self.max_y(ctx.field.height);
        let Control::Player(player) = &mut self.control else {
            return;
        };

        // Keys win over the pointer so releasing them leaves the paddle put
        if player.intent.is_active() {
            if player.intent.up {
                self.y -= step;
            }
            if player.intent.down {
                self.y += step;
            }
            self.y = self.y.clamp(0.0, max_y);
            player.target_y = self.y;
            return;
        }

        if ctx.smoothing {
            let factor = 1.0 - (1.0 - Params::PADDLE_SMOOTHING).powf(ctx.scale);
            self.y += (player.target_y - self.y) * factor;
        } else {
            self.y = player.target_y;
        }
    }

    fn update_ai(&mut self, ctx: &PaddleContext<'_>, rng: &mut GameRng) {
        let approaching = self.is_approached_by(ctx.ball);
        let face_x = self.face_x();
        let height = self.height;
        self.speed = ctx.difficulty.speed;

        let Control::Ai(ai) = &mut self.control else {
            return;
        };
        if ai.should_retarget(ctx.ball, approaching, ctx.difficulty) {
            ai.retarget(ctx.ball, face_x, height, ctx.field, ctx.difficulty, rng);
        }
        self.y = step_toward(self.y, ai.target_y, self.speed * ctx.scale);
    }

    /// Follow a field resize: positions by `scale`, sizes by `size_scale`
    pub fn rescale(&mut self, scale: Vec2, size_scale: f32, field: &Field) {
        self.width *= size_scale;
        self.height *= size_scale;
        self.margin *= size_scale;
        self.x = Self::home_x(self.owner(), field, self.width, self.margin);
        self.y *= scale.y;
        match &mut self.control {
            Control::Player(player) => player.target_y *= scale.y,
            Control::Ai(ai) => {
                ai.target_y *= scale.y;
                ai.last_ball_y *= scale.y;
            }
        }
        self.clamp_to_field(field.height);
        let max_y = self.max_y(field.height);
        match &mut self.control {
            Control::Player(player) => player.target_y = player.target_y.clamp(0.0, max_y),
            Control::Ai(ai) => ai.target_y = ai.target_y.clamp(0.0, max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::new(Params::FIELD_WIDTH, Params::FIELD_HEIGHT)
    }

    fn size() -> Vec2 {
        Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT)
    }

    fn player() -> Paddle {
        Paddle::player(&field(), size(), Params::PADDLE_MARGIN)
    }

    fn ai(level: u8) -> Paddle {
        let difficulty = Difficulty::for_level(level).unwrap();
        Paddle::ai(&field(), size(), Params::PADDLE_MARGIN, &difficulty)
    }

    fn ctx<'a>(
        ball: &'a Ball,
        field: &'a Field,
        difficulty: &'a Difficulty,
        smoothing: bool,
    ) -> PaddleContext<'a> {
        PaddleContext {
            ball,
            field,
            difficulty,
            smoothing,
            scale: 1.0,
        }
    }

    #[test]
    fn test_paddle_layout() {
        let p = player();
        let a = ai(1);
        assert_eq!(p.x, 10.0, "Player paddle X position");
        assert_eq!(a.x, 780.0, "AI paddle X position");
        assert_eq!(p.y, 200.0, "Paddles start centered");
        assert_eq!(p.face_x(), 20.0);
        assert_eq!(a.face_x(), 780.0);
        assert_eq!(p.owner(), Owner::Player);
        assert_eq!(a.owner(), Owner::Ai);
    }

    #[test]
    fn test_clamp_to_field() {
        let mut p = player();
        p.y = -30.0;
        p.clamp_to_field(500.0);
        assert_eq!(p.y, 0.0);
        p.y = 470.0;
        p.clamp_to_field(500.0);
        assert_eq!(p.y, 400.0);
    }

    #[test]
    fn test_set_target_y_clamps() {
        let mut p = player();
        p.set_target_y(900.0, 500.0);
        assert_eq!(p.target_y(), 400.0);
        p.set_target_y(-1.0, 500.0);
        assert_eq!(p.target_y(), 0.0);
    }

    #[test]
    fn test_collision_detection() {
        let p = player();
        let hit = Ball::new(Vec2::new(25.0, 250.0), Vec2::new(-5.0, 0.0), 10.0);
        assert!(p.check_collision(&hit));
        let miss = Ball::new(Vec2::new(31.0, 250.0), Vec2::new(-5.0, 0.0), 10.0);
        assert!(!p.check_collision(&miss));
        let over = Ball::new(Vec2::new(15.0, 185.0), Vec2::new(-5.0, 0.0), 10.0);
        assert!(!p.check_collision(&over), "Ball fully above the paddle");
    }

    #[test]
    fn test_center_hit_rebounds_flat() {
        let mut p = player();
        let mut ball = Ball::new(Vec2::new(25.0, p.center_y()), Vec2::new(-5.0, 3.0), 10.0);

        let offset = p.resolve_collision(&mut ball);

        assert_eq!(offset, 0.0);
        assert_eq!(ball.vel.y, 0.0, "Center hit should rebound horizontally");
        assert!((ball.vel.x - 5.25).abs() < 1e-5, "vx should flip and speed up");
        assert!(p.glowing);
    }

    #[test]
    fn test_top_edge_hit_rebounds_upward() {
        let mut p = player();
        let mut ball = Ball::new(Vec2::new(25.0, p.y), Vec2::new(-5.0, 0.0), 10.0);

        let offset = p.resolve_collision(&mut ball);

        assert!((offset + 1.0).abs() < 1e-6);
        assert!((ball.vel.y + 6.0).abs() < 1e-5, "Top edge should send vy to -6");
    }

    #[test]
    fn test_bottom_edge_hit_rebounds_downward() {
        let mut a = ai(5);
        let mut ball = Ball::new(
            Vec2::new(775.0, a.y + a.height),
            Vec2::new(5.0, 0.0),
            10.0,
        );
        a.resolve_collision(&mut ball);
        assert!((ball.vel.y - 6.0).abs() < 1e-5);
        assert!(ball.vel.x < 0.0, "Ball should head back toward the player");
    }

    #[test]
    fn test_resolution_leaves_no_overlap() {
        let mut p = player();
        let mut a = ai(3);
        let mut left = Ball::new(Vec2::new(14.0, 230.0), Vec2::new(-9.0, 2.0), 10.0);
        let mut right = Ball::new(Vec2::new(786.0, 260.0), Vec2::new(9.0, 2.0), 10.0);

        p.resolve_collision(&mut left);
        a.resolve_collision(&mut right);

        assert!(!p.check_collision(&left), "Ball stuck in player paddle");
        assert!(!a.check_collision(&right), "Ball stuck in AI paddle");
        assert!(left.pos.x > p.face_x());
        assert!(right.pos.x < a.face_x());
    }

    #[test]
    fn test_rebound_speed_is_capped() {
        let mut p = player();
        let mut ball = Ball::new(Vec2::new(25.0, 250.0), Vec2::new(-14.9, 0.0), 10.0);
        p.resolve_collision(&mut ball);
        assert_eq!(ball.vel.x, 15.0);
    }

    #[test]
    fn test_approach_direction() {
        let p = player();
        let a = ai(1);
        let leftward = Ball::new(Vec2::new(400.0, 250.0), Vec2::new(-5.0, 0.0), 10.0);
        assert!(p.is_approached_by(&leftward));
        assert!(!a.is_approached_by(&leftward));
        let still = Ball::new(Vec2::new(400.0, 250.0), Vec2::new(0.0, 5.0), 10.0);
        assert!(!p.is_approached_by(&still) && !a.is_approached_by(&still));
    }

    #[test]
    fn test_player_smoothing_moves_a_fifth() {
        let field = field();
        let difficulty = Difficulty::default();
        let ball = Ball::at_center(field.center(), 10.0);
        let mut p = player();
        p.set_target_y(300.0, field.height);

        p.update(&ctx(&ball, &field, &difficulty, true), &mut GameRng::default());

        assert!((p.y - 220.0).abs() < 1e-4, "Should cover 20% of 100, got {}", p.y);
    }

    #[test]
    fn test_player_without_smoothing_snaps() {
        let field = field();
        let difficulty = Difficulty::default();
        let ball = Ball::at_center(field.center(), 10.0);
        let mut p = player();
        p.set_target_y(37.0, field.height);

        p.update(&ctx(&ball, &field, &difficulty, false), &mut GameRng::default());

        assert_eq!(p.y, 37.0);
    }

    #[test]
    fn test_keys_override_pointer_target() {
        let field = field();
        let difficulty = Difficulty::default();
        let ball = Ball::at_center(field.center(), 10.0);
        let mut p = player();
        p.set_target_y(400.0, field.height);
        p.intent_mut().unwrap().up = true;

        p.update(&ctx(&ball, &field, &difficulty, true), &mut GameRng::default());

        assert_eq!(p.y, 192.0, "Up key should move by paddle speed");
        assert_eq!(p.target_y(), 192.0, "Target follows key movement");

        // Releasing the key leaves the paddle where it is
        p.intent_mut().unwrap().clear();
        p.update(&ctx(&ball, &field, &difficulty, true), &mut GameRng::default());
        assert_eq!(p.y, 192.0);
    }

    #[test]
    fn test_keys_stop_at_wall() {
        let field = field();
        let difficulty = Difficulty::default();
        let ball = Ball::at_center(field.center(), 10.0);
        let mut p = player();
        p.y = 3.0;
        p.intent_mut().unwrap().up = true;

        p.update(&ctx(&ball, &field, &difficulty, false), &mut GameRng::default());
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_ai_moves_at_difficulty_speed() {
        let field = field();
        let difficulty = Difficulty::for_level(10).unwrap();
        let mut rng = GameRng::new(11);
        let mut a = ai(10);
        // Ball coming toward the AI, aimed well below the paddle
        let ball = Ball::new(Vec2::new(380.0, 450.0), Vec2::new(5.0, 0.0), 10.0);

        a.update(&ctx(&ball, &field, &difficulty, false), &mut rng);

        assert_eq!(a.speed, 8.0);
        assert_eq!(a.y, 208.0, "AI should step 8 units toward the intercept");
        assert!(a.target_y() > 300.0);
    }

    #[test]
    fn test_ai_waits_within_reaction_delay() {
        let field = field();
        let difficulty = Difficulty::for_level(1).unwrap();
        let mut rng = GameRng::new(12);
        let mut a = ai(1);
        if let Control::Ai(control) = &mut a.control {
            control.last_ball_y = 250.0;
            control.target_y = 200.0;
        }
        // Receding ball that has barely moved vertically
        let ball = Ball::new(Vec2::new(380.0, 270.0), Vec2::new(-5.0, 1.0), 10.0);

        a.update(&ctx(&ball, &field, &difficulty, false), &mut rng);

        assert_eq!(a.target_y(), 200.0, "Target should not be recomputed");
        assert_eq!(a.y, 200.0);
    }

    #[test]
    fn test_ai_ignores_set_target() {
        let mut a = ai(4);
        let before = a.target_y();
        a.set_target_y(10.0, 500.0);
        assert_eq!(a.target_y(), before);
        assert!(a.intent_mut().is_none());
    }

    #[test]
    fn test_rescale_keeps_paddle_on_its_wall() {
        let old = field();
        let new = Field::new(400.0, 250.0);
        let mut a = ai(2);
        a.rescale(old.scale_to(&new), 0.5, &new);
        assert_eq!(a.height, 50.0);
        assert_eq!(a.width, 5.0);
        assert_eq!(a.x, 400.0 - 5.0 - 5.0);
        assert_eq!(a.y, 100.0);
    }
}
