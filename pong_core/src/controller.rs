//! Match controller
//!
//! `Match` owns every piece of simulation state for one session and is the
//! only thing that mutates it. Hosts drive it through the lifecycle methods
//! and input hooks below; the frame scheduler calls `tick` once per frame.

use crate::ai::Difficulty;
use crate::ball::Ball;
use crate::config::{validate_field, validate_win_score, Config};
use crate::court::Court;
use crate::error::ConfigError;
use crate::fsm::{MatchAction, MatchFsm, MatchState, TransitionResult};
use crate::geometry::Field;
use crate::input::{handle_key, ControlMode, MoveIntent};
use crate::paddle::{Owner, Paddle};
use crate::params::Params;
use crate::resources::{Events, GameEvent, GameRng, Score, ScoreFlash};
use crate::snapshot::{BallView, FrameSnapshot, PaddleView};
use crate::systems::*;

/// One single-player match against the computer
pub struct Match {
    config: Config,
    court: Court,
    difficulty: Difficulty,
    score: Score,
    winner: Option<Owner>,
    fsm: MatchFsm,
    rng: GameRng,
    events: Events,
    score_flash: ScoreFlash,
}

impl Match {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let difficulty = Difficulty::for_level(config.level)?;
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut court = Court::new(config.field(), config.size_scale(), &difficulty);
        court.ball.serve(court.field.center(), &mut rng);

        tracing::debug!(?config, "match created");
        Ok(Self {
            config,
            court,
            difficulty,
            score: Score::new(),
            winner: None,
            fsm: MatchFsm::new(),
            rng,
            events: Events::new(),
            score_flash: ScoreFlash::new(),
        })
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Owner> {
        self.winner
    }

    pub fn ball(&self) -> &Ball {
        &self.court.ball
    }

    pub fn player(&self) -> &Paddle {
        &self.court.player
    }

    pub fn ai(&self) -> &Paddle {
        &self.court.ai
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    /// Direct access to the field contents, for scripted setups
    pub fn court_mut(&mut self) -> &mut Court {
        &mut self.court
    }

    pub fn field(&self) -> Field {
        self.court.field
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Begin, resume or replay. A finished match is reset first.
    pub fn start(&mut self) -> TransitionResult {
        if self.winner.is_some() {
            self.reset();
        }
        self.fsm.transition(MatchAction::Start)
    }

    pub fn pause(&mut self) -> TransitionResult {
        self.fsm.transition(MatchAction::Pause)
    }

    /// Start when idle, pause when playing
    pub fn toggle(&mut self) -> TransitionResult {
        if self.fsm.is_playing() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Return to the menu. Scores survive so a later `start` resumes them.
    pub fn stop(&mut self) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::Stop);
        if result.success() {
            self.court.ball.serve(self.court.field.center(), &mut self.rng);
            if let Some(intent) = self.court.player.intent_mut() {
                intent.clear();
            }
        }
        result
    }

    /// Fresh match in the menu: scores cleared, paddles centered, ball served
    pub fn reset(&mut self) {
        if self.fsm.state() != MatchState::Menu {
            self.fsm.transition(MatchAction::Stop);
        }
        self.score.reset();
        self.winner = None;
        self.score_flash = ScoreFlash::new();
        self.events.clear();

        // Serve direction keeps alternating across resets
        let last_vel = self.court.ball.vel;
        let field = self.court.field;
        self.court = Court::new(field, self.config.size_scale(), &self.difficulty);
        self.court.ball.vel = last_vel;
        self.court.ball.serve(field.center(), &mut self.rng);
        tracing::debug!("match reset");
    }

    /// Advance the simulation by `dt` seconds. No-op unless playing.
    pub fn tick(&mut self, dt: f32) {
        if !self.fsm.is_playing() {
            return;
        }

        self.court.clear_glow();
        self.events.clear();

        // Fixed micro-steps for stable physics
        let mut remaining_dt = dt.clamp(0.0, Params::MAX_DT);
        while remaining_dt > 0.0 {
            let step_dt = remaining_dt.min(Params::FIXED_DT);
            remaining_dt -= step_dt;

            // Small fields need finer steps so the ball cannot skip a paddle
            let scale = step_dt * Params::NOMINAL_HZ;
            let substeps = self.court.substeps(scale);
            for _ in 0..substeps {
                self.step(scale / substeps as f32);
                if !self.fsm.is_playing() {
                    return;
                }
            }
        }
    }

    /// One simulation step; `scale` is elapsed time in nominal frames
    fn step(&mut self, scale: f32) {
        let smoothing = self.config.paddle_smoothing;

        // 1. Player paddle follows its target or held keys
        move_paddle(
            &mut self.court,
            Owner::Player,
            &self.difficulty,
            smoothing,
            scale,
            &mut self.rng,
        );

        // 2. Move ball
        move_ball(&mut self.court, scale);

        // 3. Top and bottom walls
        check_walls(&mut self.court, &mut self.events);

        // 4. AI predicts and moves
        move_paddle(
            &mut self.court,
            Owner::Ai,
            &self.difficulty,
            smoothing,
            scale,
            &mut self.rng,
        );

        // 5. Paddle on the ball's half
        check_paddle_collision(&mut self.court, &mut self.events);

        // 6. Ball out of bounds
        let Some((scorer, total)) = check_scoring(
            &mut self.court,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        ) else {
            return;
        };

        self.score_flash.start(scorer, Params::SCORE_FLASH_SECS);
        if total >= self.config.win_score {
            self.winner = Some(scorer);
            self.fsm.transition(MatchAction::Win);
            self.events.push(GameEvent::MatchWon(scorer));
            tracing::info!(
                winner = ?scorer,
                player = self.score.player,
                ai = self.score.ai,
                "match won"
            );
        }
    }

    pub fn set_level(&mut self, level: u8) -> Result<(), ConfigError> {
        self.difficulty = Difficulty::for_level(level)?;
        self.config.level = level;
        self.court.ai.speed = self.difficulty.speed;
        tracing::debug!(level, speed = self.difficulty.speed, "difficulty changed");
        Ok(())
    }

    pub fn set_paddle_smoothing(&mut self, enabled: bool) {
        self.config.paddle_smoothing = enabled;
        tracing::debug!(enabled, "paddle smoothing changed");
    }

    pub fn set_control_mode(&mut self, mode: ControlMode) {
        self.config.control_mode = mode;
        tracing::debug!(?mode, "control mode changed");
    }

    /// Takes effect from the next point. A side already past the new
    /// threshold wins on its own next point.
    pub fn set_win_score(&mut self, win_score: u32) -> Result<(), ConfigError> {
        validate_win_score(win_score)?;
        self.config.win_score = win_score;
        tracing::debug!(win_score, "win score changed");
        Ok(())
    }

    /// Pointer moved to field Y `y`. Returns false when pointer input is off.
    pub fn pointer_moved(&mut self, y: f32) -> bool {
        if self.config.control_mode == ControlMode::Discrete {
            return false;
        }

        let field_height = self.court.field.height;
        let paddle = &mut self.court.player;
        paddle.set_target_y(y - paddle.height / 2.0, field_height);
        if !self.fsm.is_playing() {
            paddle.y = paddle.target_y();
        }
        true
    }

    /// Key press or release by DOM key name. Returns false for unbound keys.
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        match self.court.player.intent_mut() {
            Some(intent) => handle_key(key, pressed, intent),
            None => false,
        }
    }

    /// Replace the held intents, e.g. from on-screen buttons
    pub fn set_move_intent(&mut self, intent: MoveIntent) {
        if let Some(current) = self.court.player.intent_mut() {
            *current = intent;
        }
    }

    /// Rescale everything to a new field without touching match state
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        validate_field(width, height)?;
        self.court.resize(Field::new(width, height));
        self.config.field_width = width;
        self.config.field_height = height;
        tracing::debug!(width, height, "field resized");
        Ok(())
    }

    /// Take the events raised by the last tick
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    /// Advance frame-time cosmetics
    pub fn update_cosmetics(&mut self, dt: f32) {
        self.score_flash.update(dt);
    }

    pub fn score_flash(&self) -> Option<Owner> {
        self.score_flash.active()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            field_width: self.court.field.width,
            field_height: self.court.field.height,
            ball: BallView::from(&self.court.ball),
            player: PaddleView::from(&self.court.player),
            ai: PaddleView::from(&self.court.ai),
            player_score: self.score.player,
            ai_score: self.score.ai,
            state: self.fsm.state(),
            winner: self.winner,
            level: self.difficulty.level,
            score_flash: self.score_flash.active(),
        }
    }
}
