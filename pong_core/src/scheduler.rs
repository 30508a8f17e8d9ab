//! Frame scheduler
//!
//! Turns host frame callbacks into simulation ticks and render passes. The
//! host owns the pacing primitive (`requestAnimationFrame`, a game loop, a
//! test) and calls [`FrameScheduler::frame`] with its timestamp, or
//! [`FrameScheduler::advance`] with an explicit step.

use crate::controller::Match;
use crate::fsm::MatchState;
use crate::params::Params;
use crate::resources::GameEvent;
use crate::snapshot::FrameSnapshot;

/// Draws a frame
pub trait Presenter {
    fn render(&mut self, frame: &FrameSnapshot);
}

/// Receives discrete feedback events (sound, haptics)
pub trait FeedbackSink {
    fn notify(&mut self, event: GameEvent);
}

impl Presenter for () {
    fn render(&mut self, _frame: &FrameSnapshot) {}
}

/// Keeps the most recent frame
impl Presenter for Option<FrameSnapshot> {
    fn render(&mut self, frame: &FrameSnapshot) {
        *self = Some(frame.clone());
    }
}

impl FeedbackSink for () {
    fn notify(&mut self, _event: GameEvent) {}
}

impl FeedbackSink for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Whether the host should keep requesting frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    /// Nothing is moving; wait for input before the next frame
    Idle,
}

#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    last_timestamp_ms: Option<f64>,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host frame callback. The first frame after creation or
    /// [`reset_clock`](Self::reset_clock) only renders.
    pub fn frame(
        &mut self,
        now_ms: f64,
        game: &mut Match,
        presenter: &mut impl Presenter,
        feedback: &mut impl FeedbackSink,
    ) -> FrameStatus {
        let dt = match self.last_timestamp_ms {
            Some(last) => ((now_ms - last).max(0.0) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_timestamp_ms = Some(now_ms);
        self.advance(dt, game, presenter, feedback)
    }

    /// Run one frame with an explicit elapsed time in seconds
    pub fn advance(
        &mut self,
        dt: f32,
        game: &mut Match,
        presenter: &mut impl Presenter,
        feedback: &mut impl FeedbackSink,
    ) -> FrameStatus {
        let dt = dt.clamp(0.0, Params::MAX_DT);
        self.frames += 1;

        if game.state() == MatchState::Playing {
            game.tick(dt);
        }
        for event in game.drain_events() {
            feedback.notify(event);
        }
        game.update_cosmetics(dt);
        presenter.render(&game.snapshot());

        if game.state() == MatchState::Playing || game.score_flash().is_some() {
            FrameStatus::Continue
        } else {
            FrameStatus::Idle
        }
    }

    /// Forget the last timestamp, e.g. after the host stopped requesting
    /// frames, so the gap is not simulated.
    pub fn reset_clock(&mut self) {
        self.last_timestamp_ms = None;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
