//! Deterministic single-player Pong simulation.
//!
//! A [`Match`] owns the field, ball, both paddles and the score, and advances
//! them in fixed micro-steps. A [`FrameScheduler`] drives it from host frame
//! callbacks and hands each frame to a [`Presenter`] and every discrete event
//! to a [`FeedbackSink`]. Rendering, audio and device capture live outside
//! this crate.

pub mod ai;
pub mod ball;
pub mod config;
pub mod controller;
pub mod court;
pub mod error;
pub mod fsm;
pub mod geometry;
pub mod input;
pub mod paddle;
pub mod params;
pub mod resources;
pub mod scheduler;
pub mod snapshot;
pub mod systems;

pub use ai::{Difficulty, MAX_LEVEL, MIN_LEVEL};
pub use ball::Ball;
pub use config::Config;
pub use controller::Match;
pub use court::Court;
pub use error::ConfigError;
pub use fsm::{MatchAction, MatchFsm, MatchState, TransitionResult};
pub use geometry::{Aabb, Field};
pub use input::{ControlMode, MoveIntent};
pub use paddle::{Owner, Paddle};
pub use params::*;
pub use resources::*;
pub use scheduler::{FeedbackSink, FrameScheduler, FrameStatus, Presenter};
pub use snapshot::{BallView, FrameSnapshot, PaddleView};
