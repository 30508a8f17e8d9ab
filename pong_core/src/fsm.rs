//! Match State Machine
//!
//! Menu → Playing ⇄ Paused, Playing → Ended → Playing. Stop returns to the
//! menu from anywhere else. Invalid transitions leave the state untouched.

use serde::Serialize;

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    Menu,
    Playing,
    Paused,
    Ended,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    Pause,
    Win,
    Stop,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: MatchState,
    to_state: MatchState,
    action: MatchAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn from_state(&self) -> MatchState {
        self.from_state
    }

    pub fn to_state(&self) -> MatchState {
        self.to_state
    }

    pub fn action(&self) -> MatchAction {
        self.action
    }
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::Menu,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            tracing::info!(?from_state, to_state = ?next_state, ?action, "match state changed");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            tracing::debug!(state = ?from_state, ?action, "transition rejected");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            // Start, resume or play again
            (MatchState::Menu, MatchAction::Start) => Some(MatchState::Playing),
            (MatchState::Paused, MatchAction::Start) => Some(MatchState::Playing),
            (MatchState::Ended, MatchAction::Start) => Some(MatchState::Playing),

            // From Playing
            (MatchState::Playing, MatchAction::Pause) => Some(MatchState::Paused),
            (MatchState::Playing, MatchAction::Win) => Some(MatchState::Ended),

            // Back to the menu
            (MatchState::Playing | MatchState::Paused | MatchState::Ended, MatchAction::Stop) => {
                Some(MatchState::Menu)
            }

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }

    pub fn is_ended(&self) -> bool {
        self.state == MatchState::Ended
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
