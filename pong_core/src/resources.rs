use rand::Rng;

use crate::paddle::Owner;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, owner: Owner) -> u32 {
        match owner {
            Owner::Player => self.player,
            Owner::Ai => self.ai,
        }
    }

    /// Add a point and return the scorer's new total
    pub fn increment(&mut self, owner: Owner) -> u32 {
        let slot = match owner {
            Owner::Player => &mut self.player,
            Owner::Ai => &mut self.ai,
        };
        *slot += 1;
        *slot
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Uniform sample in `[-half_range, half_range]`
    pub fn symmetric(&mut self, half_range: f32) -> f32 {
        let half_range = half_range.abs();
        self.0.gen_range(-half_range..=half_range)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Discrete feedback signal for the audio/feedback layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "side", rename_all = "snake_case")]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Owner),
    Score(Owner),
    MatchWon(Owner),
}

/// Events that occurred during the current tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pending: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn contains(&self, event: GameEvent) -> bool {
        self.pending.contains(&event)
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.pending.drain(..)
    }
}

/// Cosmetic highlight of the side that just scored.
///
/// Runs on frame time, independent of the simulation tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreFlash {
    side: Option<Owner>,
    timer: f32, // Seconds remaining (0 = inactive)
}

impl ScoreFlash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, side: Owner, duration: f32) {
        self.side = Some(side);
        self.timer = duration;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
            if self.timer <= 0.0 {
                self.side = None;
            }
        }
    }

    pub fn active(&self) -> Option<Owner> {
        self.side
    }
}
