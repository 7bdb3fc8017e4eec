use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::events::{GameEvent, RoundOutcome};
use crate::grid::Direction;
use crate::player::PlayerSlot;

/// Core trait implemented by a tick-driven duel game.
///
/// The host owns the clock, input devices, renderer, and audio; the game only
/// handles simulation. Times are monotonic seconds from the host's [`Clock`].
///
/// [`Clock`]: crate::time::Clock
pub trait TickGame {
    /// Read-only snapshot handed to the renderer each frame.
    type Frame;

    /// Game metadata for banners and logs.
    fn metadata(&self) -> GameMetadata;

    /// Seconds between simulation ticks.
    fn tick_interval(&self) -> f64 {
        0.2
    }

    /// Advance the simulation one tick. A no-op once the round is over.
    fn update(&mut self, now: f64) -> Vec<GameEvent>;

    /// Request a direction change for `slot`, effective on the next tick.
    /// Returns whether the request was accepted.
    fn steer(&mut self, slot: PlayerSlot, direction: Direction) -> bool;

    /// Start a fresh round. Rejected while a round is in progress.
    fn restart(&mut self, now: f64) -> Result<(), GameError>;

    /// Whether the current round is still being played.
    fn is_running(&self) -> bool;

    /// Outcome of the round, once it has ended.
    fn outcome(&self) -> Option<RoundOutcome>;

    /// Current scores, indexed by [`PlayerSlot::index`].
    fn scores(&self) -> [u32; 2];

    /// Snapshot for the render boundary.
    fn frame(&self) -> Self::Frame;
}

/// Game metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub players: u8,
}
