use serde::{Deserialize, Serialize};

use duelsnake_core::player::PlayerSlot;

/// Per-round scores. Only ever increase until the next reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    scores: [u32; 2],
}

impl Scoreboard {
    /// Add `points` to `slot` and return the new total.
    pub fn award(&mut self, slot: PlayerSlot, points: u32) -> u32 {
        let score = &mut self.scores[slot.index()];
        *score = score.saturating_add(points);
        *score
    }

    pub fn get(&self, slot: PlayerSlot) -> u32 {
        self.scores[slot.index()]
    }

    pub fn as_array(&self) -> [u32; 2] {
        self.scores
    }

    pub fn reset(&mut self) {
        self.scores = [0, 0];
    }
}
