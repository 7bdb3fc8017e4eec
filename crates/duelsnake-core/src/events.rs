use serde::{Deserialize, Serialize};

use crate::grid::Cell;
use crate::player::PlayerSlot;

/// What ended a snake's run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Wall,
    SelfBite,
    Opponent,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Winner(PlayerSlot),
    Draw,
}

impl RoundOutcome {
    /// Banner text shown once the round is over.
    pub fn message(self) -> String {
        match self {
            RoundOutcome::Winner(slot) => format!("Player {} Wins!", slot.number()),
            RoundOutcome::Draw => "Draw!".to_string(),
        }
    }
}

/// Events emitted by a game during update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    AteFood { slot: PlayerSlot, score: u32 },
    AtePowerUp { slot: PlayerSlot, score: u32 },
    PowerUpShown { cell: Cell },
    PowerUpHidden,
    Crashed { slot: PlayerSlot, cause: CrashCause },
    RoundComplete { outcome: RoundOutcome },
}

impl GameEvent {
    /// Sound the audio layer should play for this event, if any.
    pub fn sound_cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::AteFood { .. } => Some(SoundCue::AteFood),
            GameEvent::AtePowerUp { .. } => Some(SoundCue::AtePowerUp),
            GameEvent::Crashed { .. } => Some(SoundCue::Hit),
            GameEvent::PowerUpShown { .. }
            | GameEvent::PowerUpHidden
            | GameEvent::RoundComplete { .. } => None,
        }
    }
}

/// Named sounds the core asks the audio layer to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    AteFood,
    Hit,
    AtePowerUp,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::AteFood => "ate-food",
            SoundCue::Hit => "hit-wall-or-self-or-opponent",
            SoundCue::AtePowerUp => "ate-powerup",
        }
    }
}
