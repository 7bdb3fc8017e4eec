use duelsnake_core::events::{CrashCause, RoundOutcome};
use duelsnake_core::grid::{CELL_COUNT, in_bounds};
use duelsnake_core::player::PlayerSlot;

use crate::config::TieBreak;
use crate::snake::Snake;

/// Whether the snake's head has left the playfield.
pub fn hits_wall(snake: &Snake) -> bool {
    !in_bounds(snake.head(), CELL_COUNT)
}

/// Whether the head overlaps any of the snake's own later segments.
pub fn bites_self(snake: &Snake) -> bool {
    let head = snake.head();
    snake.tail_segments().any(|&c| c == head)
}

/// Whether the head lands anywhere on the other snake, head included.
pub fn hits_opponent(snake: &Snake, other: &Snake) -> bool {
    other.occupies(snake.head())
}

/// First terminal condition that applies, checked wall, self, opponent.
pub fn crash_cause(snake: &Snake, other: &Snake) -> Option<CrashCause> {
    if hits_wall(snake) {
        Some(CrashCause::Wall)
    } else if bites_self(snake) {
        Some(CrashCause::SelfBite)
    } else if hits_opponent(snake, other) {
        Some(CrashCause::Opponent)
    } else {
        None
    }
}

fn check_order(cause: CrashCause) -> u8 {
    match cause {
        CrashCause::Wall => 0,
        CrashCause::SelfBite => 1,
        CrashCause::Opponent => 2,
    }
}

/// A snake that lost the round and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crash {
    pub slot: PlayerSlot,
    pub cause: CrashCause,
}

/// How a tick's crashes end the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: RoundOutcome,
    /// Snakes charged with the loss, player 1 first.
    pub crashes: Vec<Crash>,
}

/// Decide the round from each snake's crash (if any) this tick.
///
/// With [`TieBreak::FirstCheckWins`] the checks are ordered wall, self,
/// opponent, and within each kind player 1 before player 2. The first snake
/// caught is the only loser, so equal-kind mutual crashes go to player 2.
pub fn resolve(
    one: Option<CrashCause>,
    two: Option<CrashCause>,
    tie_break: TieBreak,
) -> Option<Resolution> {
    let lose = |slot: PlayerSlot, cause: CrashCause| Resolution {
        outcome: RoundOutcome::Winner(slot.other()),
        crashes: vec![Crash { slot, cause }],
    };

    match (one, two) {
        (None, None) => None,
        (Some(cause), None) => Some(lose(PlayerSlot::One, cause)),
        (None, Some(cause)) => Some(lose(PlayerSlot::Two, cause)),
        (Some(c1), Some(c2)) => match tie_break {
            TieBreak::FirstCheckWins => {
                if check_order(c1) <= check_order(c2) {
                    Some(lose(PlayerSlot::One, c1))
                } else {
                    Some(lose(PlayerSlot::Two, c2))
                }
            },
            TieBreak::Draw => Some(Resolution {
                outcome: RoundOutcome::Draw,
                crashes: vec![
                    Crash {
                        slot: PlayerSlot::One,
                        cause: c1,
                    },
                    Crash {
                        slot: PlayerSlot::Two,
                        cause: c2,
                    },
                ],
            }),
        },
    }
}
