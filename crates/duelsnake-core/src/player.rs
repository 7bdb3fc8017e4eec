use serde::{Deserialize, Serialize};

/// One of the two seats in a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const BOTH: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Zero-based index, for per-player arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    /// The player number shown to humans (1 or 2).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Snake body colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PlayerColor {
    pub const DARK_GREEN: PlayerColor = PlayerColor { r: 0, g: 117, b: 44 };
    pub const DARK_BLUE: PlayerColor = PlayerColor {
        r: 0,
        g: 82,
        b: 172,
    };

    /// Default colour for each seat.
    pub fn for_slot(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::One => Self::DARK_GREEN,
            PlayerSlot::Two => Self::DARK_BLUE,
        }
    }
}
