use serde::{Deserialize, Serialize};

use duelsnake_core::grid::{CELL_COUNT, Cell};
use duelsnake_core::player::{PlayerColor, PlayerSlot};

/// Background fill.
pub const LIGHT: PlayerColor = PlayerColor {
    r: 173,
    g: 204,
    b: 96,
};
/// Border, title and score text.
pub const DARK: PlayerColor = PlayerColor { r: 43, g: 51, b: 24 };
/// Winner banner and restart hint.
pub const RED: PlayerColor = PlayerColor { r: 230, g: 41, b: 55 };

pub const BORDER_THICKNESS: f32 = 5.0;
pub const TITLE_FONT_SIZE: u16 = 40;
pub const SCORE_FONT_SIZE: u16 = 20;
pub const BANNER_FONT_SIZE: u16 = 40;
pub const HINT_FONT_SIZE: u16 = 20;

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Pixel geometry of the window: a square grid inset by `offset` on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub cell_size: f32,
    pub offset: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            offset: 75.0,
        }
    }
}

impl Layout {
    /// Side length of the playfield in pixels.
    pub fn grid_extent(&self) -> f32 {
        self.cell_size * CELL_COUNT as f32
    }

    /// Width and height of the (square) window.
    pub fn window_size(&self) -> (f32, f32) {
        let side = 2.0 * self.offset + self.grid_extent();
        (side, side)
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect {
            x: self.offset + cell.x as f32 * self.cell_size,
            y: self.offset + cell.y as f32 * self.cell_size,
            w: self.cell_size,
            h: self.cell_size,
        }
    }

    /// Frame drawn around the playfield, just outside it.
    pub fn border_rect(&self) -> Rect {
        Rect {
            x: self.offset - BORDER_THICKNESS,
            y: self.offset - BORDER_THICKNESS,
            w: self.grid_extent() + 2.0 * BORDER_THICKNESS,
            h: self.grid_extent() + 2.0 * BORDER_THICKNESS,
        }
    }

    pub fn title_pos(&self) -> (f32, f32) {
        (self.offset - BORDER_THICKNESS, 20.0)
    }

    /// Score text sits just below the playfield, player 1 left, player 2 right.
    pub fn score_pos(&self, slot: PlayerSlot) -> (f32, f32) {
        let y = self.offset + self.grid_extent() + 10.0;
        match slot {
            PlayerSlot::One => (self.offset - BORDER_THICKNESS, y),
            PlayerSlot::Two => (self.offset + 300.0, y),
        }
    }

    pub fn banner_pos(&self) -> (f32, f32) {
        (self.offset + 100.0, self.offset + self.grid_extent() / 2.0)
    }

    pub fn hint_pos(&self) -> (f32, f32) {
        let (x, y) = self.banner_pos();
        (x, y + 50.0)
    }
}

/// Score label, zero-padded to two digits.
pub fn score_label(slot: PlayerSlot, score: u32) -> String {
    format!("P{} Score: {score:02}", slot.number())
}
