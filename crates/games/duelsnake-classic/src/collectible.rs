use rand::Rng;
use serde::{Deserialize, Serialize};

use duelsnake_core::error::GameError;
use duelsnake_core::grid::{CELL_COUNT, Cell, random_free_cell};

use crate::config::DuelConfig;

/// Flavour of a collectible. Food and power-ups differ only in value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Food,
    PowerUp,
}

impl CollectibleKind {
    pub fn points(self, config: &DuelConfig) -> u32 {
        match self {
            CollectibleKind::Food => config.food_points,
            CollectibleKind::PowerUp => config.powerup_points,
        }
    }
}

/// An item on the grid. `position` is `None` while the item is not placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collectible {
    pub kind: CollectibleKind,
    position: Option<Cell>,
}

impl Collectible {
    /// A collectible that is not yet on the grid.
    pub fn new(kind: CollectibleKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }

    /// Choose a cell absent from every occupied view, without moving.
    pub fn place_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        occupied: &[&[Cell]],
    ) -> Result<Cell, GameError> {
        random_free_cell(rng, CELL_COUNT, occupied).ok_or(GameError::NoFreeCell {
            cell_count: CELL_COUNT,
        })
    }

    /// Put the collectible on a free cell. On a full grid it is left inactive.
    pub fn activate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        occupied: &[&[Cell]],
    ) -> Result<Cell, GameError> {
        match self.place_random(rng, occupied) {
            Ok(cell) => {
                self.position = Some(cell);
                Ok(cell)
            },
            Err(e) => {
                self.position = None;
                Err(e)
            },
        }
    }

    pub fn deactivate(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Cell> {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }

    /// Whether the collectible is on the grid at `cell`.
    pub fn is_at(&self, cell: Cell) -> bool {
        self.position == Some(cell)
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, cell: Cell) {
        self.position = Some(cell);
    }
}
