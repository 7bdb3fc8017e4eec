use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use duelsnake_core::grid::{Cell, Direction};
use duelsnake_core::player::PlayerColor;

/// Segments in a freshly spawned snake.
pub const INITIAL_LENGTH: usize = 3;

/// One player's snake. The head is at the front of `body`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SnakeData")]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    color: PlayerColor,
    pending_growth: bool,
    /// Set once a direction change has been accepted for the coming tick.
    steered: bool,
}

/// Wire form of a [`Snake`], checked before it becomes one.
#[derive(Deserialize)]
struct SnakeData {
    body: VecDeque<Cell>,
    direction: Direction,
    color: PlayerColor,
    pending_growth: bool,
    steered: bool,
}

impl TryFrom<SnakeData> for Snake {
    type Error = &'static str;

    fn try_from(data: SnakeData) -> Result<Self, Self::Error> {
        if data.body.is_empty() {
            return Err("snake body must have at least one segment");
        }
        Ok(Self {
            body: data.body,
            direction: data.direction,
            color: data.color,
            pending_growth: data.pending_growth,
            steered: data.steered,
        })
    }
}

impl Snake {
    pub fn new(head: Cell, direction: Direction, color: PlayerColor) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(INITIAL_LENGTH),
            direction,
            color,
            pending_growth: false,
            steered: false,
        };
        snake.reset_to(head, direction);
        snake
    }

    /// Rebuild the starting body: the head plus segments trailing behind it.
    pub fn reset_to(&mut self, head: Cell, direction: Direction) {
        self.body.clear();
        let mut cell = head;
        for _ in 0..INITIAL_LENGTH {
            self.body.push_back(cell);
            cell = cell.step(direction.opposite());
        }
        self.direction = direction;
        self.pending_growth = false;
        self.steered = false;
    }

    /// Move one cell forward. The tail is dropped unless growth is pending.
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
        self.steered = false;
    }

    /// Keep the tail on the next advance. Repeated calls before that advance
    /// still grow the snake by a single segment.
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Request a new heading for the next advance.
    ///
    /// Rejected when `direction` would reverse into the neck or when a turn
    /// was already accepted since the last advance. Re-asserting the current
    /// heading is accepted and leaves the turn available.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction {
            return true;
        }
        if self.steered || direction.is_opposite(self.direction) {
            return false;
        }
        self.direction = direction;
        self.steered = true;
        true
    }

    pub fn head(&self) -> Cell {
        // Never empty: reset_to seeds it, advance pushes before it pops and
        // deserialization rejects an empty body.
        self.body[0]
    }

    /// Every segment after the head.
    pub fn tail_segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter().skip(1)
    }

    /// The body as two borrowed views, head first, for placement checks.
    pub fn views(&self) -> [&[Cell]; 2] {
        let (front, back) = self.body.as_slices();
        [front, back]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn color(&self) -> PlayerColor {
        self.color
    }

    pub fn has_pending_growth(&self) -> bool {
        self.pending_growth
    }

    /// Whether any segment occupies `cell`.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Build a snake from an explicit body, head first.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: Vec<Cell>, direction: Direction, color: PlayerColor) -> Self {
        assert!(!cells.is_empty(), "a snake needs at least one segment");
        Self {
            body: cells.into(),
            direction,
            color,
            pending_growth: false,
            steered: false,
        }
    }
}
