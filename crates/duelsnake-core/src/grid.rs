use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of cells along each side of the square playfield.
pub const CELL_COUNT: i32 = 25;

/// Random samples drawn before falling back to a linear scan for a free cell.
pub const MAX_SPAWN_ATTEMPTS: usize = 4 * (CELL_COUNT * CELL_COUNT) as usize;

/// One integer grid coordinate. Cells outside the playfield are representable
/// so a head that steps past the edge can be detected as a wall hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Cardinal direction on the grid. `Up` decreases y (screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Linear membership test.
pub fn contains(cell: Cell, cells: &[Cell]) -> bool {
    cells.iter().any(|&c| c == cell)
}

/// Whether `cell` lies inside a `cell_count` × `cell_count` playfield.
pub fn in_bounds(cell: Cell, cell_count: i32) -> bool {
    (0..cell_count).contains(&cell.x) && (0..cell_count).contains(&cell.y)
}

fn is_free(cell: Cell, occupied: &[&[Cell]]) -> bool {
    occupied.iter().all(|cells| !contains(cell, cells))
}

/// Pick a uniformly random cell that is absent from every `occupied` view.
///
/// Sampling is capped at [`MAX_SPAWN_ATTEMPTS`]; past the cap the grid is
/// scanned row by row, so a free cell is always found if one exists. Returns
/// `None` only when the occupied views cover the whole grid.
pub fn random_free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    cell_count: i32,
    occupied: &[&[Cell]],
) -> Option<Cell> {
    if cell_count <= 0 {
        return None;
    }

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let cell = Cell::new(
            rng.random_range(0..cell_count),
            rng.random_range(0..cell_count),
        );
        if is_free(cell, occupied) {
            return Some(cell);
        }
    }

    tracing::debug!(cell_count, "Spawn sampling exhausted, scanning for a free cell");
    (0..cell_count)
        .flat_map(|y| (0..cell_count).map(move |x| Cell::new(x, y)))
        .find(|&cell| is_free(cell, occupied))
}
