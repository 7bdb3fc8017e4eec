/// Errors raised by round operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Restart was requested while the round is still being played.
    RoundInProgress,
    /// Every cell of the playfield is occupied; nothing can be placed.
    NoFreeCell { cell_count: i32 },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundInProgress => write!(f, "round still in progress"),
            Self::NoFreeCell { cell_count } => {
                write!(f, "no free cell on a {cell_count}x{cell_count} grid")
            },
        }
    }
}

impl std::error::Error for GameError {}
