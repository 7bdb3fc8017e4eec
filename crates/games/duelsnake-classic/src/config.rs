use serde::{Deserialize, Serialize};

use duelsnake_core::grid::{CELL_COUNT, Cell, Direction, in_bounds};

use crate::snake::INITIAL_LENGTH;

/// How a tick where both snakes crash is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Checks run wall, self, opponent, each for player 1 then player 2; the
    /// first snake caught loses. Same-kind mutual crashes go to player 2.
    FirstCheckWins,
    /// Any tick where both snakes crash is a draw.
    Draw,
}

/// Starting head cell and heading for one snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

impl SpawnPoint {
    pub fn head(&self) -> Cell {
        Cell::new(self.x, self.y)
    }
}

/// Data-driven configuration for the duel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Seconds between simulation ticks.
    pub tick_interval_secs: f64,
    /// Points for eating food.
    pub food_points: u32,
    /// Points for eating the power-up.
    pub powerup_points: u32,
    /// How long an untouched power-up stays on the grid (seconds).
    pub powerup_visible_secs: f64,
    /// Lower bound of the hidden gap before the power-up reappears (seconds).
    pub powerup_gap_min_secs: f64,
    /// Upper bound (exclusive) of the hidden gap (seconds).
    pub powerup_gap_max_secs: f64,
    pub tie_break: TieBreak,
    pub spawn_one: SpawnPoint,
    pub spawn_two: SpawnPoint,
    /// Fixed RNG seed for reproducible rounds. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: 0.2,
            food_points: 1,
            powerup_points: 5,
            powerup_visible_secs: 10.0,
            powerup_gap_min_secs: 15.0,
            powerup_gap_max_secs: 16.0,
            tie_break: TieBreak::FirstCheckWins,
            spawn_one: SpawnPoint {
                x: 6,
                y: 9,
                direction: Direction::Right,
            },
            spawn_two: SpawnPoint {
                x: 18,
                y: 9,
                direction: Direction::Left,
            },
            seed: None,
        }
    }
}

impl DuelConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing, unparseable, or invalid.
    pub fn load() -> Self {
        let path = std::env::var("DUELSNAKE_CONFIG")
            .unwrap_or_else(|_| "config/duelsnake.toml".to_string());
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match Self::from_toml(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("Failed to load {path}: {e}, using defaults");
                Self::default()
            },
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.tick_interval_secs) {
            return Err(ConfigError::NonPositive("tick_interval_secs"));
        }
        if !is_positive(self.powerup_visible_secs) {
            return Err(ConfigError::NonPositive("powerup_visible_secs"));
        }
        if !is_positive(self.powerup_gap_min_secs) {
            return Err(ConfigError::NonPositive("powerup_gap_min_secs"));
        }
        if !self.powerup_gap_max_secs.is_finite() {
            return Err(ConfigError::NonFinite("powerup_gap_max_secs"));
        }
        if self.powerup_gap_max_secs < self.powerup_gap_min_secs {
            return Err(ConfigError::EmptyGapRange {
                min: self.powerup_gap_min_secs,
                max: self.powerup_gap_max_secs,
            });
        }
        for (name, spawn) in [("spawn_one", &self.spawn_one), ("spawn_two", &self.spawn_two)] {
            let last = (1..INITIAL_LENGTH).fold(spawn.head(), |cell, _| {
                cell.step(spawn.direction.opposite())
            });
            if !in_bounds(spawn.head(), CELL_COUNT) || !in_bounds(last, CELL_COUNT) {
                return Err(ConfigError::SpawnOutOfBounds(name));
            }
        }
        Ok(())
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Errors from parsing or validating a [`DuelConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    NonPositive(&'static str),
    NonFinite(&'static str),
    EmptyGapRange { min: f64, max: f64 },
    SpawnOutOfBounds(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::NonPositive(field) => write!(f, "{field} must be positive"),
            Self::NonFinite(field) => write!(f, "{field} must be a finite number"),
            Self::EmptyGapRange { min, max } => {
                write!(f, "power-up gap range [{min}, {max}) is empty")
            },
            Self::SpawnOutOfBounds(field) => {
                write!(f, "{field} places the starting body outside the grid")
            },
        }
    }
}

impl std::error::Error for ConfigError {}
