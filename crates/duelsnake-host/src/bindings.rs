use serde::{Deserialize, Serialize};

use duelsnake_core::grid::Direction;
use duelsnake_core::player::PlayerSlot;

use crate::input::InputState;

/// Order in which a frame's direction presses are considered.
const ROUTING_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Right,
    Direction::Left,
];

/// The four steering keys of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionKeys {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl DirectionKeys {
    pub fn arrows() -> Self {
        Self {
            up: "ArrowUp".to_string(),
            down: "ArrowDown".to_string(),
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
        }
    }

    pub fn wasd() -> Self {
        Self {
            up: "KeyW".to_string(),
            down: "KeyS".to_string(),
            left: "KeyA".to_string(),
            right: "KeyD".to_string(),
        }
    }

    pub fn key(&self, direction: Direction) -> &str {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

/// Keyboard layout for both players plus the restart key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub player_one: DirectionKeys,
    pub player_two: DirectionKeys,
    pub restart: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player_one: DirectionKeys::arrows(),
            player_two: DirectionKeys::wasd(),
            restart: "Space".to_string(),
        }
    }
}

impl KeyBindings {
    /// Load bindings from `DUELSNAKE_BINDINGS` or `config/bindings.toml`,
    /// falling back to the defaults.
    pub fn load() -> Self {
        let path = std::env::var("DUELSNAKE_BINDINGS")
            .unwrap_or_else(|_| "config/bindings.toml".to_string());
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match Self::from_toml(&content) {
            Ok(bindings) => bindings,
            Err(e) => {
                tracing::warn!("Failed to load {path}: {e}, using default bindings");
                Self::default()
            },
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, BindingsError> {
        let bindings: Self =
            toml::from_str(content).map_err(|e| BindingsError::Parse(e.to_string()))?;
        bindings.validate()?;
        Ok(bindings)
    }

    /// Every key may drive at most one action.
    pub fn validate(&self) -> Result<(), BindingsError> {
        let mut seen: Vec<&str> = Vec::with_capacity(9);
        let all = ROUTING_ORDER
            .iter()
            .flat_map(|&d| [self.player_one.key(d), self.player_two.key(d)])
            .chain(std::iter::once(self.restart.as_str()));
        for key in all {
            if seen.contains(&key) {
                return Err(BindingsError::DuplicateKey(key.to_string()));
            }
            seen.push(key);
        }
        Ok(())
    }

    pub fn keys(&self, slot: PlayerSlot) -> &DirectionKeys {
        match slot {
            PlayerSlot::One => &self.player_one,
            PlayerSlot::Two => &self.player_two,
        }
    }

    /// Directions `slot` pressed this frame, in routing order.
    pub fn pressed<'a>(
        &'a self,
        slot: PlayerSlot,
        input: &'a InputState,
    ) -> impl Iterator<Item = Direction> + 'a {
        let keys = self.keys(slot);
        ROUTING_ORDER
            .into_iter()
            .filter(move |&d| input.is_key_just_pressed(keys.key(d)))
    }

    pub fn restart_pressed(&self, input: &InputState) -> bool {
        input.is_key_just_pressed(&self.restart)
    }
}

/// Errors from parsing or validating [`KeyBindings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingsError {
    Parse(String),
    DuplicateKey(String),
}

impl std::fmt::Display for BindingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::DuplicateKey(key) => write!(f, "key {key} is bound more than once"),
        }
    }
}

impl std::error::Error for BindingsError {}
