use serde::{Deserialize, Serialize};

use crate::input::{InputSource, InputState};

/// One scripted key press, `at` seconds after the match starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPress {
    pub at: f64,
    pub key: String,
}

/// A timed sequence of key presses for a headless match.
///
/// ```toml
/// [[press]]
/// at = 0.5
/// key = "ArrowUp"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub press: Vec<KeyPress>,
}

impl Script {
    pub fn load(path: &str) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScriptError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse a script. Presses are sorted by time.
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        let mut script: Self =
            toml::from_str(content).map_err(|e| ScriptError::Parse(e.to_string()))?;
        if let Some(bad) = script.press.iter().find(|p| !p.at.is_finite() || p.at < 0.0) {
            return Err(ScriptError::BadTime(bad.at));
        }
        script.press.sort_by(|a, b| a.at.total_cmp(&b.at));
        Ok(script)
    }
}

/// Replays a [`Script`] into an [`InputState`] frame by frame.
///
/// Each press is held for exactly one frame.
#[derive(Debug)]
pub struct ScriptedInput {
    presses: Vec<KeyPress>,
    next: usize,
    held: Vec<String>,
}

impl ScriptedInput {
    pub fn new(script: Script) -> Self {
        Self {
            presses: script.press,
            next: 0,
            held: Vec::new(),
        }
    }

    /// Whether presses remain to be replayed.
    pub fn is_pending(&self) -> bool {
        self.next < self.presses.len()
    }
}

impl InputSource for ScriptedInput {
    /// Release last frame's keys and press every key due by `now`.
    fn poll(&mut self, now: f64, input: &mut InputState) {
        for key in self.held.drain(..) {
            input.on_key_up(&key);
        }
        while let Some(press) = self.presses.get(self.next)
            && press.at <= now
        {
            tracing::debug!(key = %press.key, at = press.at, "Scripted press");
            input.on_key_down(&press.key);
            self.held.push(press.key.clone());
            self.next += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    Io { path: String, message: String },
    Parse(String),
    BadTime(f64),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read {path}: {message}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::BadTime(at) => write!(f, "press time {at} must be a non-negative number"),
        }
    }
}

impl std::error::Error for ScriptError {}
