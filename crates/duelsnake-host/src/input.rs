use std::collections::HashSet;

/// Keyboard state for one frame. Keys are named by their `KeyboardEvent.code`
/// strings (`"ArrowUp"`, `"KeyW"`, `"Space"`).
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    pub keys_down: HashSet<String>,
    /// Keys pressed this frame (cleared each frame).
    pub keys_just_pressed: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key down event. Auto-repeat of a held key is not a new press.
    pub fn on_key_down(&mut self, code: &str) {
        if self.keys_down.insert(code.to_string()) {
            self.keys_just_pressed.insert(code.to_string());
        }
    }

    pub fn on_key_up(&mut self, code: &str) {
        self.keys_down.remove(code);
    }

    pub fn is_key_down(&self, code: &str) -> bool {
        self.keys_down.contains(code)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_just_pressed(&self, code: &str) -> bool {
        self.keys_just_pressed.contains(code)
    }

    /// Clear per-frame state. Call at the end of each frame.
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
    }
}

/// Delivers key events into an [`InputState`] once per frame.
pub trait InputSource {
    fn poll(&mut self, now: f64, input: &mut InputState);
}
