pub mod audio;
pub mod bindings;
pub mod draw;
pub mod headless;
pub mod input;
pub mod layout;
pub mod script;
pub mod session;

pub use bindings::KeyBindings;
pub use headless::{MatchOptions, MatchResult, run_match};
pub use session::{FrameReport, Session};
