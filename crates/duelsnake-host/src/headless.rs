use serde::Serialize;

use duelsnake_classic::DuelSnake;
use duelsnake_classic::config::DuelConfig;
use duelsnake_core::events::{GameEvent, RoundOutcome};
use duelsnake_core::game_trait::TickGame;
use duelsnake_core::time::{Clock, ManualClock};

use crate::audio::CueLog;
use crate::bindings::KeyBindings;
use crate::draw::{DrawCommand, DrawList};
use crate::input::{InputSource, InputState};
use crate::script::{Script, ScriptedInput};
use crate::session::Session;

/// Frame rate the headless clock simulates.
pub const HEADLESS_FPS: f64 = 60.0;

/// Options for one headless match.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub config: DuelConfig,
    pub bindings: KeyBindings,
    pub script: Script,
    /// Give up after this many simulated seconds.
    pub max_secs: f64,
    /// Include the last frame's draw list in the result.
    pub dump_frame: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            config: DuelConfig::default(),
            bindings: KeyBindings::default(),
            script: Script::default(),
            max_secs: 120.0,
            dump_frame: false,
        }
    }
}

/// Summary printed by the headless runner.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub game: String,
    pub seed: Option<u64>,
    pub scores: [u32; 2],
    /// `None` if the match hit the time limit first.
    pub outcome: Option<RoundOutcome>,
    pub message: String,
    pub ticks: u64,
    pub frames: u64,
    pub elapsed_secs: f64,
    pub sounds: Vec<&'static str>,
    pub events: Vec<GameEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_frame: Option<Vec<DrawCommand>>,
}

/// Play one round on a manual clock until it ends or time runs out.
pub fn run_match(options: MatchOptions) -> MatchResult {
    let clock = ManualClock::new(0.0);
    let seed = options.config.seed;
    let game = DuelSnake::with_config(options.config, clock.now());
    let mut session = Session::new(game, options.bindings, clock.now());

    let mut scripted = ScriptedInput::new(options.script);
    let mut input = InputState::new();
    let mut audio = CueLog::default();
    let mut renderer = DrawList::default();
    let mut events = Vec::new();
    let dt = 1.0 / HEADLESS_FPS;

    tracing::info!(game = %session.game().metadata().name, ?seed, "Headless match starting");

    while session.game().is_running() && clock.now() < options.max_secs {
        clock.advance(dt);
        scripted.poll(clock.now(), &mut input);
        let report = session.frame(clock.now(), &input, &mut audio, &mut renderer);
        events.extend(report.events);
        input.end_frame();
    }

    let game = session.game();
    if game.is_running() {
        tracing::warn!(max_secs = options.max_secs, "Match hit the time limit");
    }

    MatchResult {
        game: game.metadata().name,
        seed,
        scores: game.scores(),
        outcome: game.outcome(),
        message: game.state().winner_message.clone(),
        ticks: game.state().ticks,
        frames: renderer.frames(),
        elapsed_secs: clock.now(),
        sounds: audio.drain().into_iter().map(|cue| cue.name()).collect(),
        events,
        final_frame: options.dump_frame.then(|| renderer.commands().to_vec()),
    }
}
