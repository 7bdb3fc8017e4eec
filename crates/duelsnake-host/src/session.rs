use duelsnake_core::events::GameEvent;
use duelsnake_core::game_trait::TickGame;
use duelsnake_core::grid::Direction;
use duelsnake_core::player::PlayerSlot;
use duelsnake_core::time::IntervalTrigger;

use crate::audio::AudioSink;
use crate::bindings::KeyBindings;
use crate::draw::Renderer;
use crate::input::InputState;

/// What happened during one call to [`Session::frame`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Whether the simulation advanced this frame.
    pub ticked: bool,
    pub restarted: bool,
    pub events: Vec<GameEvent>,
    /// Direction accepted for each snake this frame, if any.
    pub steered: [Option<Direction>; 2],
}

/// Drives a game from a per-frame loop.
///
/// Each frame: tick if the tick interval elapsed and the round is running,
/// restart on request once the round is over, render, then route steering
/// input. Input routed after a tick applies to the next tick.
pub struct Session<G: TickGame> {
    game: G,
    bindings: KeyBindings,
    tick: IntervalTrigger,
}

impl<G: TickGame> Session<G> {
    pub fn new(game: G, bindings: KeyBindings, now: f64) -> Self {
        let tick = IntervalTrigger::new(game.tick_interval(), now);
        Self {
            game,
            bindings,
            tick,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn frame<A, R>(
        &mut self,
        now: f64,
        input: &InputState,
        audio: &mut A,
        renderer: &mut R,
    ) -> FrameReport
    where
        A: AudioSink + ?Sized,
        R: Renderer<G::Frame> + ?Sized,
    {
        let mut report = FrameReport::default();

        if self.game.is_running() && self.tick.fire(now) {
            report.ticked = true;
            report.events = self.game.update(now);
            for event in &report.events {
                if let Some(cue) = event.sound_cue() {
                    audio.play(cue);
                }
                tracing::debug!(?event, now, "Game event");
            }
        }

        if !self.game.is_running() && self.bindings.restart_pressed(input) {
            match self.game.restart(now) {
                Ok(()) => {
                    self.tick.rearm(now);
                    report.restarted = true;
                    tracing::info!(now, "New round");
                },
                Err(e) => tracing::warn!(error = %e, "Restart refused"),
            }
        }

        renderer.render(&self.game.frame());

        if self.game.is_running() {
            for slot in PlayerSlot::BOTH {
                report.steered[slot.index()] = self.route_steering(slot, input);
            }
        }

        report
    }

    /// Offer this frame's presses to the game in routing order; the first one
    /// accepted wins.
    fn route_steering(&mut self, slot: PlayerSlot, input: &InputState) -> Option<Direction> {
        let game = &mut self.game;
        self.bindings
            .pressed(slot, input)
            .find(|&direction| game.steer(slot, direction))
    }
}
