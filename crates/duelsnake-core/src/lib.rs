pub mod error;
pub mod events;
pub mod game_trait;
pub mod grid;
pub mod player;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::events::GameEvent;
    use crate::game_trait::TickGame;
    use crate::grid::Direction;
    use crate::player::PlayerSlot;

    /// Run `n` ticks spaced by the game's tick interval, starting after `start`.
    /// Returns all accumulated events and the time of the last tick.
    pub fn run_game_ticks<G: TickGame>(game: &mut G, start: f64, n: usize) -> (Vec<GameEvent>, f64) {
        let dt = game.tick_interval();
        let mut now = start;
        let mut all_events = Vec::new();
        for _ in 0..n {
            now += dt;
            all_events.extend(game.update(now));
        }
        (all_events, now)
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================
    // Generic checks every TickGame implementation must pass. Game crates
    // call them from their own #[cfg(test)] modules with a fresh game.

    /// A freshly created game is running, scoreless, and has no outcome.
    pub fn contract_new_round_is_clean<G: TickGame>(game: &G) {
        assert!(game.is_running(), "New round must be running");
        assert_eq!(game.scores(), [0, 0], "New round must start at 0-0");
        assert!(game.outcome().is_none(), "New round must have no outcome");
    }

    /// restart() while running must be rejected.
    pub fn contract_restart_rejected_while_running<G: TickGame>(game: &mut G, now: f64) {
        assert!(game.is_running());
        assert!(
            game.restart(now).is_err(),
            "restart must be rejected while the round is running"
        );
        assert!(game.is_running());
    }

    /// Ticking with no input must eventually end the round.
    pub fn contract_round_eventually_completes<G: TickGame>(game: &mut G, max_ticks: usize) -> f64 {
        let dt = game.tick_interval();
        let mut now = 0.0;
        for _ in 0..max_ticks {
            now += dt;
            game.update(now);
            if !game.is_running() {
                assert!(game.outcome().is_some(), "Ended round must have an outcome");
                return now;
            }
        }
        panic!("Game must complete within {max_ticks} ticks");
    }

    /// update() after the round ended must not emit events or change scores.
    pub fn contract_update_after_round_is_noop<G: TickGame>(game: &mut G, now: f64) {
        assert!(!game.is_running());
        let scores = game.scores();
        let outcome = game.outcome();
        let events = game.update(now + 100.0);
        assert!(events.is_empty(), "No events after round complete");
        assert_eq!(game.scores(), scores);
        assert_eq!(game.outcome(), outcome);
    }

    /// After the round ended, restart() must succeed and yield a clean round.
    pub fn contract_restart_after_round<G: TickGame>(game: &mut G, now: f64) {
        assert!(!game.is_running());
        game.restart(now).expect("restart must succeed after the round ended");
        contract_new_round_is_clean(game);
    }

    /// Steering straight back into the neck must be refused.
    pub fn contract_reversal_rejected<G: TickGame>(
        game: &mut G,
        slot: PlayerSlot,
        facing: Direction,
    ) {
        assert!(
            !game.steer(slot, facing.opposite()),
            "Reversing {facing:?} must be rejected"
        );
    }
}
