pub mod collectible;
pub mod collision;
pub mod config;
pub mod powerup;
pub mod scoring;
pub mod snake;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use duelsnake_core::error::GameError;
use duelsnake_core::events::{GameEvent, RoundOutcome};
use duelsnake_core::game_trait::{GameMetadata, TickGame};
use duelsnake_core::grid::{Cell, Direction};
use duelsnake_core::player::{PlayerColor, PlayerSlot};

use crate::collectible::{Collectible, CollectibleKind};
use crate::config::DuelConfig;
use crate::powerup::{PowerUpSchedule, ScheduleAction};
use crate::scoring::Scoreboard;
use crate::snake::Snake;

/// Serializable round state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelState {
    pub snakes: [Snake; 2],
    pub food: Collectible,
    pub powerup: Collectible,
    pub scores: Scoreboard,
    pub running: bool,
    pub outcome: Option<RoundOutcome>,
    /// Empty while the round is running.
    pub winner_message: String,
    pub schedule: PowerUpSchedule,
    /// Ticks simulated this round.
    pub ticks: u64,
}

/// One snake as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeFrame {
    pub body: Vec<Cell>,
    pub color: PlayerColor,
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuelFrame {
    pub snakes: [SnakeFrame; 2],
    pub food: Option<Cell>,
    pub powerup: Option<Cell>,
    pub scores: [u32; 2],
    pub running: bool,
    pub winner_message: String,
}

/// The two-player snake duel.
pub struct DuelSnake {
    state: DuelState,
    rng: StdRng,
    config: DuelConfig,
}

impl DuelSnake {
    /// Start a round at time `now` with the given configuration.
    pub fn with_config(config: DuelConfig, now: f64) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let schedule = PowerUpSchedule::new(&mut rng, &config, now);
        let snakes = [
            spawn_snake(&config, PlayerSlot::One),
            spawn_snake(&config, PlayerSlot::Two),
        ];

        let mut game = Self {
            state: DuelState {
                snakes,
                food: Collectible::new(CollectibleKind::Food),
                powerup: Collectible::new(CollectibleKind::PowerUp),
                scores: Scoreboard::default(),
                running: true,
                outcome: None,
                winner_message: String::new(),
                schedule,
                ticks: 0,
            },
            rng,
            config,
        };
        let mut events = Vec::new();
        game.relocate_food(&mut events);
        game
    }

    pub fn state(&self) -> &DuelState {
        &self.state
    }

    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    pub fn snake(&self, slot: PlayerSlot) -> &Snake {
        &self.state.snakes[slot.index()]
    }

    /// Move food to a free cell. A full grid ends the round as a draw.
    fn relocate_food(&mut self, events: &mut Vec<GameEvent>) {
        let state = &mut self.state;
        let [a, b] = state.snakes[0].views();
        let [c, d] = state.snakes[1].views();
        let powerup = state.powerup.position();
        let occupied = [a, b, c, d, powerup.as_slice()];

        if let Err(e) = state.food.activate(&mut self.rng, &occupied) {
            tracing::error!(error = %e, "Cannot place food, ending round");
            self.end_round(RoundOutcome::Draw, events);
        }
    }

    /// Put the power-up on a free cell. Returns the cell if it was placed.
    fn show_powerup(&mut self, now: f64) -> Option<Cell> {
        let state = &mut self.state;
        let [a, b] = state.snakes[0].views();
        let [c, d] = state.snakes[1].views();
        let food = state.food.position();
        let occupied = [a, b, c, d, food.as_slice()];

        match state.powerup.activate(&mut self.rng, &occupied) {
            Ok(cell) => {
                state.schedule.mark_shown(now);
                Some(cell)
            },
            Err(e) => {
                tracing::warn!(error = %e, "Cannot place power-up, waiting another gap");
                state.schedule.mark_hidden(now);
                None
            },
        }
    }

    fn check_food(&mut self, slot: PlayerSlot, events: &mut Vec<GameEvent>) {
        let head = self.state.snakes[slot.index()].head();
        if !self.state.food.is_at(head) {
            return;
        }
        self.state.snakes[slot.index()].grow();
        let points = self.state.food.kind.points(&self.config);
        let score = self.state.scores.award(slot, points);
        events.push(GameEvent::AteFood { slot, score });
        self.relocate_food(events);
    }

    fn check_powerup(&mut self, slot: PlayerSlot, now: f64, events: &mut Vec<GameEvent>) {
        let head = self.state.snakes[slot.index()].head();
        if !self.state.powerup.is_at(head) {
            return;
        }
        self.state.powerup.deactivate();
        self.state.schedule.mark_hidden(now);
        self.state.snakes[slot.index()].grow();
        let points = self.state.powerup.kind.points(&self.config);
        let score = self.state.scores.award(slot, points);
        events.push(GameEvent::AtePowerUp { slot, score });
    }

    /// Run the terminal checks. Returns true if the round ended.
    fn check_crashes(&mut self, events: &mut Vec<GameEvent>) -> bool {
        let [one, two] = &self.state.snakes;
        let resolution = collision::resolve(
            collision::crash_cause(one, two),
            collision::crash_cause(two, one),
            self.config.tie_break,
        );
        let Some(resolution) = resolution else {
            return false;
        };

        for crash in &resolution.crashes {
            events.push(GameEvent::Crashed {
                slot: crash.slot,
                cause: crash.cause,
            });
        }
        self.end_round(resolution.outcome, events);
        true
    }

    fn schedule_powerup(&mut self, now: f64, events: &mut Vec<GameEvent>) {
        match self.state.schedule.poll(now) {
            Some(ScheduleAction::Hide) => {
                self.state.powerup.deactivate();
                self.state.schedule.mark_hidden(now);
                events.push(GameEvent::PowerUpHidden);
            },
            Some(ScheduleAction::Show) => {
                if let Some(cell) = self.show_powerup(now) {
                    events.push(GameEvent::PowerUpShown { cell });
                }
            },
            None => {},
        }
    }

    fn end_round(&mut self, outcome: RoundOutcome, events: &mut Vec<GameEvent>) {
        if !self.state.running {
            return;
        }
        self.state.running = false;
        self.state.outcome = Some(outcome);
        self.state.winner_message = outcome.message();
        tracing::debug!(?outcome, ticks = self.state.ticks, scores = ?self.state.scores.as_array(), "Round complete");
        events.push(GameEvent::RoundComplete { outcome });
    }
}

fn spawn_snake(config: &DuelConfig, slot: PlayerSlot) -> Snake {
    let spawn = match slot {
        PlayerSlot::One => config.spawn_one,
        PlayerSlot::Two => config.spawn_two,
    };
    Snake::new(spawn.head(), spawn.direction, PlayerColor::for_slot(slot))
}

impl TickGame for DuelSnake {
    type Frame = DuelFrame;

    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Duel Snake".to_string(),
            description: "Two snakes, one grid. Eat, grow, and outlast your rival.".to_string(),
            players: 2,
        }
    }

    fn tick_interval(&self) -> f64 {
        self.config.tick_interval_secs
    }

    fn update(&mut self, now: f64) -> Vec<GameEvent> {
        if !self.state.running {
            return Vec::new();
        }

        self.state.ticks += 1;
        let mut events = Vec::new();

        // Both snakes move before anything is checked.
        for snake in &mut self.state.snakes {
            snake.advance();
        }

        for slot in PlayerSlot::BOTH {
            self.check_food(slot, &mut events);
        }
        // A full grid can end the round while relocating food.
        if !self.state.running {
            return events;
        }
        for slot in PlayerSlot::BOTH {
            self.check_powerup(slot, now, &mut events);
        }

        if self.check_crashes(&mut events) {
            return events;
        }

        self.schedule_powerup(now, &mut events);
        events
    }

    fn steer(&mut self, slot: PlayerSlot, direction: Direction) -> bool {
        if !self.state.running {
            return false;
        }
        let accepted = self.state.snakes[slot.index()].set_direction(direction);
        if !accepted {
            tracing::debug!(player = slot.number(), ?direction, "Dropped steer request");
        }
        accepted
    }

    fn restart(&mut self, now: f64) -> Result<(), GameError> {
        if self.state.running {
            return Err(GameError::RoundInProgress);
        }

        for slot in PlayerSlot::BOTH {
            self.state.snakes[slot.index()] = spawn_snake(&self.config, slot);
        }
        self.state.powerup.deactivate();
        self.state.schedule.reset(&mut self.rng, &self.config, now);
        self.state.scores.reset();
        self.state.running = true;
        self.state.outcome = None;
        self.state.winner_message.clear();
        self.state.ticks = 0;

        let mut events = Vec::new();
        self.relocate_food(&mut events);
        tracing::debug!(gap = self.state.schedule.gap(), "Round restarted");
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.state.running
    }

    fn outcome(&self) -> Option<RoundOutcome> {
        self.state.outcome
    }

    fn scores(&self) -> [u32; 2] {
        self.state.scores.as_array()
    }

    fn frame(&self) -> DuelFrame {
        let snake_frame = |snake: &Snake| SnakeFrame {
            body: snake.body().iter().copied().collect(),
            color: snake.color(),
        };
        DuelFrame {
            snakes: [
                snake_frame(&self.state.snakes[0]),
                snake_frame(&self.state.snakes[1]),
            ],
            food: self.state.food.position(),
            powerup: self.state.powerup.position(),
            scores: self.state.scores.as_array(),
            running: self.state.running,
            winner_message: self.state.winner_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TieBreak;
    use duelsnake_core::events::CrashCause;
    use duelsnake_core::grid::{CELL_COUNT, contains, in_bounds};
    use duelsnake_core::test_helpers;

    fn seeded(seed: u64) -> DuelConfig {
        DuelConfig {
            seed: Some(seed),
            ..DuelConfig::default()
        }
    }

    fn game() -> DuelSnake {
        DuelSnake::with_config(seeded(42), 0.0)
    }

    fn body(game: &DuelSnake, slot: PlayerSlot) -> Vec<Cell> {
        game.snake(slot).body().iter().copied().collect()
    }

    fn assert_free_of_snakes(game: &DuelSnake, cell: Cell) {
        assert!(in_bounds(cell, CELL_COUNT), "{cell:?} outside the grid");
        assert!(!contains(cell, &body(game, PlayerSlot::One)), "{cell:?} on snake 1");
        assert!(!contains(cell, &body(game, PlayerSlot::Two)), "{cell:?} on snake 2");
    }

    /// Park food where neither snake will reach it during a test.
    fn park_food(game: &mut DuelSnake) {
        game.state.food.place_at(Cell::new(0, 24));
    }

    fn place_snake(game: &mut DuelSnake, slot: PlayerSlot, x: i32, y: i32, d: Direction) {
        game.state.snakes[slot.index()].reset_to(Cell::new(x, y), d);
    }

    #[test]
    fn new_round_matches_starting_layout() {
        let game = game();
        assert_eq!(
            body(&game, PlayerSlot::One),
            vec![Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)]
        );
        assert_eq!(
            body(&game, PlayerSlot::Two),
            vec![Cell::new(18, 9), Cell::new(19, 9), Cell::new(20, 9)]
        );
        assert_eq!(game.snake(PlayerSlot::One).direction(), Direction::Right);
        assert_eq!(game.snake(PlayerSlot::Two).direction(), Direction::Left);
        assert!(!game.state.powerup.is_active());
        let food = game.state.food.position().expect("food placed at start");
        assert_free_of_snakes(&game, food);
        assert!(game.state.winner_message.is_empty());
    }

    #[test]
    fn tick_moves_both_snakes() {
        let mut game = game();
        park_food(&mut game);
        game.update(0.2);
        assert_eq!(game.snake(PlayerSlot::One).head(), Cell::new(7, 9));
        assert_eq!(game.snake(PlayerSlot::Two).head(), Cell::new(17, 9));
        assert_eq!(game.state.ticks, 1);
    }

    #[test]
    fn eating_food_scores_grows_and_relocates() {
        let mut game = game();
        game.state.food.place_at(Cell::new(7, 9));

        let events = game.update(0.2);
        assert_eq!(game.scores(), [1, 0]);
        assert!(events.contains(&GameEvent::AteFood {
            slot: PlayerSlot::One,
            score: 1
        }));
        assert_eq!(game.snake(PlayerSlot::One).len(), 3, "growth lands next tick");

        let food = game.state.food.position().expect("food relocated");
        assert_ne!(food, Cell::new(7, 9));
        assert_free_of_snakes(&game, food);

        park_food(&mut game);
        game.update(0.4);
        assert_eq!(game.snake(PlayerSlot::One).len(), 4);
    }

    #[test]
    fn growth_waits_for_next_tick_however_late() {
        let mut game = game();
        game.state.food.place_at(Cell::new(7, 9));
        game.update(0.2);
        park_food(&mut game);
        // A long pause between ticks does not change how growth applies.
        game.update(9.0);
        assert_eq!(game.snake(PlayerSlot::One).len(), 4);
        game.update(9.2);
        assert_eq!(game.snake(PlayerSlot::One).len(), 4);
    }

    #[test]
    fn player_two_can_eat_too() {
        let mut game = game();
        game.state.food.place_at(Cell::new(17, 9));
        let events = game.update(0.2);
        assert_eq!(game.scores(), [0, 1]);
        assert!(matches!(
            events[0],
            GameEvent::AteFood {
                slot: PlayerSlot::Two,
                ..
            }
        ));
    }

    #[test]
    fn powerup_scores_and_disappears() {
        let mut game = game();
        park_food(&mut game);
        game.state.powerup.place_at(Cell::new(7, 9));
        game.state.schedule.mark_shown(0.1);

        let events = game.update(0.2);
        assert_eq!(game.scores(), [5, 0]);
        assert!(events.contains(&GameEvent::AtePowerUp {
            slot: PlayerSlot::One,
            score: 5
        }));
        assert!(!game.state.powerup.is_active());
        assert!(!game.state.schedule.is_visible());
        assert!((game.state.schedule.hidden_at() - 0.2).abs() < f64::EPSILON);

        game.update(0.4);
        game.update(0.6);
        assert_eq!(game.scores(), [5, 0], "picked-up power-up never re-triggers");
        assert_eq!(game.snake(PlayerSlot::One).len(), 4);
    }

    #[test]
    fn food_and_powerup_in_one_tick_grow_once() {
        let mut game = game();
        game.state.food.place_at(Cell::new(7, 9));
        game.state.powerup.place_at(Cell::new(7, 9));
        game.state.schedule.mark_shown(0.1);

        game.update(0.2);
        assert_eq!(game.scores(), [6, 0]);
        park_food(&mut game);
        game.update(0.4);
        assert_eq!(game.snake(PlayerSlot::One).len(), 4, "single growth per tick");
    }

    #[test]
    fn wall_crash_ends_round() {
        let mut game = game();
        park_food(&mut game);
        place_snake(&mut game, PlayerSlot::One, 24, 3, Direction::Right);

        let events = game.update(0.2);
        assert!(!game.is_running());
        assert_eq!(game.outcome(), Some(RoundOutcome::Winner(PlayerSlot::Two)));
        assert_eq!(game.state.winner_message, "Player 2 Wins!");
        assert!(events.contains(&GameEvent::Crashed {
            slot: PlayerSlot::One,
            cause: CrashCause::Wall
        }));
        assert!(matches!(events.last(), Some(GameEvent::RoundComplete { .. })));
    }

    #[test]
    fn both_walls_same_tick_favours_player_two() {
        let mut game = game();
        park_food(&mut game);
        place_snake(&mut game, PlayerSlot::One, 24, 3, Direction::Right);
        place_snake(&mut game, PlayerSlot::Two, 0, 20, Direction::Left);

        let events = game.update(0.2);
        assert_eq!(game.outcome(), Some(RoundOutcome::Winner(PlayerSlot::Two)));
        let crashes: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Crashed { .. }))
            .collect();
        assert_eq!(crashes.len(), 1, "only the loser is charged");
    }

    #[test]
    fn both_walls_same_tick_draw_when_configured() {
        let config = DuelConfig {
            tie_break: TieBreak::Draw,
            ..seeded(42)
        };
        let mut game = DuelSnake::with_config(config, 0.0);
        park_food(&mut game);
        place_snake(&mut game, PlayerSlot::One, 24, 3, Direction::Right);
        place_snake(&mut game, PlayerSlot::Two, 0, 20, Direction::Left);

        game.update(0.2);
        assert_eq!(game.outcome(), Some(RoundOutcome::Draw));
        assert_eq!(game.state.winner_message, "Draw!");
    }

    #[test]
    fn head_on_collision_favours_player_two() {
        let mut game = game();
        park_food(&mut game);
        place_snake(&mut game, PlayerSlot::One, 10, 5, Direction::Right);
        place_snake(&mut game, PlayerSlot::Two, 12, 5, Direction::Left);

        game.update(0.2);
        assert_eq!(game.outcome(), Some(RoundOutcome::Winner(PlayerSlot::Two)));
    }

    #[test]
    fn running_into_opponent_body_loses() {
        let mut game = game();
        park_food(&mut game);
        place_snake(&mut game, PlayerSlot::One, 10, 5, Direction::Up);
        place_snake(&mut game, PlayerSlot::Two, 11, 6, Direction::Left);

        let events = game.update(0.2);
        assert_eq!(game.outcome(), Some(RoundOutcome::Winner(PlayerSlot::One)));
        assert!(events.contains(&GameEvent::Crashed {
            slot: PlayerSlot::Two,
            cause: CrashCause::Opponent
        }));
    }

    #[test]
    fn self_bite_ends_round() {
        let mut game = game();
        park_food(&mut game);
        place_snake(&mut game, PlayerSlot::One, 10, 10, Direction::Right);
        let one = &mut game.state.snakes[0];
        one.grow();
        one.advance();
        one.grow();
        one.advance();
        for turn in [Direction::Up, Direction::Left] {
            one.set_direction(turn);
            one.advance();
        }
        assert!(game.steer(PlayerSlot::One, Direction::Down));

        let events = game.update(0.2);
        assert_eq!(game.outcome(), Some(RoundOutcome::Winner(PlayerSlot::Two)));
        assert!(events.contains(&GameEvent::Crashed {
            slot: PlayerSlot::One,
            cause: CrashCause::SelfBite
        }));
    }

    #[test]
    fn finished_round_ignores_input_and_ticks() {
        let mut game = game();
        park_food(&mut game);
        place_snake(&mut game, PlayerSlot::One, 24, 3, Direction::Right);
        game.update(0.2);

        let before = body(&game, PlayerSlot::Two);
        assert!(!game.steer(PlayerSlot::Two, Direction::Up));
        assert!(game.update(0.4).is_empty());
        assert_eq!(body(&game, PlayerSlot::Two), before);
        assert_eq!(game.state.winner_message, "Player 2 Wins!");
    }

    #[test]
    fn reversal_is_dropped() {
        let mut game = game();
        assert!(!game.steer(PlayerSlot::One, Direction::Left));
        assert!(!game.steer(PlayerSlot::Two, Direction::Right));
        assert_eq!(game.snake(PlayerSlot::One).direction(), Direction::Right);
        assert_eq!(game.snake(PlayerSlot::Two).direction(), Direction::Left);
    }

    #[test]
    fn one_turn_per_snake_per_tick() {
        let mut game = game();
        park_food(&mut game);
        assert!(game.steer(PlayerSlot::One, Direction::Up));
        assert!(!game.steer(PlayerSlot::One, Direction::Left));
        // The other snake's turn is independent.
        assert!(game.steer(PlayerSlot::Two, Direction::Down));

        game.update(0.2);
        assert_eq!(game.snake(PlayerSlot::One).head(), Cell::new(6, 8));
        assert_eq!(game.snake(PlayerSlot::Two).head(), Cell::new(18, 10));
        assert!(game.steer(PlayerSlot::One, Direction::Left));
    }

    #[test]
    fn powerup_cycle_follows_timers() {
        let mut game = game();
        park_food(&mut game);
        // Head both snakes away from each other so they survive the test.
        game.steer(PlayerSlot::One, Direction::Up);
        game.steer(PlayerSlot::Two, Direction::Down);

        let gap = game.state.schedule.gap();
        assert!((15.0..16.0).contains(&gap));

        let events = game.update(14.0);
        assert!(events.is_empty());
        assert!(!game.state.powerup.is_active());

        let events = game.update(16.0);
        let Some(GameEvent::PowerUpShown { cell }) = events.first().cloned() else {
            panic!("expected the power-up to appear, got {events:?}");
        };
        assert_eq!(game.state.powerup.position(), Some(cell));
        assert_free_of_snakes(&game, cell);
        assert_ne!(game.state.food.position(), Some(cell));
        // Keep it out of both snakes' paths.
        game.state.powerup.place_at(Cell::new(0, 0));

        // Still on the grid just before the visible window closes.
        assert!(game.update(25.9).is_empty());
        assert!(game.state.powerup.is_active());

        let events = game.update(26.0);
        assert_eq!(events, vec![GameEvent::PowerUpHidden]);
        assert!(!game.state.powerup.is_active());

        // The gap now counts from the hide time.
        assert!(game.update(26.0 + gap - 0.5).is_empty());
        assert!(!game.state.powerup.is_active());
        let events = game.update(26.0 + gap + 0.01);
        assert!(matches!(events.first(), Some(GameEvent::PowerUpShown { .. })));
    }

    #[test]
    fn restart_rebuilds_round() {
        let mut game = game();
        game.state.food.place_at(Cell::new(7, 9));
        game.update(0.2);
        park_food(&mut game);
        game.state.powerup.place_at(Cell::new(1, 1));
        game.state.schedule.mark_shown(0.2);
        place_snake(&mut game, PlayerSlot::Two, 0, 20, Direction::Left);
        game.update(0.4);
        assert!(!game.is_running());
        assert_eq!(game.scores(), [1, 0]);

        game.restart(3.0).unwrap();
        assert!(game.is_running());
        assert_eq!(game.scores(), [0, 0]);
        assert!(game.outcome().is_none());
        assert!(game.state.winner_message.is_empty());
        assert!(!game.state.powerup.is_active());
        assert!(!game.state.schedule.is_visible());
        assert!((game.state.schedule.hidden_at() - 3.0).abs() < f64::EPSILON);
        assert_eq!(game.state.ticks, 0);
        assert_eq!(
            body(&game, PlayerSlot::One),
            vec![Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)]
        );
        assert_eq!(game.snake(PlayerSlot::Two).direction(), Direction::Left);
        let food = game.state.food.position().expect("food relocated on restart");
        assert_free_of_snakes(&game, food);
    }

    /// Every grid cell in row order except those in `skip`.
    fn cells_except(skip: &[Cell]) -> Vec<Cell> {
        (0..CELL_COUNT)
            .flat_map(|y| (0..CELL_COUNT).map(move |x| Cell::new(x, y)))
            .filter(|cell| !skip.contains(cell))
            .collect()
    }

    #[test]
    fn full_grid_after_eating_is_a_draw_without_further_scoring() {
        let mut game = game();
        let food = Cell::new(0, 0);
        let powerup = Cell::new(24, 24);
        let head_one = Cell::new(1, 0);
        let two = vec![Cell::new(24, 23), Cell::new(24, 22), Cell::new(24, 21)];

        let mut skip = vec![food, powerup, head_one];
        skip.extend(&two);
        let mut one = vec![head_one];
        one.extend(cells_except(&skip));

        // Both snakes keep their tails, so after this tick only the food
        // and power-up cells are uncovered, and both are under heads.
        game.state.snakes[0] = Snake::from_cells(one, Direction::Left, PlayerColor::DARK_GREEN);
        game.state.snakes[1] = Snake::from_cells(two, Direction::Down, PlayerColor::DARK_BLUE);
        game.state.snakes[0].grow();
        game.state.snakes[1].grow();
        game.state.food.place_at(food);
        game.state.powerup.place_at(powerup);

        let events = game.update(0.2);

        assert_eq!(
            events,
            vec![
                GameEvent::AteFood {
                    slot: PlayerSlot::One,
                    score: game.config.food_points
                },
                GameEvent::RoundComplete {
                    outcome: RoundOutcome::Draw
                },
            ]
        );
        assert!(!game.is_running());
        assert_eq!(game.outcome(), Some(RoundOutcome::Draw));
        assert_eq!(game.scores(), [game.config.food_points, 0]);
        assert_eq!(game.state.powerup.position(), Some(powerup));
        assert!(!game.state.food.is_active());
    }

    #[test]
    fn full_grid_keeps_powerup_hidden_for_another_gap() {
        let mut game = game();
        let food = Cell::new(2, 0);
        let head_one = Cell::new(1, 0);
        let next_one = Cell::new(0, 0);
        // Snake 2 chases its own tail around a 2x2 block.
        let two = vec![
            Cell::new(23, 23),
            Cell::new(24, 23),
            Cell::new(24, 24),
            Cell::new(23, 24),
        ];

        let mut skip = vec![food, head_one, next_one];
        skip.extend(&two);
        let mut one = vec![head_one];
        one.extend(cells_except(&skip));

        game.state.snakes[0] = Snake::from_cells(one, Direction::Left, PlayerColor::DARK_GREEN);
        game.state.snakes[1] = Snake::from_cells(two, Direction::Down, PlayerColor::DARK_BLUE);
        game.state.snakes[0].grow();
        game.state.food.place_at(food);

        let now = 20.0;
        assert!(now > game.state.schedule.gap());
        let events = game.update(now);

        assert!(events.is_empty(), "unexpected events {events:?}");
        assert!(game.is_running());
        assert!(!game.state.powerup.is_active());
        assert!(!game.state.schedule.is_visible());
        assert!((game.state.schedule.hidden_at() - now).abs() < f64::EPSILON);
        assert_eq!(game.state.schedule.poll(now + 1.0), None);
    }

    #[test]
    fn message_tracks_running_flag() {
        let mut game = game();
        for _ in 0..200 {
            let now = game.state.ticks as f64 * 0.2 + 0.2;
            game.update(now);
            assert_eq!(game.is_running(), game.state.winner_message.is_empty());
            assert_eq!(game.is_running(), game.outcome().is_none());
            if !game.is_running() {
                break;
            }
        }
        assert!(!game.is_running(), "snakes on a straight course must crash");
    }

    #[test]
    fn frame_mirrors_state() {
        let mut game = game();
        game.state.powerup.place_at(Cell::new(3, 3));
        let frame = game.frame();
        assert_eq!(frame.snakes[0].body, body(&game, PlayerSlot::One));
        assert_eq!(frame.snakes[1].color, PlayerColor::DARK_BLUE);
        assert_eq!(frame.food, game.state.food.position());
        assert_eq!(frame.powerup, Some(Cell::new(3, 3)));
        assert_eq!(frame.scores, [0, 0]);
        assert!(frame.running);
        assert!(frame.winner_message.is_empty());
    }

    #[test]
    fn same_seed_same_round() {
        let a = DuelSnake::with_config(seeded(9), 0.0);
        let b = DuelSnake::with_config(seeded(9), 0.0);
        assert_eq!(a.state.food.position(), b.state.food.position());
        assert!((a.state.schedule.gap() - b.state.schedule.gap()).abs() < f64::EPSILON);
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================

    #[test]
    fn contract_new_round_is_clean() {
        test_helpers::contract_new_round_is_clean(&game());
    }

    #[test]
    fn contract_restart_rejected_while_running() {
        let mut game = game();
        test_helpers::contract_restart_rejected_while_running(&mut game, 1.0);
    }

    #[test]
    fn contract_round_eventually_completes_then_restarts() {
        let mut game = game();
        let ended_at = test_helpers::contract_round_eventually_completes(&mut game, 500);
        test_helpers::contract_update_after_round_is_noop(&mut game, ended_at);
        test_helpers::contract_restart_after_round(&mut game, ended_at + 1.0);
    }

    #[test]
    fn contract_reversal_rejected() {
        let mut game = game();
        test_helpers::contract_reversal_rejected(&mut game, PlayerSlot::One, Direction::Right);
        test_helpers::contract_reversal_rejected(&mut game, PlayerSlot::Two, Direction::Left);
    }

    #[test]
    fn contract_ticks_accumulate_events() {
        let mut game = game();
        game.state.food.place_at(Cell::new(7, 9));
        let (events, _) = test_helpers::run_game_ticks(&mut game, 0.0, 1);
        assert!(!events.is_empty());
    }
}
