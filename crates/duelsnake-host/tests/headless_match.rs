use duelsnake_classic::DuelSnake;
use duelsnake_classic::config::{DuelConfig, TieBreak};
use duelsnake_core::events::{CrashCause, GameEvent, RoundOutcome};
use duelsnake_core::game_trait::TickGame;
use duelsnake_core::player::PlayerSlot;
use duelsnake_core::test_helpers;
use duelsnake_host::audio::CueLog;
use duelsnake_host::draw::{DrawCommand, DrawList};
use duelsnake_host::input::InputState;
use duelsnake_host::script::Script;
use duelsnake_host::{KeyBindings, MatchOptions, Session, run_match};

fn options(seed: u64) -> MatchOptions {
    MatchOptions {
        config: DuelConfig {
            seed: Some(seed),
            ..DuelConfig::default()
        },
        ..MatchOptions::default()
    }
}

#[test]
fn unsteered_snakes_meet_head_on() {
    let result = run_match(options(3));
    // Heads start 12 cells apart on the same row and close 2 cells per tick.
    assert_eq!(result.ticks, 6);
    assert_eq!(result.outcome, Some(RoundOutcome::Winner(PlayerSlot::Two)));
    assert_eq!(result.message, "Player 2 Wins!");
    assert_eq!(result.sounds.last(), Some(&"hit-wall-or-self-or-opponent"));
    assert!(result.final_frame.is_none());
}

#[test]
fn mutual_crash_is_a_draw_when_configured() {
    let mut opts = options(3);
    opts.config.tie_break = TieBreak::Draw;
    let result = run_match(opts);
    assert_eq!(result.outcome, Some(RoundOutcome::Draw));
    assert_eq!(result.message, "Draw!");
    let crashes = result
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::Crashed { .. }))
        .count();
    assert_eq!(crashes, 2);
}

#[test]
fn scripted_turns_decide_the_winner() {
    let mut opts = options(11);
    opts.script = Script::from_toml(
        "[[press]]\nat = 0.1\nkey = \"ArrowDown\"\n\n[[press]]\nat = 0.1\nkey = \"KeyW\"\n",
    )
    .unwrap();
    let result = run_match(opts);

    // Player 2 heads up from row 9 and leaves the grid on the tenth tick;
    // player 1 heads down and would need sixteen.
    assert_eq!(result.ticks, 10);
    assert_eq!(result.outcome, Some(RoundOutcome::Winner(PlayerSlot::One)));
    assert!(result.events.contains(&GameEvent::Crashed {
        slot: PlayerSlot::Two,
        cause: CrashCause::Wall
    }));
}

#[test]
fn time_limit_stops_unfinished_match() {
    let mut opts = options(5);
    opts.max_secs = 0.5;
    let result = run_match(opts);
    assert_eq!(result.outcome, None);
    assert!(result.message.is_empty());
    assert_eq!(result.ticks, 2);
    assert!(result.frames >= 30);
}

#[test]
fn result_serializes_with_final_frame() {
    let mut opts = options(3);
    opts.dump_frame = true;
    let result = run_match(opts);

    let frame = result.final_frame.as_ref().expect("final frame requested");
    assert!(frame.iter().any(|c| matches!(
        c,
        DrawCommand::Text { text, .. } if text == "Player 2 Wins!"
    )));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["game"], "Duel Snake");
    assert_eq!(json["message"], "Player 2 Wins!");
    assert_eq!(json["seed"], 3);
    assert!(json["final_frame"].is_array());
}

#[test]
fn session_round_trip_through_restart() {
    let config = DuelConfig {
        seed: Some(21),
        ..DuelConfig::default()
    };
    let mut session = Session::new(
        DuelSnake::with_config(config, 0.0),
        KeyBindings::default(),
        0.0,
    );
    let mut input = InputState::new();
    let mut audio = CueLog::default();
    let mut renderer = DrawList::default();

    let mut now = 0.0;
    while session.game().is_running() {
        now += 1.0 / 60.0;
        session.frame(now, &input, &mut audio, &mut renderer);
        assert!(now < 10.0, "round should end quickly without input");
    }

    input.on_key_down("Space");
    let report = session.frame(now + 0.5, &input, &mut audio, &mut renderer);
    assert!(report.restarted);
    test_helpers::contract_new_round_is_clean(session.game());
    test_helpers::contract_restart_rejected_while_running(session.game_mut(), now + 0.6);
}
