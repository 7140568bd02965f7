//! Tests for the tournament state machine.

use strictly_tictactoe::{
    Board, Difficulty, Opponent, Phase, Player, Position, RoundOpener, Square, Status,
    TournamentConfig, TournamentEngine, TournamentWinner,
};

fn human_tournament(rounds: u32) -> TournamentEngine {
    TournamentEngine::new(TournamentConfig::new(
        Opponent::Human,
        Difficulty::Easy,
        rounds,
    ))
    .expect("valid config")
}

fn play(engine: &mut TournamentEngine, cells: &[usize]) {
    for &cell in cells {
        assert!(engine.apply_move(cell), "move {} rejected", cell);
    }
}

#[test]
fn test_three_rounds_won_x_o_x() {
    let mut engine = human_tournament(3);

    // Round 1: X takes the top row.
    play(&mut engine, &[0, 3, 1, 4, 2]);
    assert_eq!(
        engine.status(),
        Status::Win {
            player: Player::X,
            round: 1
        }
    );
    assert!(engine.advance_round());
    assert_eq!(engine.round(), 2);
    assert_eq!(engine.board(), &Board::new());

    // Round 2: X keeps the turn marker and opens; O takes the middle row.
    assert_eq!(engine.current_player(), Player::X);
    play(&mut engine, &[0, 3, 1, 4, 8, 5]);
    assert_eq!(
        engine.status(),
        Status::Win {
            player: Player::O,
            round: 2
        }
    );
    assert!(engine.advance_round());

    // Round 3: O opens; X takes the top row.
    assert_eq!(engine.current_player(), Player::O);
    play(&mut engine, &[3, 0, 4, 1, 8, 2]);
    assert_eq!(
        engine.status(),
        Status::Win {
            player: Player::X,
            round: 3
        }
    );

    assert!(engine.advance_round());
    assert_eq!(engine.scores().wins(Player::X), 2);
    assert_eq!(engine.scores().wins(Player::O), 1);
    assert_eq!(
        engine.phase(),
        Phase::TournamentOver(TournamentWinner::Champion(Player::X))
    );
    assert_eq!(
        engine.status(),
        Status::TournamentEnd(TournamentWinner::Champion(Player::X))
    );
}

#[test]
fn test_draw_round_leaves_scores() {
    let mut engine = human_tournament(1);
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(engine.phase(), Phase::RoundOver { winner: None });
    assert_eq!(engine.status(), Status::Draw { round: 1 });
    assert_eq!(engine.scores().wins(Player::X), 0);
    assert_eq!(engine.scores().wins(Player::O), 0);

    assert!(engine.advance_round());
    assert_eq!(
        engine.status(),
        Status::TournamentEnd(TournamentWinner::Tie)
    );
}

#[test]
fn test_moves_ignored_after_round_ends() {
    let mut engine = human_tournament(2);
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.snapshot();

    assert!(!engine.apply_move(8));
    assert!(!engine.accepts_moves());
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_start_tournament_resets_scores_and_round() {
    let mut engine = human_tournament(1);
    play(&mut engine, &[0, 3, 1, 4, 2]);
    assert!(engine.advance_round());
    assert!(matches!(engine.phase(), Phase::TournamentOver(_)));

    engine
        .start_tournament(TournamentConfig::new(Opponent::Human, Difficulty::Hard, 4))
        .expect("valid config");

    assert_eq!(engine.round(), 1);
    assert_eq!(engine.scores().wins(Player::X), 0);
    assert_eq!(engine.scores().wins(Player::O), 0);
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.status(), Status::Turn(Player::X));
    assert_eq!(*engine.snapshot().total_rounds(), 4);
}

#[test]
fn test_start_tournament_mid_round() {
    let mut engine = human_tournament(3);
    play(&mut engine, &[0, 3, 1, 4, 2]);
    assert!(engine.advance_round());
    play(&mut engine, &[8]);

    engine
        .start_tournament(TournamentConfig::new(Opponent::Human, Difficulty::Easy, 3))
        .expect("valid config");
    assert_eq!(engine.round(), 1);
    assert_eq!(engine.scores().wins(Player::X), 0);
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_alternate_opener() {
    let config = TournamentConfig::new(Opponent::Human, Difficulty::Easy, 3)
        .with_round_opener(RoundOpener::Alternate);
    let mut engine = TournamentEngine::new(config).expect("valid config");

    // X opens and wins round 1; O opens round 2.
    play(&mut engine, &[0, 3, 1, 4, 2]);
    assert!(engine.advance_round());
    assert_eq!(engine.current_player(), Player::O);

    // O wins round 2; X opens round 3.
    play(&mut engine, &[0, 3, 1, 4, 2]);
    assert_eq!(
        engine.status(),
        Status::Win {
            player: Player::O,
            round: 2
        }
    );
    assert!(engine.advance_round());
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_always_x_opener() {
    let config = TournamentConfig::new(Opponent::Human, Difficulty::Easy, 2)
        .with_round_opener(RoundOpener::AlwaysX);
    let mut engine = TournamentEngine::new(config).expect("valid config");

    // O wins round 1 with the last move.
    play(&mut engine, &[0, 3, 1, 4, 8, 5]);
    assert!(engine.advance_round());
    assert_eq!(engine.current_player(), Player::X);
}

#[test]
fn test_computer_turn_blocks_human_moves() {
    let config = TournamentConfig::new(Opponent::Computer, Difficulty::Hard, 1).with_seed(Some(1));
    let mut engine = TournamentEngine::new(config).expect("valid config");

    assert!(engine.accepts_moves());
    assert!(engine.apply_move(4));
    assert!(engine.computer_to_move());
    assert!(!engine.accepts_moves());

    let before = engine.snapshot();
    assert!(!engine.apply_move(0));
    assert_eq!(engine.snapshot(), before);

    let reply = engine.play_computer_move().expect("computer moves");
    assert_eq!(engine.board().get(reply), Square::Occupied(Player::O));
    assert_eq!(engine.status(), Status::Turn(Player::X));
    assert_eq!(engine.play_computer_move(), None);
}

#[test]
fn test_computer_opens_when_playing_x() {
    let config = TournamentConfig::new(Opponent::Computer, Difficulty::Hard, 1)
        .with_computer_player(Player::X)
        .with_seed(Some(3));
    let mut engine = TournamentEngine::new(config).expect("valid config");

    assert!(*engine.snapshot().computer_to_move());
    assert!(!engine.apply_move(4));
    assert_eq!(engine.play_computer_move(), Some(Position::TopLeft));
    assert!(engine.accepts_moves());
}

#[test]
fn test_snapshot_serializes_for_shells() {
    let mut engine = human_tournament(2);
    play(&mut engine, &[4]);

    let json = serde_json::to_value(engine.snapshot()).expect("serializable");
    assert_eq!(json["round"], 1);
    assert_eq!(json["total_rounds"], 2);
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["status"], serde_json::json!({ "Turn": "O" }));
    assert_eq!(json["board"]["squares"][4], serde_json::json!({ "Occupied": "X" }));
}

#[test]
fn test_engine_from_config_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "opponent = \"human\"\ndifficulty = \"easy\"\ntotal_rounds = 2\nround_opener = \"alternate\""
    )
    .expect("write config");

    let config = TournamentConfig::from_file(file.path()).expect("config loads");
    assert_eq!(*config.round_opener(), RoundOpener::Alternate);

    let engine = TournamentEngine::new(config).expect("valid config");
    assert_eq!(*engine.snapshot().total_rounds(), 2);
    assert_eq!(*engine.snapshot().opponent(), Opponent::Human);
}

#[test]
fn test_missing_config_file() {
    let err = TournamentConfig::from_file("/nonexistent/strictly.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
