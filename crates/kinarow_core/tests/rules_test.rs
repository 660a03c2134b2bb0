//! Tests for the win-rule set against whole-game boards.

use kinarow_core::{
    Board, Game, Mark, Phase, PlayerId, Position, TurnOutcome, WinChecker, WinRule, is_draw,
};

fn place(board: &mut Board, row: usize, col: usize, mark: Mark) {
    let pos = Position::new(row, col, board.size()).expect("valid position");
    board.place(pos, mark).expect("empty cell");
}

#[test]
fn test_rule_set_size_scales_with_board() {
    for n in [3, 5, 8] {
        assert_eq!(WinChecker::new(n).rules().len(), 2 * n + 2);
    }
}

#[test]
fn test_checker_shared_between_marks() {
    let checker = WinChecker::new(3);
    let mut board = Board::new(3);
    place(&mut board, 0, 0, Mark::X);
    place(&mut board, 1, 1, Mark::X);
    place(&mut board, 2, 2, Mark::X);
    place(&mut board, 0, 1, Mark::O);
    place(&mut board, 0, 2, Mark::O);

    assert!(checker.evaluate(&board, Mark::X));
    assert!(!checker.evaluate(&board, Mark::O));
}

#[test]
fn test_draw_requires_full_board() {
    let checker = WinChecker::new(3);
    let mut board = Board::new(3);
    place(&mut board, 0, 0, Mark::X);
    place(&mut board, 0, 1, Mark::O);
    assert!(!is_draw(&board, &checker));
}

#[test]
fn test_diagonal_win_through_engine() {
    let mut game = Game::new(3);
    game.start().expect("fresh game starts");
    for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2)] {
        assert!(matches!(game.play(row, col), Ok(TurnOutcome::Continue(_))));
    }
    assert_eq!(game.play(2, 2), Ok(TurnOutcome::Win(PlayerId::One)));
    assert_eq!(game.phase(), Phase::Won(PlayerId::One));
}

#[test]
fn test_phase_serde_round_trip() {
    for phase in [
        Phase::NotStarted,
        Phase::InProgress,
        Phase::Won(PlayerId::Two),
        Phase::Draw,
        Phase::Ended,
    ] {
        let json = serde_json::to_string(&phase).expect("serializes");
        let back: Phase = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, phase);
    }
}

#[test]
fn test_rule_serde_round_trip() {
    let checker = WinChecker::new(4);
    let json = serde_json::to_string(&checker).expect("serializes");
    let back: WinChecker = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, checker);
    assert!(back.rules().contains(&WinRule::Row(3)));
}
