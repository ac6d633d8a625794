//! Tests for the AI strategies and the difficulty dispatcher.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictactoe_core::ai::{Minimax, find_winning_cell};
use tictactoe_core::rules::{has_win, is_full};
use tictactoe_core::{AiError, Board, Cell, Coord, Difficulty, Game, GameOutcome, Player, choose_move};

/// Fills every cell independently with Empty, X or O.
fn random_board(size: usize, rng: &mut StdRng) -> Board {
    let mut board = Board::new(size).expect("valid size");
    for row in 0..size {
        for col in 0..size {
            let cell = match rng.gen_range(0..3) {
                0 => Cell::Empty,
                1 => Cell::Occupied(Player::X),
                _ => Cell::Occupied(Player::O),
            };
            board.set(Coord::new(row, col), cell);
        }
    }
    board
}

#[test]
fn test_hard_blocks_open_row() {
    let board = Board::from_rows(3, &["XX ", "   ", "   "]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let decision = choose_move(&board, Difficulty::Hard, Player::O, Player::X, &mut rng).unwrap();
    assert_eq!(decision.coord, Coord::new(0, 2));
}

#[test]
fn test_hard_reply_to_center_is_not_losing() {
    let mut game = Game::new(3).unwrap();
    game.apply_move(Coord::new(1, 1)).unwrap();

    let mut board = game.board().clone();
    let result = Minimax::new(Player::O, Player::X).search(&mut board);
    assert!(result.best.is_some());
    assert!(result.score >= 0, "score {} is worse than a draw", result.score);
}

#[test]
fn test_hard_prefers_faster_win() {
    // O can win now at (0, 2); any slower win scores lower.
    let board = Board::from_rows(3, &["OO ", "XX ", "X  "]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let decision = choose_move(&board, Difficulty::Hard, Player::O, Player::X, &mut rng).unwrap();
    assert_eq!(decision.coord, Coord::new(0, 2));
    assert_eq!(decision.score, Some(9));
}

#[test]
fn test_hard_is_deterministic() {
    let board = Board::from_rows(3, &["X  ", " O ", "  X"]).unwrap();

    let first = Minimax::new(Player::O, Player::X).search(&mut board.clone());
    for _ in 0..3 {
        let again = Minimax::new(Player::O, Player::X).search(&mut board.clone());
        assert_eq!(again, first);
    }

    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(99);
    assert_eq!(
        choose_move(&board, Difficulty::Hard, Player::O, Player::X, &mut rng_a),
        choose_move(&board, Difficulty::Hard, Player::O, Player::X, &mut rng_b)
    );
}

#[test]
fn test_hard_leaves_caller_board_untouched() {
    let board = Board::from_rows(4, &["XO  ", "    ", "    ", "    "]).unwrap();
    let before = board.clone();
    let mut rng = StdRng::seed_from_u64(0);
    let decision = choose_move(&board, Difficulty::Hard, Player::X, Player::O, &mut rng).unwrap();
    assert_eq!(board, before);
    assert!(board.is_empty(decision.coord));
}

#[test]
fn test_hard_on_decided_position() {
    let board = Board::from_rows(3, &["XXX", "OO ", "   "]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        choose_move(&board, Difficulty::Hard, Player::O, Player::X, &mut rng),
        Err(AiError::PositionDecided)
    );
}

#[test]
fn test_easy_never_picks_occupied_cell() {
    let mut rng = StdRng::seed_from_u64(2024);
    for size in 3..=15 {
        for _ in 0..50 {
            let board = random_board(size, &mut rng);
            match choose_move(&board, Difficulty::Easy, Player::O, Player::X, &mut rng) {
                Ok(decision) => assert!(board.is_empty(decision.coord), "size {size}"),
                Err(err) => {
                    assert_eq!(err, AiError::NoLegalMove);
                    assert!(is_full(&board));
                }
            }
        }
    }
}

#[test]
fn test_medium_never_picks_occupied_cell() {
    let mut rng = StdRng::seed_from_u64(11);
    for size in 3..=15 {
        for _ in 0..20 {
            let board = random_board(size, &mut rng);
            if let Ok(decision) = choose_move(&board, Difficulty::Medium, Player::X, Player::O, &mut rng) {
                assert!(board.is_empty(decision.coord), "size {size}");
            }
        }
    }
}

#[test]
fn test_winning_cell_is_empty_and_completes_line() {
    let mut rng = StdRng::seed_from_u64(5);
    for size in 3..=6 {
        for _ in 0..200 {
            let mut board = random_board(size, &mut rng);
            for player in [Player::X, Player::O] {
                if let Some(coord) = find_winning_cell(&board, player) {
                    assert!(board.is_empty(coord));
                    board.set(coord, Cell::Occupied(player));
                    assert!(has_win(&board, player));
                    board.set(coord, Cell::Empty);
                }
            }
        }
    }
}

#[test]
fn test_not_full_while_any_cell_is_empty() {
    let mut rng = StdRng::seed_from_u64(9);
    for size in 3..=15 {
        let board = random_board(size, &mut rng);
        assert_eq!(is_full(&board), board.empty_cells().is_empty());
    }
}

#[test]
fn test_medium_vs_easy_game_completes() {
    let mut rng = StdRng::seed_from_u64(77);
    for size in [3, 4, 7] {
        let mut game = Game::new(size).unwrap();
        while game.outcome() == GameOutcome::Ongoing {
            let mover = game.to_move();
            let difficulty = if mover == Player::X {
                Difficulty::Easy
            } else {
                Difficulty::Medium
            };
            let decision = choose_move(game.board(), difficulty, mover, mover.opponent(), &mut rng).unwrap();
            game.apply_move(decision.coord).unwrap();
        }
        assert!(game.outcome().is_over());
        assert!(game.history().len() <= size * size);
    }
}
