use gridfill_core::{Bitboard, Move, PieceKind};
use gridfill_engine::{apply_move, clear_score, Game, HAND_SIZE};

fn square_at(row: usize, col: usize) -> Move {
    Move::from_catalog(PieceKind::Square2x2, row, col).expect("2x2 fits")
}

mod clears {
    use super::*;

    #[test]
    fn test_squares_fill_two_rows() {
        let mut board = Bitboard::EMPTY;
        let mut total_lines = 0;
        for col in (0..8).step_by(2) {
            let (next, lines) = apply_move(board, &square_at(0, col));
            board = next;
            total_lines += lines;
            if col < 6 {
                assert_eq!(lines, 0);
            }
        }
        assert_eq!(total_lines, 2);
        assert_eq!(clear_score(total_lines), 32);
        assert!(board.is_empty());
    }

    #[test]
    fn test_squares_fill_two_rows_through_game() {
        let (start, _) = apply_move(Bitboard::EMPTY, &square_at(0, 0));
        let mut game = Game::from_position(start, [PieceKind::Square2x2; HAND_SIZE], 77);

        assert_eq!(game.place_piece(0, 0, 2), 0);
        assert_eq!(game.place_piece(1, 0, 4), 0);
        assert_eq!(game.place_piece(2, 0, 6), 32);

        assert_eq!(game.score(), 32);
        assert!(game.board().is_empty());
        assert_eq!(game.turn_number(), 2);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_row_and_column_in_one_move() {
        let mut board = Bitboard::EMPTY;
        for i in 0..8 {
            if i < 6 {
                board.set_occupied(7, i);
            }
            if i < 7 {
                board.set_occupied(i, 7);
            }
        }
        // small corner `.X|XX` at (6, 6) fills (6,7), (7,6), (7,7)
        board.clear_square(6, 7);
        let mv = Move::from_catalog(PieceKind::SmallCorner180, 6, 6).expect("fits");
        let (next, lines) = apply_move(board, &mv);
        assert_eq!(lines, 2);
        assert_eq!(clear_score(lines), 32);
        assert!(next.is_empty());
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn test_used_flags_reset_together() {
        let mut game = Game::with_seed(2024);
        let mut turns = game.turn_number();
        for _ in 0..60 {
            if game.is_game_over() {
                break;
            }
            let used_before = *game.hand_used();
            let mv = game.all_legal_moves()[0];
            game.make_move(&mv);

            let used_after = *game.hand_used();
            if game.turn_number() != turns {
                // redraw only after the last unused slot was consumed
                assert_eq!(used_before.iter().filter(|&&u| !u).count(), 1);
                assert_eq!(used_after, [false; HAND_SIZE]);
                turns = game.turn_number();
            } else {
                let newly_used = used_before
                    .iter()
                    .zip(used_after.iter())
                    .filter(|(b, a)| !**b && **a)
                    .count();
                assert_eq!(newly_used, 1);
            }
        }
    }

    #[test]
    fn test_game_over_freezes_state() {
        // only a small corner fits, at (0, 0); one isolated hole per row and
        // column keeps every line open after it lands
        let mut board = Bitboard::FULL;
        for (row, col) in [(0, 0), (0, 1), (1, 0)] {
            board.clear_square(row, col);
        }
        for (row, col) in [(0, 3), (1, 5), (2, 7), (3, 0), (4, 2), (5, 4), (6, 6), (7, 1)] {
            board.clear_square(row, col);
        }
        assert_eq!(board.full_rows() | board.full_cols(), 0);

        let mut game = Game::from_position(
            board,
            [PieceKind::SmallCorner0, PieceKind::Square2x2, PieceKind::Square2x2],
            31,
        );
        assert!(!game.is_game_over());
        assert_eq!(game.all_legal_moves().len(), 1);

        let points = game.place_piece(0, 0, 0);
        assert_eq!(points, 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.board().count(), 64 - 8);
        assert!(game.is_game_over());

        let board = game.board();
        let hand = *game.hand();
        let score = game.score();
        for slot in 0..HAND_SIZE {
            for row in 0..8 {
                for col in 0..8 {
                    assert_eq!(game.place_piece(slot, row, col), 0);
                }
            }
        }
        game.new_turn();
        assert_eq!(game.board(), board);
        assert_eq!(game.hand(), &hand);
        assert_eq!(game.score(), score);
        assert_eq!(game.turn_number(), 1);
    }

    #[test]
    fn test_score_is_sum_of_returned_points() {
        let mut game = Game::with_seed(5);
        let mut total = 0;
        for _ in 0..200 {
            if game.is_game_over() {
                break;
            }
            let moves = game.all_legal_moves();
            let mv = moves[moves.len() / 2];
            total += game.make_move(&mv);
        }
        assert_eq!(game.score(), total);
        assert_eq!(game.score() % 8, 0);
    }
}
