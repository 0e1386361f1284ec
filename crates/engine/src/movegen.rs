//! Legal placement generation.
//!
//! Only origins inside `[0, 8 - height] x [0, 8 - width]` are visited, so every
//! shift table lookup hits a real mask and legality is a single AND.

use gridfill_core::{Bitboard, Move, Piece};

use crate::move_list::MoveList;

/// Call `f(row, col, mask)` for every origin where the piece fits.
#[inline(always)]
pub fn for_each_placement<F>(board: Bitboard, piece: &Piece, mut f: F)
where
    F: FnMut(usize, usize, u64),
{
    for row in 0..=piece.max_row() {
        for col in 0..=piece.max_col() {
            let mask = piece.shifted_unchecked(row, col);
            if board.can_place(mask) {
                f(row, col, mask);
            }
        }
    }
}

/// All legal placements of one piece, in row-major origin order.
pub fn generate_moves(board: Bitboard, piece: &Piece) -> MoveList {
    let mut moves = MoveList::new();
    push_moves(board, piece, &mut moves);
    moves
}

/// Append the legal placements of one piece to an existing list.
#[inline]
pub fn push_moves(board: Bitboard, piece: &Piece, moves: &mut MoveList) {
    for_each_placement(board, piece, |row, col, mask| {
        moves.push(Move::new(piece.kind, row as u8, col as u8, mask));
    });
}

/// Number of legal placements without materializing them.
#[inline]
pub fn count_moves(board: Bitboard, piece: &Piece) -> u32 {
    let mut count = 0;
    for_each_placement(board, piece, |_, _, _| count += 1);
    count
}

/// Stops at the first legal placement.
#[inline]
pub fn has_any_move(board: Bitboard, piece: &Piece) -> bool {
    for row in 0..=piece.max_row() {
        for col in 0..=piece.max_col() {
            if board.can_place(piece.shifted_unchecked(row, col)) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfill_core::{PieceKind, CATALOG};

    fn near_full() -> Bitboard {
        let mut board = Bitboard::EMPTY;
        for row in 1..=6 {
            for col in 1..=6 {
                board.set_occupied(row, col);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_counts() {
        let board = Bitboard::EMPTY;
        for piece in &CATALOG {
            let expected = (9 - piece.width as u32) * (9 - piece.height as u32);
            assert_eq!(count_moves(board, piece), expected, "{}", piece.name);
            assert_eq!(generate_moves(board, piece).len() as u32, expected);
        }
    }

    #[test]
    fn test_total_empty_board_placements() {
        let total: u32 = CATALOG
            .iter()
            .map(|p| count_moves(Bitboard::EMPTY, p))
            .sum();
        assert_eq!(total, 1421);
    }

    #[test]
    fn test_near_full_total() {
        let board = near_full();
        let total: u32 = CATALOG.iter().map(|p| count_moves(board, p)).sum();
        assert_eq!(total, 76);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        for piece in &CATALOG {
            assert!(!has_any_move(Bitboard::FULL, piece));
            assert_eq!(count_moves(Bitboard::FULL, piece), 0);
        }
    }

    #[test]
    fn test_legality_matches_shift_table() {
        // checkerboard-ish board so legality differs per origin
        let board = Bitboard::new(0x8142_2418_1824_4281);
        for piece in &CATALOG {
            let moves = generate_moves(board, piece);
            for row in 0..8 {
                for col in 0..8 {
                    let legal = piece
                        .shifted(row, col)
                        .is_some_and(|mask| board.can_place(mask));
                    let listed = moves
                        .iter()
                        .any(|m| m.row as usize == row && m.col as usize == col);
                    assert_eq!(legal, listed, "{} at ({}, {})", piece.name, row, col);
                }
            }
            assert_eq!(has_any_move(board, piece), !moves.is_empty());
        }
    }

    #[test]
    fn test_single_hole_only_fits_at_hole() {
        let mut board = Bitboard::FULL;
        board.clear_square(4, 5);
        board.clear_square(4, 6);
        let piece = PieceKind::Line3x1.piece();
        assert!(!has_any_move(board, piece));

        board.clear_square(4, 7);
        let moves = generate_moves(board, piece);
        assert_eq!(moves.len(), 1);
        assert_eq!((moves[0].row, moves[0].col), (4, 5));
        assert_eq!(moves[0].piece, PieceKind::Line3x1);
    }

    #[test]
    fn test_moves_carry_catalog_mask() {
        let piece = PieceKind::T0.piece();
        for m in &generate_moves(Bitboard::EMPTY, piece) {
            assert_eq!(
                Some(m.mask),
                piece.shifted(m.row as usize, m.col as usize)
            );
        }
    }
}
