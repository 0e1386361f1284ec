use gridfill_core::{Bitboard, Move};

/// Place a move on a copy of the board and clear completed lines.
/// Returns the resulting board and lines cleared.
#[inline]
pub fn apply_move(board: Bitboard, mv: &Move) -> (Bitboard, u32) {
    apply_mask(board, mv.mask)
}

/// Same as [`apply_move`] for a raw shifted mask.
#[inline(always)]
pub fn apply_mask(board: Bitboard, mask: u64) -> (Bitboard, u32) {
    let mut next = board;
    let lines = next.place_and_clear(mask);
    (next, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfill_core::PieceKind;

    #[test]
    fn test_apply_on_empty_board() {
        let board = Bitboard::EMPTY;
        let mv = Move::from_catalog(PieceKind::T0, 2, 3).expect("in bounds");
        let (next, lines) = apply_move(board, &mv);

        assert_eq!(lines, 0);
        assert!(next.is_occupied(2, 3));
        assert!(next.is_occupied(2, 4));
        assert!(next.is_occupied(2, 5));
        assert!(next.is_occupied(3, 4));
        assert_eq!(next.count(), 4);
        // original untouched
        assert!(board.is_empty());
    }

    #[test]
    fn test_apply_completes_row() {
        let mut board = Bitboard::EMPTY;
        for col in 0..8 {
            if !(2..7).contains(&col) {
                board.set_occupied(7, col);
            }
        }
        board.set_occupied(6, 0);

        let mv = Move::from_catalog(PieceKind::Line5x1, 7, 2).expect("in bounds");
        let (next, lines) = apply_move(board, &mv);

        assert_eq!(lines, 1);
        assert_eq!(next.bits() & Bitboard::row_mask(7), 0);
        assert!(next.is_occupied(6, 0));
    }

    #[test]
    fn test_apply_row_and_column_cross() {
        let mut board = Bitboard::EMPTY;
        for i in 0..8 {
            if i != 3 {
                board.set_occupied(3, i);
                board.set_occupied(i, 3);
            }
        }
        let mask = Bitboard::bit_at(3, 3);
        let (next, lines) = apply_mask(board, mask);
        assert_eq!(lines, 2);
        assert!(next.is_empty());
    }
}
