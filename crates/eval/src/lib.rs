//! gridfill eval crate - heuristics for board evaluation.

use gridfill_core::Bitboard;
use serde::{Deserialize, Serialize};

const ROW_FIRST: u64 = Bitboard::ROW_MASK;
const ROW_LAST: u64 = Bitboard::ROW_MASK << 56;
const COL_FIRST: u64 = Bitboard::COL_MASK;
const COL_LAST: u64 = Bitboard::COL_MASK << 7;

/// Lines with at least this many filled cells earn the near-completion bonus
pub const NEAR_COMPLETE_MIN: u32 = 6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// per occupied cell
    pub population: f32,
    /// per trapped empty cell
    pub holes: f32,
    /// per step of a line past five filled cells
    pub near_complete: f32,
    /// per occupied cell on the outer ring
    pub edges: f32,
    /// multiplied by lines² for one placement
    pub lines_cleared: f32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            population: -1.0,
            holes: -4.0,
            near_complete: 2.0,
            edges: 0.4,
            lines_cleared: 10.0,
        }
    }
}

/// Static evaluation of a board; higher is better.
pub fn evaluate(board: Bitboard, weights: &EvalWeights) -> f32 {
    let mut score = board.count() as f32 * weights.population;
    score += count_holes(board) as f32 * weights.holes;
    score += near_complete(board) as f32 * weights.near_complete;
    score += count_edges(board) as f32 * weights.edges;
    score
}

/// Immediate reward for clearing `lines` lines in one placement.
#[inline]
pub fn clear_bonus(lines: u32, weights: &EvalWeights) -> f32 {
    (lines * lines) as f32 * weights.lines_cleared
}

pub fn evaluate_with_clear(board: Bitboard, lines: u32, weights: &EvalWeights) -> f32 {
    clear_bonus(lines, weights) + evaluate(board, weights)
}

/// Count trapped empty cells: flanked on both vertical sides (or both
/// horizontal sides) with at least one occupied neighbour on the other axis.
/// The board edge counts as occupied.
pub fn count_holes(board: Bitboard) -> u32 {
    let b = board.bits();
    let north = (b << 8) | ROW_FIRST;
    let south = (b >> 8) | ROW_LAST;
    let west = ((b << 1) & !COL_FIRST) | COL_FIRST;
    let east = ((b >> 1) & !COL_LAST) | COL_LAST;

    let vertical = north & south & (west | east);
    let horizontal = west & east & (north | south);
    (!b & (vertical | horizontal)).count_ones()
}

/// Sum over rows and columns of how far each line is past five filled cells
/// (6 filled -> 1, 7 filled -> 2). Full lines never survive a placement.
pub fn near_complete(board: Bitboard) -> u32 {
    let mut total = 0;
    for i in 0..Bitboard::SIZE {
        for filled in [board.row_count(i), board.col_count(i)] {
            if filled >= NEAR_COMPLETE_MIN {
                total += filled - (NEAR_COMPLETE_MIN - 1);
            }
        }
    }
    total
}

/// Occupied cells on the outer ring
#[inline]
pub fn count_edges(board: Bitboard) -> u32 {
    (board.bits() & Bitboard::EDGE_MASK).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_features() {
        let board = Bitboard::EMPTY;
        assert_eq!(count_holes(board), 0);
        assert_eq!(near_complete(board), 0);
        assert_eq!(count_edges(board), 0);
        assert_eq!(evaluate(board, &EvalWeights::default()), 0.0);
    }

    #[test]
    fn test_isolated_hole() {
        let mut board = Bitboard::FULL;
        board.clear_square(3, 3);
        assert_eq!(count_holes(board), 1);
    }

    #[test]
    fn test_vertical_flank_needs_side_neighbour() {
        let mut board = Bitboard::EMPTY;
        board.set_occupied(2, 3);
        board.set_occupied(4, 3);
        assert_eq!(count_holes(board), 0);

        board.set_occupied(3, 2);
        assert_eq!(count_holes(board), 1);
    }

    #[test]
    fn test_wall_counts_as_occupied() {
        let mut board = Bitboard::EMPTY;
        board.set_occupied(1, 0);
        // (0, 0) sits between the top wall and (1, 0), with the left wall beside it
        assert_eq!(count_holes(board), 1);
    }

    #[test]
    fn test_near_complete() {
        let mut board = Bitboard::EMPTY;
        for col in 0..6 {
            board.set_occupied(0, col);
        }
        assert_eq!(near_complete(board), 1);
        board.set_occupied(0, 6);
        assert_eq!(near_complete(board), 2);
        for row in 1..7 {
            board.set_occupied(row, 7);
        }
        // column 7 now has six cells
        assert_eq!(near_complete(board), 3);
    }

    #[test]
    fn test_edges() {
        let mut board = Bitboard::EMPTY;
        board.set_occupied(0, 3);
        board.set_occupied(3, 3);
        board.set_occupied(7, 7);
        assert_eq!(count_edges(board), 2);
    }

    #[test]
    fn test_clear_bonus_quadratic() {
        let weights = EvalWeights::default();
        assert_eq!(clear_bonus(0, &weights), 0.0);
        assert_eq!(clear_bonus(2, &weights), 4.0 * weights.lines_cleared);
    }

    #[test]
    fn test_evaluate_with_clear_adds_bonus() {
        let weights = EvalWeights::default();
        let mut board = Bitboard::EMPTY;
        board.set_occupied(0, 0);
        board.set_occupied(4, 4);
        let base = evaluate(board, &weights);
        assert_eq!(evaluate_with_clear(board, 0, &weights), base);
        assert_eq!(
            evaluate_with_clear(board, 2, &weights),
            clear_bonus(2, &weights) + base
        );
    }

    #[test]
    fn test_holes_lower_the_score() {
        let weights = EvalWeights::default();
        let mut pocket = Bitboard::EMPTY;
        pocket.set_occupied(3, 2);
        pocket.set_occupied(3, 4);
        pocket.set_occupied(2, 3);
        let mut open = Bitboard::EMPTY;
        open.set_occupied(3, 2);
        open.set_occupied(3, 4);
        open.set_occupied(5, 5);

        assert_eq!(count_holes(pocket), 1);
        assert_eq!(count_holes(open), 0);
        assert!(evaluate(pocket, &weights) < evaluate(open, &weights));
    }
}
