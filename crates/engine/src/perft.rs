//! perft - exhaustive terminal-leaf count for movegen/line-clear verification
//!
//! A node is a leaf when it sits at the maximum depth or when no catalog piece
//! fits anywhere on its board. Piece choice is unconstrained at every node
//! (no hand), so counts are a pure property of board + catalog.

use gridfill_core::{Bitboard, Move, CATALOG};
use rayon::prelude::*;

use crate::apply::apply_mask;
use crate::config::BoardPreset;
use crate::movegen::{count_moves, for_each_placement};
use crate::tt::{MemoTable, MAX_CACHED_DEPTH};

/// Verified leaf counts per (preset, depth).
pub const BASELINES: &[(BoardPreset, u32, u64)] = &[
    (BoardPreset::Empty, 0, 1),
    (BoardPreset::Empty, 1, 1_421),
    (BoardPreset::Empty, 2, 1_617_196),
    (BoardPreset::Empty, 3, 1_455_574_952),
    (BoardPreset::NearFull, 0, 1),
    (BoardPreset::NearFull, 1, 76),
    (BoardPreset::NearFull, 2, 4_380),
    (BoardPreset::NearFull, 3, 507_036),
    (BoardPreset::NearFull, 4, 142_586_120),
];

/// Known leaf count for a preset at a depth, if one was verified.
pub fn baseline(preset: BoardPreset, depth: u32) -> Option<u64> {
    BASELINES
        .iter()
        .find(|&&(p, d, _)| p == preset && d == depth)
        .map(|&(_, _, nodes)| nodes)
}

fn count_leaves(board: Bitboard, depth: u32, max_depth: u32, memo: &mut MemoTable) -> u64 {
    if depth == max_depth {
        return 1;
    }

    let cached = (depth as usize) < MAX_CACHED_DEPTH;
    if cached {
        if let Some(nodes) = memo.probe(board, depth as usize) {
            return nodes;
        }
    }

    let mut nodes = 0u64;
    if depth + 1 == max_depth {
        // every child is a leaf
        for piece in &CATALOG {
            nodes += count_moves(board, piece) as u64;
        }
    } else {
        for piece in &CATALOG {
            for_each_placement(board, piece, |_, _, mask| {
                let (next, _) = apply_mask(board, mask);
                nodes += count_leaves(next, depth + 1, max_depth, memo);
            });
        }
    }

    // nothing fits: game over, the node itself is a leaf
    if nodes == 0 {
        nodes = 1;
    }

    if cached {
        memo.store(board, depth as usize, nodes);
    }
    nodes
}

/// Leaf count with a fresh memo table.
pub fn perft(board: Bitboard, max_depth: u32) -> u64 {
    let mut memo = MemoTable::new();
    let nodes = count_leaves(board, 0, max_depth, &mut memo);
    log::debug!(
        "perft depth {} -> {} leaves ({} memo entries)",
        max_depth,
        nodes,
        memo.len()
    );
    nodes
}

/// Leaf count reusing a caller-owned memo table. The table must be empty or
/// filled by an earlier run at the same `max_depth`.
pub fn perft_with_memo(board: Bitboard, max_depth: u32, memo: &mut MemoTable) -> u64 {
    count_leaves(board, 0, max_depth, memo)
}

fn root_masks(board: Bitboard) -> Vec<(Move, Bitboard)> {
    let mut children = Vec::new();
    for piece in &CATALOG {
        for_each_placement(board, piece, |row, col, mask| {
            let (next, _) = apply_mask(board, mask);
            children.push((Move::new(piece.kind, row as u8, col as u8, mask), next));
        });
    }
    children
}

/// Parallel perft - root moves split across threads, one memo table per root move
pub fn perft_parallel(board: Bitboard, max_depth: u32) -> u64 {
    if max_depth == 0 {
        return 1;
    }

    let children = root_masks(board);
    if children.is_empty() {
        return 1;
    }

    children
        .par_iter()
        .map(|&(_, next)| {
            let mut memo = MemoTable::new();
            count_leaves(next, 1, max_depth, &mut memo)
        })
        .sum()
}

/// Leaf count below each root move, in catalog/origin order.
pub fn divide(board: Bitboard, max_depth: u32) -> Vec<(Move, u64)> {
    if max_depth == 0 {
        return Vec::new();
    }

    let mut memo = MemoTable::new();
    root_masks(board)
        .into_iter()
        .map(|(mv, next)| (mv, count_leaves(next, 1, max_depth, &mut memo)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_0_returns_1() {
        assert_eq!(perft(Bitboard::EMPTY, 0), 1);
        assert_eq!(perft(Bitboard::FULL, 0), 1);
    }

    #[test]
    fn test_empty_board_d1() {
        assert_eq!(perft(Bitboard::EMPTY, 1), 1421);
    }

    #[test]
    fn test_near_full_d1() {
        assert_eq!(perft(BoardPreset::NearFull.board(), 1), 76);
    }

    #[test]
    fn test_dead_board_is_single_leaf() {
        // no piece fits on a full board at any depth
        for depth in 1..4 {
            assert_eq!(perft(Bitboard::FULL, depth), 1);
        }
    }

    #[test]
    fn test_memo_matches_across_reuse_same_depth() {
        let board = BoardPreset::NearFull.board();
        let mut memo = MemoTable::new();
        let first = perft_with_memo(board, 2, &mut memo);
        assert!(!memo.is_empty());
        let second = perft_with_memo(board, 2, &mut memo);
        assert_eq!(first, second);
        assert_eq!(first, 4380);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let board = BoardPreset::NearFull.board();
        for depth in 0..=2 {
            assert_eq!(perft_parallel(board, depth), perft(board, depth));
        }
    }

    #[test]
    fn test_divide_sums_to_total() {
        let board = BoardPreset::NearFull.board();
        let split = divide(board, 2);
        assert_eq!(split.len(), 76);
        let total: u64 = split.iter().map(|&(_, n)| n).sum();
        assert_eq!(total, 4380);
        assert!(divide(board, 0).is_empty());
    }

    #[test]
    fn test_baseline_lookup() {
        assert_eq!(baseline(BoardPreset::Empty, 1), Some(1421));
        assert_eq!(baseline(BoardPreset::NearFull, 4), Some(142_586_120));
        assert_eq!(baseline(BoardPreset::Empty, 9), None);
    }
}
