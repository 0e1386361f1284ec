//! Memo table for the exhaustive search - one hash map per depth
//! mapping a board bit-pattern to its terminal leaf count.
//!
//! Counts depend on the maximum depth of the run that produced them,
//! so a table must be cleared before it is reused for a different maximum.

use gridfill_core::Bitboard;
use rustc_hash::FxHashMap;

/// Depths `0..MAX_CACHED_DEPTH` are cached; deeper nodes are always recomputed.
pub const MAX_CACHED_DEPTH: usize = 8;

#[derive(Clone, Debug, Default)]
pub struct MemoTable {
    tables: [FxHashMap<u64, u64>; MAX_CACHED_DEPTH],
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached leaf count for this board at this depth.
    /// Panics if `depth >= MAX_CACHED_DEPTH`.
    #[inline]
    pub fn probe(&self, board: Bitboard, depth: usize) -> Option<u64> {
        assert!(depth < MAX_CACHED_DEPTH, "memo depth {depth} out of range");
        self.tables[depth].get(&board.bits()).copied()
    }

    /// Panics if `depth >= MAX_CACHED_DEPTH`.
    #[inline]
    pub fn store(&mut self, board: Bitboard, depth: usize, nodes: u64) {
        assert!(depth < MAX_CACHED_DEPTH, "memo depth {depth} out of range");
        self.tables[depth].insert(board.bits(), nodes);
    }

    /// Drop all entries, keeping allocations
    pub fn clear(&mut self) {
        for table in &mut self.tables {
            table.clear();
        }
    }

    /// Total entries across all depths
    pub fn len(&self) -> usize {
        self.tables.iter().map(|t| t.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(|t| t.is_empty())
    }
}
