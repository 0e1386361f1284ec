//! Move definition.

use serde::{Deserialize, Serialize};

use crate::PieceKind;

/// A piece placed with its top-left corner at (row, col).
/// `mask` is the cached shifted occupancy and takes no part in equality.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Move {
    pub piece: PieceKind,
    pub row: u8,
    pub col: u8,
    pub mask: u64,
}

impl Move {
    pub const ZERO: Self = Self {
        piece: PieceKind::Square2x2,
        row: 0,
        col: 0,
        mask: 0,
    };

    #[inline(always)]
    pub const fn new(piece: PieceKind, row: u8, col: u8, mask: u64) -> Self {
        Self {
            piece,
            row,
            col,
            mask,
        }
    }

    /// Resolve the mask from the catalog. `None` if the piece leaves the board.
    pub fn from_catalog(piece: PieceKind, row: usize, col: usize) -> Option<Self> {
        let mask = piece.piece().shifted(row, col)?;
        Some(Self::new(piece, row as u8, col as u8, mask))
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.piece == other.piece && self.row == other.row && self.col == other.col
    }
}

impl Eq for Move {}

impl std::hash::Hash for Move {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.piece.hash(state);
        self.row.hash(state);
        self.col.hash(state);
    }
}
