//! Piece shapes and the static piece catalog.
//!
//! Every rotation is its own catalog entry. Each entry carries a shift table:
//! for all 64 board origins, the piece's occupancy translated to that origin,
//! or [`OUT_OF_BOUNDS`] where the piece would leave the board.
//! The whole catalog is evaluated at compile time.

use serde::{Deserialize, Serialize};

use crate::Bitboard;

pub const NUM_PIECES: usize = 34;

/// Shift table sentinel: the piece does not fit inside the board at this origin.
pub const OUT_OF_BOUNDS: u64 = 0;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Square2x2,
    Square3x3,
    Rect2x3,
    Rect3x2,
    Line3x1,
    Line4x1,
    Line5x1,
    Line1x3,
    Line1x4,
    Line1x5,
    S0,
    S90,
    S180,
    S270,
    T0,
    T90,
    T180,
    T270,
    SmallCorner0,
    SmallCorner90,
    SmallCorner180,
    SmallCorner270,
    LargeCorner0,
    LargeCorner90,
    LargeCorner180,
    LargeCorner270,
    L0,
    L90,
    L180,
    L270,
    J0,
    J90,
    J180,
    J270,
}

impl PieceKind {
    pub const ALL: [PieceKind; NUM_PIECES] = [
        PieceKind::Square2x2,
        PieceKind::Square3x3,
        PieceKind::Rect2x3,
        PieceKind::Rect3x2,
        PieceKind::Line3x1,
        PieceKind::Line4x1,
        PieceKind::Line5x1,
        PieceKind::Line1x3,
        PieceKind::Line1x4,
        PieceKind::Line1x5,
        PieceKind::S0,
        PieceKind::S90,
        PieceKind::S180,
        PieceKind::S270,
        PieceKind::T0,
        PieceKind::T90,
        PieceKind::T180,
        PieceKind::T270,
        PieceKind::SmallCorner0,
        PieceKind::SmallCorner90,
        PieceKind::SmallCorner180,
        PieceKind::SmallCorner270,
        PieceKind::LargeCorner0,
        PieceKind::LargeCorner90,
        PieceKind::LargeCorner180,
        PieceKind::LargeCorner270,
        PieceKind::L0,
        PieceKind::L90,
        PieceKind::L180,
        PieceKind::L270,
        PieceKind::J0,
        PieceKind::J90,
        PieceKind::J180,
        PieceKind::J270,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Catalog entry for this kind
    #[inline(always)]
    pub fn piece(self) -> &'static Piece {
        &CATALOG[self as usize]
    }
}

/// Immutable catalog entry.
#[derive(Clone, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub name: &'static str,
    /// Row-delimited fill pattern the piece was built from
    pub pattern: &'static str,
    /// Shape anchored at board origin (0, 0)
    pub base_mask: u64,
    pub width: u8,
    pub height: u8,
    shifts: [u64; Bitboard::CELLS],
}

impl Piece {
    /// Highest origin row at which the piece stays on the board
    #[inline(always)]
    pub const fn max_row(&self) -> usize {
        Bitboard::SIZE - self.height as usize
    }

    /// Highest origin column at which the piece stays on the board
    #[inline(always)]
    pub const fn max_col(&self) -> usize {
        Bitboard::SIZE - self.width as usize
    }

    /// Number of cells the piece covers
    #[inline(always)]
    pub const fn cells(&self) -> u32 {
        self.base_mask.count_ones()
    }

    /// Occupancy of the piece with its top-left corner at (row, col),
    /// `None` when it would leave the board.
    #[inline(always)]
    pub fn shifted(&self, row: usize, col: usize) -> Option<u64> {
        if row >= Bitboard::SIZE || col >= Bitboard::SIZE {
            return None;
        }
        match self.shifts[row * Bitboard::SIZE + col] {
            OUT_OF_BOUNDS => None,
            mask => Some(mask),
        }
    }

    /// Raw shift table lookup. Caller guarantees the origin is within
    /// `[0, max_row] x [0, max_col]`.
    #[inline(always)]
    pub fn shifted_unchecked(&self, row: usize, col: usize) -> u64 {
        debug_assert!(row <= self.max_row() && col <= self.max_col());
        self.shifts[row * Bitboard::SIZE + col]
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.height as usize {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.width as usize {
                let filled = self.base_mask & Bitboard::bit_at(r, c) != 0;
                write!(f, "{}", if filled { "█ " } else { "  " })?;
            }
        }
        Ok(())
    }
}

const fn pattern_dims(pattern: &str) -> (usize, usize) {
    let bytes = pattern.as_bytes();
    let mut width = 0;
    let mut current = 0;
    let mut height = 1;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'|' => {
                if current > width {
                    width = current;
                }
                current = 0;
                height += 1;
            }
            b'X' | b'.' => current += 1,
            _ => {}
        }
        i += 1;
    }
    if current > width {
        width = current;
    }
    (width, height)
}

const fn build(kind: PieceKind, name: &'static str, pattern: &'static str) -> Piece {
    let base = Bitboard::from_pattern(pattern).bits();
    let (width, height) = pattern_dims(pattern);
    let mut shifts = [OUT_OF_BOUNDS; Bitboard::CELLS];

    let mut row = 0;
    while row + height <= Bitboard::SIZE {
        let mut col = 0;
        while col + width <= Bitboard::SIZE {
            let mut shifted = 0u64;
            let mut r = 0;
            while r < height {
                let mut c = 0;
                while c < width {
                    if base & (1u64 << (r * 8 + c)) != 0 {
                        shifted |= 1u64 << ((row + r) * 8 + col + c);
                    }
                    c += 1;
                }
                r += 1;
            }
            shifts[row * 8 + col] = shifted;
            col += 1;
        }
        row += 1;
    }

    Piece {
        kind,
        name,
        pattern,
        base_mask: base,
        width: width as u8,
        height: height as u8,
        shifts,
    }
}

/// Process-wide piece registry, indexed by `PieceKind as usize`.
pub static CATALOG: [Piece; NUM_PIECES] = [
    build(PieceKind::Square2x2, "2x2 Square", "XX|XX"),
    build(PieceKind::Square3x3, "3x3 Square", "XXX|XXX|XXX"),
    build(PieceKind::Rect2x3, "2x3 Rectangle", "XX|XX|XX"),
    build(PieceKind::Rect3x2, "3x2 Rectangle", "XXX|XXX"),
    build(PieceKind::Line3x1, "3x1 Line", "XXX"),
    build(PieceKind::Line4x1, "4x1 Line", "XXXX"),
    build(PieceKind::Line5x1, "5x1 Line", "XXXXX"),
    build(PieceKind::Line1x3, "1x3 Line", "X|X|X"),
    build(PieceKind::Line1x4, "1x4 Line", "X|X|X|X"),
    build(PieceKind::Line1x5, "1x5 Line", "X|X|X|X|X"),
    build(PieceKind::S0, "S piece 0°", ".XX|XX."),
    build(PieceKind::S90, "S piece 90°", "X.|XX|.X"),
    build(PieceKind::S180, "S piece Mirrored", "XX.|.XX"),
    build(PieceKind::S270, "S piece 90° Mirrored", ".X|XX|X."),
    build(PieceKind::T0, "T piece 0°", "XXX|.X."),
    build(PieceKind::T90, "T piece 90°", "X.|XX|X."),
    build(PieceKind::T180, "T piece 180°", ".X.|XXX"),
    build(PieceKind::T270, "T piece 270°", ".X|XX|.X"),
    build(PieceKind::SmallCorner0, "Small Corner 0°", "XX|X."),
    build(PieceKind::SmallCorner90, "Small Corner 90°", "XX|.X"),
    build(PieceKind::SmallCorner180, "Small Corner 180°", ".X|XX"),
    build(PieceKind::SmallCorner270, "Small Corner 270°", "X.|XX"),
    build(PieceKind::LargeCorner0, "Large Corner 0°", "XXX|X..|X.."),
    build(PieceKind::LargeCorner90, "Large Corner 90°", "XXX|..X|..X"),
    build(PieceKind::LargeCorner180, "Large Corner 180°", "..X|..X|XXX"),
    build(PieceKind::LargeCorner270, "Large Corner 270°", "X..|X..|XXX"),
    build(PieceKind::L0, "L piece 0°", "X.|X.|XX"),
    build(PieceKind::L90, "L piece 90°", "XXX|X.."),
    build(PieceKind::L180, "L piece 180°", "XX|.X|.X"),
    build(PieceKind::L270, "L piece 270°", "..X|XXX"),
    build(PieceKind::J0, "J piece 0°", ".X|.X|XX"),
    build(PieceKind::J90, "J piece 90°", "X..|XXX"),
    build(PieceKind::J180, "J piece 180°", "XX|X.|X."),
    build(PieceKind::J270, "J piece 270°", "XXX|..X"),
];
