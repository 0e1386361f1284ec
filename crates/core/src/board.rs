//! board representation - the whole 8x8 grid packed into one u64
//! bit `row * 8 + col` is set when cell (row, col) is occupied

use serde::{Deserialize, Serialize};

/// 8x8 occupancy bitboard.
/// Row 0 is the top row, column 0 the left column.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const SIZE: usize = 8;
    pub const CELLS: usize = 64;

    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(!0);

    /// First row (row 0)
    pub const ROW_MASK: u64 = 0xFF;
    /// First column (column 0)
    pub const COL_MASK: u64 = 0x0101_0101_0101_0101;
    /// Outer ring of cells: rows 0/7 and columns 0/7
    pub const EDGE_MASK: u64 = Self::ROW_MASK
        | (Self::ROW_MASK << 56)
        | Self::COL_MASK
        | (Self::COL_MASK << 7);

    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub const fn row_mask(row: usize) -> u64 {
        Self::ROW_MASK << (row * 8)
    }

    #[inline(always)]
    pub const fn col_mask(col: usize) -> u64 {
        Self::COL_MASK << col
    }

    #[inline(always)]
    pub const fn bit_at(row: usize, col: usize) -> u64 {
        1u64 << (row * 8 + col)
    }

    /// Build a mask from a row-delimited fill pattern: rows split by `|`,
    /// `X` filled, `.` empty. `"XX|X."` is a 2x2 square missing its bottom-right cell.
    pub const fn from_pattern(pattern: &str) -> Self {
        let bytes = pattern.as_bytes();
        let mut mask = 0u64;
        let mut row = 0;
        let mut col = 0;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'|' => {
                    row += 1;
                    col = 0;
                }
                b'X' => {
                    mask |= 1u64 << (row * 8 + col);
                    col += 1;
                }
                b'.' => col += 1,
                _ => {}
            }
            i += 1;
        }
        Self(mask)
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of occupied cells
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline(always)]
    pub fn is_occupied(self, row: usize, col: usize) -> bool {
        self.0 & Self::bit_at(row, col) != 0
    }

    #[inline(always)]
    pub fn set_occupied(&mut self, row: usize, col: usize) {
        self.0 |= Self::bit_at(row, col);
    }

    #[inline(always)]
    pub fn clear_square(&mut self, row: usize, col: usize) {
        self.0 &= !Self::bit_at(row, col);
    }

    /// Placement is legal iff no cell of the mask is already occupied.
    #[inline(always)]
    pub const fn can_place(self, mask: u64) -> bool {
        self.0 & mask == 0
    }

    #[inline(always)]
    pub fn place(&mut self, mask: u64) {
        self.0 |= mask;
    }

    /// Place a mask and clear every line it completes. Returns lines cleared.
    #[inline(always)]
    pub fn place_and_clear(&mut self, mask: u64) -> u32 {
        self.place(mask);
        self.clear_full_lines()
    }

    /// Bit `row * 8` set for every full row.
    #[inline(always)]
    fn full_row_bits(self) -> u64 {
        let mut v = self.0;
        v &= v >> 1;
        v &= v >> 2;
        v &= v >> 4;
        v & Self::COL_MASK
    }

    /// Bit `col` of the low byte set for every full column.
    #[inline(always)]
    fn full_col_bits(self) -> u64 {
        let mut v = self.0;
        v &= v >> 32;
        v &= v >> 16;
        v &= v >> 8;
        v & Self::ROW_MASK
    }

    /// Full rows as an 8-bit indicator, bit r for row r.
    pub fn full_rows(self) -> u8 {
        let bits = self.full_row_bits();
        (0..Self::SIZE).fold(0u8, |acc, r| acc | (((bits >> (r * 8)) & 1) as u8) << r)
    }

    /// Full columns as an 8-bit indicator, bit c for column c.
    pub fn full_cols(self) -> u8 {
        self.full_col_bits() as u8
    }

    /// Remove every full row and column in one pass. Cells shared by a full row
    /// and a full column are cleared once but both lines are counted.
    #[inline(always)]
    pub fn clear_full_lines(&mut self) -> u32 {
        let rows = self.full_row_bits();
        let cols = self.full_col_bits();
        if rows | cols == 0 {
            return 0;
        }
        let clear = rows * Self::ROW_MASK | cols * Self::COL_MASK;
        self.0 &= !clear;
        rows.count_ones() + cols.count_ones()
    }

    /// Occupied cells in a row
    #[inline]
    pub fn row_count(self, row: usize) -> u32 {
        (self.0 & Self::row_mask(row)).count_ones()
    }

    /// Occupied cells in a column
    #[inline]
    pub fn col_count(self, col: usize) -> u32 {
        (self.0 & Self::col_mask(col)).count_ones()
    }
}

impl From<u64> for Bitboard {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<Bitboard> for u64 {
    fn from(board: Bitboard) -> Self {
        board.0
    }
}

impl std::fmt::Display for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for row in 0..Self::SIZE {
            write!(f, "{row} ")?;
            for col in 0..Self::SIZE {
                write!(f, "{}", if self.is_occupied(row, col) { "█ " } else { "· " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
