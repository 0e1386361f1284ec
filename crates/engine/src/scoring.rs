/// Points for a single line cleared alone
pub const POINTS_PER_LINE: u32 = 8;

/// Points for clearing `lines` lines with one placement: `lines² × 8`.
/// Multi-line clears grow quadratically.
#[inline(always)]
pub const fn clear_score(lines: u32) -> u32 {
    lines * lines * POINTS_PER_LINE
}
