use std::fmt;
use std::str::FromStr;

use gridfill_core::Bitboard;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named starting boards for the exhaustive search tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardPreset {
    /// Empty 8x8 board
    Empty,
    /// Rows 1-6 x columns 1-6 filled, leaving an empty ring on the border
    NearFull,
}

impl BoardPreset {
    pub const ALL: [BoardPreset; 2] = [BoardPreset::Empty, BoardPreset::NearFull];

    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NearFull => "nearfull",
        }
    }

    pub fn board(self) -> Bitboard {
        match self {
            Self::Empty => Bitboard::EMPTY,
            Self::NearFull => {
                let mut board = Bitboard::EMPTY;
                for row in 1..=6 {
                    for col in 1..=6 {
                        board.set_occupied(row, col);
                    }
                }
                board
            }
        }
    }
}

impl fmt::Display for BoardPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown board preset `{0}` (expected `empty` or `nearfull`)")]
pub struct ParsePresetError(pub String);

impl FromStr for BoardPreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" | "default" => Ok(Self::Empty),
            "nearfull" | "near-full" => Ok(Self::NearFull),
            _ => Err(ParsePresetError(s.to_string())),
        }
    }
}
