//! gridfill core crate - bitboard, piece catalog and move types for the 8x8 block puzzle.

mod board;
mod moves;
mod piece;

pub use board::Bitboard;
pub use moves::Move;
pub use piece::{Piece, PieceKind, CATALOG, NUM_PIECES};
