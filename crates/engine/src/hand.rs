//! The three-piece hand and its per-slot used flags.

use gridfill_core::{PieceKind, NUM_PIECES};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const HAND_SIZE: usize = 3;

/// Slots are drawn together and their used flags only ever reset together.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Hand {
    pieces: [PieceKind; HAND_SIZE],
    used: [bool; HAND_SIZE],
}

impl Hand {
    /// Fresh hand with every slot unused.
    pub fn new(pieces: [PieceKind; HAND_SIZE]) -> Self {
        Self {
            pieces,
            used: [false; HAND_SIZE],
        }
    }

    /// Hand with explicit used flags, e.g. to plan from a position mid-turn.
    pub fn from_parts(pieces: [PieceKind; HAND_SIZE], used: [bool; HAND_SIZE]) -> Self {
        Self { pieces, used }
    }

    /// Draw three pieces uniformly from the catalog, repetition allowed.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pieces = [PieceKind::Square2x2; HAND_SIZE];
        for slot in &mut pieces {
            *slot = PieceKind::ALL[rng.random_range(0..NUM_PIECES)];
        }
        Self::new(pieces)
    }

    #[inline]
    pub fn pieces(&self) -> &[PieceKind; HAND_SIZE] {
        &self.pieces
    }

    #[inline]
    pub fn used(&self) -> &[bool; HAND_SIZE] {
        &self.used
    }

    /// Piece in an unused slot; `None` for used or out-of-range slots.
    #[inline]
    pub fn available(&self, slot: usize) -> Option<PieceKind> {
        match self.used.get(slot) {
            Some(false) => Some(self.pieces[slot]),
            _ => None,
        }
    }

    pub(crate) fn mark_used(&mut self, slot: usize) {
        self.used[slot] = true;
    }

    #[inline]
    pub fn all_used(&self) -> bool {
        self.used.iter().all(|&u| u)
    }

    /// (slot, piece) for every unused slot, in slot order.
    pub fn unused(&self) -> impl Iterator<Item = (usize, PieceKind)> + '_ {
        (0..HAND_SIZE)
            .filter(move |&slot| !self.used[slot])
            .map(move |slot| (slot, self.pieces[slot]))
    }

    /// First unused slot holding `piece`.
    pub fn slot_of(&self, piece: PieceKind) -> Option<usize> {
        self.unused()
            .find(|&(_, kind)| kind == piece)
            .map(|(slot, _)| slot)
    }
}
