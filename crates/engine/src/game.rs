//! Game state machine.
//!
//! A game is Active until no unused hand slot can be placed anywhere, then
//! GameOver for good. Rejected placements (used or out-of-range slot, piece
//! off the board, occupied cells, game already over) are zero-point no-ops.

use gridfill_core::{Bitboard, Move, PieceKind};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::hand::{Hand, HAND_SIZE};
use crate::move_list::MoveList;
use crate::movegen::{has_any_move, push_moves};
use crate::scoring::clear_score;

#[derive(Clone, Debug)]
pub struct Game {
    board: Bitboard,
    hand: Hand,
    score: u32,
    turn: u32,
    game_over: bool,
    rng: Xoshiro256PlusPlus,
}

impl Game {
    /// New game with a reproducible hand sequence.
    pub fn with_seed(seed: u64) -> Self {
        let mut game = Self {
            board: Bitboard::EMPTY,
            hand: Hand::new([PieceKind::Square2x2; HAND_SIZE]),
            score: 0,
            turn: 0,
            game_over: false,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        };
        game.draw_hand();
        game
    }

    /// New game seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Game starting from a given board and first hand. Later hands come from `seed`.
    pub fn from_position(board: Bitboard, pieces: [PieceKind; HAND_SIZE], seed: u64) -> Self {
        let mut game = Self {
            board,
            hand: Hand::new(pieces),
            score: 0,
            turn: 1,
            game_over: false,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        };
        game.check_game_over();
        game
    }

    #[inline]
    pub fn board(&self) -> Bitboard {
        self.board
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of hands drawn so far
    #[inline]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[inline]
    pub fn hand_pieces(&self) -> &[PieceKind; HAND_SIZE] {
        self.hand.pieces()
    }

    #[inline]
    pub fn hand_used(&self) -> &[bool; HAND_SIZE] {
        self.hand.used()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Shifted mask for an unused slot at an origin, if it fits on the current board.
    fn placement_mask(&self, slot: usize, row: usize, col: usize) -> Option<u64> {
        let piece = self.hand.available(slot)?;
        let mask = piece.piece().shifted(row, col)?;
        self.board.can_place(mask).then_some(mask)
    }

    pub fn can_place(&self, slot: usize, row: usize, col: usize) -> bool {
        self.placement_mask(slot, row, col).is_some()
    }

    /// Legal moves for one hand slot; empty for used or out-of-range slots.
    pub fn legal_moves(&self, slot: usize) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.hand.available(slot) {
            push_moves(self.board, piece.piece(), &mut moves);
        }
        moves
    }

    /// Legal moves for every unused slot, slot by slot.
    pub fn all_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (_, piece) in self.hand.unused() {
            push_moves(self.board, piece.piece(), &mut moves);
        }
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        self.hand
            .unused()
            .any(|(_, piece)| has_any_move(self.board, piece.piece()))
    }

    /// Place the piece in `slot` with its top-left corner at (row, col).
    /// Returns points earned; 0 with no state change when rejected.
    pub fn place_piece(&mut self, slot: usize, row: usize, col: usize) -> u32 {
        if self.game_over {
            return 0;
        }
        let Some(mask) = self.placement_mask(slot, row, col) else {
            return 0;
        };

        self.hand.mark_used(slot);
        let lines = self.board.place_and_clear(mask);
        let points = clear_score(lines);
        self.score += points;

        if self.hand.all_used() {
            self.draw_hand();
        } else {
            self.check_game_over();
        }
        points
    }

    /// Apply a move by piece identity: the first unused slot holding `mv.piece`
    /// is consumed. The cached mask is ignored in favour of the catalog's.
    pub fn make_move(&mut self, mv: &Move) -> u32 {
        if self.game_over {
            return 0;
        }
        match self.hand.slot_of(mv.piece) {
            Some(slot) => self.place_piece(slot, mv.row as usize, mv.col as usize),
            None => 0,
        }
    }

    /// Discard the current hand and draw a new one. No-op once the game is over.
    pub fn new_turn(&mut self) {
        if !self.game_over {
            self.draw_hand();
        }
    }

    /// Brand-new game on the same random stream.
    pub fn reset(&mut self) {
        self.board = Bitboard::EMPTY;
        self.score = 0;
        self.turn = 0;
        self.game_over = false;
        self.draw_hand();
    }

    fn draw_hand(&mut self) {
        self.hand = Hand::draw(&mut self.rng);
        self.turn += 1;
        log::trace!("turn {}: drew {:?}", self.turn, self.hand.pieces());
        self.check_game_over();
    }

    fn check_game_over(&mut self) {
        if !self.has_legal_moves() {
            self.game_over = true;
            log::debug!(
                "game over on turn {} with score {}",
                self.turn,
                self.score
            );
        }
    }
}
