use std::cmp::Ordering;

use gridfill_core::{Bitboard, Move, PieceKind};
use gridfill_engine::{apply_mask, for_each_placement, Game, Hand, HAND_SIZE};
use gridfill_eval::{clear_bonus, evaluate, evaluate_with_clear, EvalWeights};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

type Remaining = SmallVec<[PieceKind; HAND_SIZE]>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub weights: EvalWeights,
    /// Branch score when the rest of the hand cannot be placed
    pub game_over_penalty: f32,
    /// Greedy placement passes over the rest of the hand
    pub passes: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            weights: EvalWeights::default(),
            game_over_penalty: -10_000.0,
            passes: HAND_SIZE,
        }
    }
}

/// First move of the best branch found for a hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannedMove {
    pub slot: usize,
    pub mv: Move,
    pub score: f32,
}

/// One-ply search over the unused slots, each branch finished by a greedy
/// pass over the pieces left in the hand.
#[derive(Clone, Debug, Default)]
pub struct HandPlanner {
    pub config: PlannerConfig,
}

impl HandPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Best first move for the game's current hand; `None` once the game is over.
    pub fn search(&self, game: &Game) -> Option<PlannedMove> {
        if game.is_game_over() {
            return None;
        }
        self.plan(game.board(), game.hand())
    }

    /// Best first move for `hand` on `board`. Ties keep the earliest
    /// candidate in slot, then row-major origin, order.
    pub fn plan(&self, board: Bitboard, hand: &Hand) -> Option<PlannedMove> {
        let unused: Remaining = hand.unused().map(|(_, kind)| kind).collect();
        let mut best: Option<PlannedMove> = None;

        for (index, (slot, kind)) in hand.unused().enumerate() {
            // a repeated piece yields the same branches as its first slot
            if unused[..index].contains(&kind) {
                continue;
            }

            let mut rest = unused.clone();
            rest.remove(index);

            let piece = kind.piece();
            for_each_placement(board, piece, |row, col, mask| {
                let (next, lines) = apply_mask(board, mask);
                let score =
                    clear_bonus(lines, &self.config.weights) + self.finish_greedy(next, &rest);
                let better = best.map_or(true, |b| score_cmp(score, b.score) == Ordering::Less);
                if better {
                    best = Some(PlannedMove {
                        slot,
                        mv: Move::new(kind, row as u8, col as u8, mask),
                        score,
                    });
                }
            });
        }

        if let Some(plan) = &best {
            log::trace!(
                "planned {:?} at ({}, {}) from slot {} scoring {:.2}",
                plan.mv.piece,
                plan.mv.row,
                plan.mv.col,
                plan.slot,
                plan.score
            );
        }
        best
    }

    /// Place the remaining pieces one at a time, each pass taking the
    /// (piece, origin) with the best clear bonus plus evaluation.
    fn finish_greedy(&self, board: Bitboard, rest: &Remaining) -> f32 {
        let weights = &self.config.weights;
        let mut board = board;
        let mut rest = rest.clone();
        let mut total = 0.0;

        for _ in 0..self.config.passes {
            if rest.is_empty() {
                break;
            }

            let mut step: Option<Step> = None;
            for (index, kind) in rest.iter().enumerate() {
                for_each_placement(board, kind.piece(), |_, _, mask| {
                    let (next, lines) = apply_mask(board, mask);
                    let score = evaluate_with_clear(next, lines, weights);
                    let better =
                        step.map_or(true, |s| score_cmp(score, s.score) == Ordering::Less);
                    if better {
                        step = Some(Step {
                            index,
                            board: next,
                            lines,
                            score,
                        });
                    }
                });
            }

            let Some(step) = step else {
                return self.config.game_over_penalty;
            };
            total += clear_bonus(step.lines, weights);
            board = step.board;
            rest.remove(step.index);
        }

        total + evaluate(board, weights)
    }
}

#[derive(Clone, Copy)]
struct Step {
    index: usize,
    board: Bitboard,
    lines: u32,
    score: f32,
}

/// Descending order on scores; `Less` means `a` ranks ahead of `b`.
fn score_cmp(a: f32, b: f32) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
