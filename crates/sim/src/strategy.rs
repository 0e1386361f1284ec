use std::fmt;
use std::str::FromStr;

use gridfill_core::Move;
use gridfill_engine::Game;
use gridfill_search::{HandPlanner, PlannerConfig};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Picks the next move for a game in progress.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// `None` when nothing can be placed.
    fn choose(&mut self, game: &Game) -> Option<Move>;
}

/// Uniform choice over every legal move of the whole hand.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: Xoshiro256PlusPlus,
}

impl RandomStrategy {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, game: &Game) -> Option<Move> {
        let moves = game.all_legal_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.random_range(0..moves.len())])
    }
}

#[derive(Clone, Debug, Default)]
pub struct SmartStrategy {
    planner: HandPlanner,
}

impl SmartStrategy {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            planner: HandPlanner::new(config),
        }
    }
}

impl Strategy for SmartStrategy {
    fn name(&self) -> &'static str {
        "smart"
    }

    fn choose(&mut self, game: &Game) -> Option<Move> {
        self.planner.search(game).map(|plan| plan.mv)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Random,
    Smart,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Random, StrategyKind::Smart];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Smart => "smart",
        }
    }

    /// Fresh strategy instance; `seed` feeds strategies that draw random numbers.
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::with_seed(seed)),
            StrategyKind::Smart => Box::new(SmartStrategy::default()),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy `{0}` (expected `random` or `smart`)")]
pub struct ParseStrategyError(pub String);

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(StrategyKind::Random),
            "smart" | "heuristic" => Ok(StrategyKind::Smart),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
