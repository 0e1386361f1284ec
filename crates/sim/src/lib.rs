//! gridfill sim crate - whole-game strategies, batch simulation and score statistics.

mod runner;
mod stats;
mod strategy;

pub use runner::{play_game, simulate, simulate_with_progress, SimConfig};
pub use stats::Statistics;
pub use strategy::{ParseStrategyError, RandomStrategy, SmartStrategy, Strategy, StrategyKind};
