//! gridfill search crate - heuristic move selection over a hand.

mod planner;

pub use planner::{HandPlanner, PlannedMove, PlannerConfig};
