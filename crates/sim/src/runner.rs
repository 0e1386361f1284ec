use std::sync::atomic::{AtomicUsize, Ordering};

use gridfill_engine::Game;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::strategy::{Strategy, StrategyKind};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    pub strategy: StrategyKind,
    pub runs: usize,
    /// Master seed; drawn from OS entropy when absent
    pub seed: Option<u64>,
    /// Stop a game after this many placements
    pub max_moves: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Random,
            runs: 1000,
            seed: None,
            max_moves: None,
        }
    }
}

/// Play one game to the end (or the move cap) and return its final score.
pub fn play_game(strategy: &mut dyn Strategy, seed: u64, max_moves: Option<u32>) -> u32 {
    let mut game = Game::with_seed(seed);
    let mut moves = 0u32;

    while !game.is_game_over() {
        if max_moves.is_some_and(|cap| moves >= cap) {
            log::debug!("{} game stopped at the {} move cap", strategy.name(), moves);
            break;
        }
        let Some(mv) = strategy.choose(&game) else {
            break;
        };
        game.make_move(&mv);
        moves += 1;
    }

    game.score()
}

/// Final scores of `config.runs` independent games, in run order.
pub fn simulate(config: &SimConfig) -> Vec<u32> {
    simulate_with_progress(config, |_, _| {})
}

/// Like [`simulate`], calling `progress(done, total)` each time another
/// tenth of the runs completes and once at the end.
pub fn simulate_with_progress<F>(config: &SimConfig, progress: F) -> Vec<u32>
where
    F: Fn(usize, usize) + Sync,
{
    let runs = config.runs;
    let master_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut master = Xoshiro256PlusPlus::seed_from_u64(master_seed);

    // (game seed, strategy seed) per run, fixed before any thread starts
    let seeds: Vec<(u64, u64)> = (0..runs)
        .map(|_| (master.random(), master.random()))
        .collect();

    log::debug!(
        "simulating {} {} games from master seed {}",
        runs,
        config.strategy,
        master_seed
    );

    let step = (runs / 10).max(1);
    let done = AtomicUsize::new(0);

    seeds
        .par_iter()
        .map(|&(game_seed, strategy_seed)| {
            let mut strategy = config.strategy.build(strategy_seed);
            let score = play_game(strategy.as_mut(), game_seed, config.max_moves);
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            if finished % step == 0 || finished == runs {
                progress(finished, runs);
            }
            score
        })
        .collect()
}
