//! Terminal-leaf counts per depth, checked against the recorded baselines.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use gridfill_engine::{baseline, perft_parallel, perft_with_memo, BoardPreset, MemoTable};

#[derive(Parser, Debug)]
#[command(
    name = "perft",
    version,
    about = "Count terminal leaves of the placement tree for every depth up to --depth"
)]
struct Cli {
    /// Deepest depth to run; depths 0..=N are all reported
    #[arg(long, short = 'd', default_value_t = 2)]
    depth: u32,

    /// Start board: `empty` or `nearfull`
    #[arg(long, short = 'p', default_value_t = BoardPreset::Empty)]
    preset: BoardPreset,

    /// Split root moves across the rayon pool
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Running perft (terminal leaf count)")?;
    writeln!(out, "  Max depth: {}", cli.depth)?;
    writeln!(out, "  Preset:    {}", cli.preset)?;
    writeln!(out)?;

    let board = cli.preset.board();
    let mut memo = MemoTable::new();
    let mut all_passed = true;

    for depth in 0..=cli.depth {
        log::info!("depth {} on {} board", depth, cli.preset);
        let start = Instant::now();
        let nodes = if cli.parallel {
            perft_parallel(board, depth)
        } else {
            perft_with_memo(board, depth, &mut memo)
        };
        let secs = start.elapsed().as_secs_f64();

        let verdict = match baseline(cli.preset, depth) {
            Some(expected) if expected == nodes => "[PASS]".to_string(),
            Some(expected) => {
                all_passed = false;
                format!("[FAIL] Expected {expected}")
            }
            None => "[NEW]".to_string(),
        };
        writeln!(out, "Depth {depth}: {nodes:>12} nodes ({secs:.3}s) {verdict}")?;

        // leaf counts depend on the maximum depth
        memo.clear();
    }

    if all_passed {
        Ok(ExitCode::SUCCESS)
    } else {
        log::error!("leaf counts differ from the recorded baselines");
        Ok(ExitCode::FAILURE)
    }
}
