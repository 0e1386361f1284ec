//! Play many independent games with one strategy and report the score distribution.

use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use gridfill_sim::{simulate_with_progress, SimConfig, Statistics, StrategyKind};

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    version,
    about = "Play independent games and report final-score statistics"
)]
struct Cli {
    /// Move chooser: `random` or `smart`
    #[arg(long, short = 's', default_value_t = StrategyKind::Random)]
    strategy: StrategyKind,

    /// Number of games
    #[arg(long, short = 'n', default_value_t = 1000)]
    runs: usize,

    /// Master seed (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop each game after this many placements
    #[arg(long)]
    max_moves: Option<u32>,

    /// Worker threads (0 = one per core)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Print the statistics as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    ensure!(cli.runs > 0, "--runs must be positive");

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("failed to configure the worker pool")?;
    }

    let config = SimConfig {
        strategy: cli.strategy,
        runs: cli.runs,
        seed: cli.seed,
        max_moves: cli.max_moves,
    };
    log::info!(
        "running {} simulations with the {} strategy on {} threads",
        config.runs,
        config.strategy,
        rayon::current_num_threads()
    );

    let start = Instant::now();
    let scores = simulate_with_progress(&config, |done, total| {
        log::info!("progress: {:>3}% ({}/{})", done * 100 / total, done, total);
    });
    let elapsed = start.elapsed();
    let stats = Statistics::compute(&scores);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let secs = elapsed.as_secs_f64();
    let rate = if secs > 0.0 { config.runs as f64 / secs } else { 0.0 };
    print_table(&config, elapsed.as_millis(), rate, &stats);
    Ok(())
}

fn print_table(config: &SimConfig, millis: u128, rate: f64, stats: &Statistics) {
    let rule = "=".repeat(43);
    let thin = "-".repeat(43);
    println!("{rule}");
    println!("{:^43}", "SIMULATION RESULTS");
    println!("{rule}");
    println!("  Strategy:    {}", config.strategy);
    println!("  Runs:        {}", config.runs);
    println!("  Time:        {millis} ms");
    println!("  Games/sec:   {rate:.2}");
    println!("{thin}");
    println!("  P0   (min):  {:>10.2}", stats.min);
    println!("  P10:         {:>10.2}", stats.p10);
    println!("  P25:         {:>10.2}", stats.p25);
    println!("  P50  (med):  {:>10.2}", stats.median);
    println!("  P75:         {:>10.2}", stats.p75);
    println!("  P90:         {:>10.2}", stats.p90);
    println!("  P100 (max):  {:>10.2}", stats.max);
    println!("{thin}");
    println!("  Mean:        {:>10.2}", stats.mean);
    println!("  Std Dev:     {:>10.2}", stats.stddev);
    println!("{rule}");
}
