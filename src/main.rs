use std::time::Duration;

use anyhow::{Result, ensure};
use clap::Parser;
use sumito_arena::{Arena, MatchRules};
use sumito_engine::Algorithm;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play a series of engine-vs-engine games.
#[derive(Parser)]
#[command(name = "sumito")]
#[command(about = "Push-off hex board game engine arena")]
struct Cli {
    /// Number of games; sides swap halfway.
    #[arg(long, default_value_t = 2)]
    games: u32,
    /// Algorithm that starts as Black (greedy, minimax, champion).
    #[arg(long, default_value_t = Algorithm::AlphaBetaChampion)]
    first: Algorithm,
    /// Algorithm that starts as White.
    #[arg(long, default_value_t = Algorithm::IterativeDeepeningMinimax)]
    second: Algorithm,
    /// Per-move budget for both engines in milliseconds. Without it the
    /// champion gets 5 s and the others 2 s.
    #[arg(long)]
    budget_ms: Option<u64>,
    /// Moves before a game is decided on eliminations.
    #[arg(long, default_value_t = 200)]
    max_moves: u32,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    ensure!(cli.games > 0, "--games must be at least 1");

    let rules = MatchRules {
        max_moves: cli.max_moves,
        ..MatchRules::default()
    };
    let mut arena = Arena::new().with_rules(rules);
    if let Some(ms) = cli.budget_ms {
        arena = arena.with_budget(Duration::from_millis(ms));
    }

    info!(games = cli.games, first = %cli.first, second = %cli.second, "series starting");
    let summary = arena.run_series(cli.games, cli.first, cli.second)?;

    for (index, record) in summary.records.iter().enumerate() {
        let result = match record.winning_algorithm() {
            Some(algorithm) => format!("{algorithm} wins"),
            None => "draw".to_string(),
        };
        let escalated = if record.escalated { ", escalated" } else { "" };
        println!(
            "game {}: {} (black) vs {} (white): {result} by {}, {} moves{escalated}",
            index + 1,
            record.black,
            record.white,
            record.reason,
            record.moves.len()
        );
    }
    println!("{summary}");
    Ok(())
}
