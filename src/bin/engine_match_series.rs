//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --games 20 --depth1 1 --scorer2 legacy`

use clap::Parser;
use tracing_subscriber::EnvFilter;

use walnut_chess::engines::engine_minimax::{MinimaxEngine, SignConvention};
use walnut_chess::engines::engine_trait::Engine;
use walnut_chess::errors::ChessResult;
use walnut_chess::search::board_scoring::ScorerKind;
use walnut_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Parser)]
#[command(name = "engine_match_series", about = "Play minimax engines against each other")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u16,
    #[arg(long, default_value_t = 1234)]
    seed: u64,
    #[arg(long, default_value_t = 200)]
    max_plies: u16,
    #[arg(long, default_value_t = 1)]
    depth1: u8,
    #[arg(long, default_value_t = 1)]
    depth2: u8,
    #[arg(long, default_value_t = ScorerKind::Material)]
    scorer1: ScorerKind,
    #[arg(long, default_value_t = ScorerKind::Material)]
    scorer2: ScorerKind,
    #[arg(long, default_value_t = SignConvention::ByColor)]
    sign_convention: SignConvention,
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (depth1, scorer1, depth2, scorer2, sign) = (
        args.depth1,
        args.scorer1,
        args.depth2,
        args.scorer2,
        args.sign_convention,
    );
    let seed = args.seed;
    let player1 = move || {
        Box::new(
            MinimaxEngine::new(depth1)
                .with_scorer(scorer1.build())
                .with_sign_convention(sign)
                .with_seed(seed ^ 0x1111),
        ) as Box<dyn Engine>
    };
    let player2 = move || {
        Box::new(
            MinimaxEngine::new(depth2)
                .with_scorer(scorer2.build())
                .with_sign_convention(sign)
                .with_seed(seed ^ 0x2222),
        ) as Box<dyn Engine>
    };

    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: args.games,
            base_seed: seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
