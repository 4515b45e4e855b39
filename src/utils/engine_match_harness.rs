//! Minimal head-to-head engine match harness for local testing.
//!
//! This module runs two `Engine` implementations against each other with an
//! optional seeded random opening prefix. A game ends when a king is
//! captured, when the side to move has no candidate moves, or at the ply cap.

use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinKingCapture,
    BlackWinKingCapture,
    /// The side to move had no candidate moves.
    NoMoves(Color),
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinKingCapture { player: PlayerId, color: Color },
    PlayerStuck { player: PlayerId, color: Color },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: BoardState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the starting layout.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_board(
        BoardState::new_game(Color::White),
        Color::White,
        engine_white,
        engine_black,
        Some(seed),
        config,
    )
}

/// Play a match from a caller-provided position. With `opening_seed` set, a
/// random prefix of `opening_min_plies..=opening_max_plies` plies is played
/// first.
pub fn play_engine_match_from_board(
    mut board: BoardState,
    mut side_to_move: Color,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    opening_seed: Option<u64>,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_board: BoardState::new_empty(board.human_color()),
        opening_moves: Vec::new(),
        played_moves: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    if let Some(seed) = opening_seed {
        let (opening, king_taken_by) = apply_seeded_random_opening(
            &mut board,
            &mut side_to_move,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        );
        result.opening_moves = opening;
        if let Some(winner) = king_taken_by {
            result.outcome = king_capture_outcome(winner);
            result.final_board = board;
            return Ok(result);
        }
    }

    for _ in 0..config.max_plies {
        if all_legal_moves(&board, side_to_move).is_empty() {
            result.outcome = MatchOutcome::NoMoves(side_to_move);
            result.final_board = board;
            return Ok(result);
        }

        let started = Instant::now();
        let out = match side_to_move {
            Color::White => engine_white.choose_move(&mut board, side_to_move, &config.go_params)?,
            Color::Black => engine_black.choose_move(&mut board, side_to_move, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match side_to_move {
            Color::White => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out
            .best_move
            .ok_or(ChessError::NoLegalMoves(side_to_move))?;
        result.played_moves.push(chosen.to_string());
        if board.apply_checked(chosen)? {
            result.outcome = king_capture_outcome(side_to_move);
            result.final_board = board;
            return Ok(result);
        }
        side_to_move = side_to_move.opposite();
    }

    result.final_board = board;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        info!(
            game = i + 1,
            of = config.games,
            seed,
            white = if player1_is_white { "player1" } else { "player2" },
            "series game starting"
        );

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let player_for = |color: Color| {
            if (color == Color::White) == player1_is_white {
                PlayerId::Player1
            } else {
                PlayerId::Player2
            }
        };

        let mapped = match result.outcome {
            MatchOutcome::WhiteWinKingCapture | MatchOutcome::BlackWinKingCapture => {
                let color = if result.outcome == MatchOutcome::WhiteWinKingCapture {
                    Color::White
                } else {
                    Color::Black
                };
                let player = player_for(color);
                match player {
                    PlayerId::Player1 => stats.player1_wins += 1,
                    PlayerId::Player2 => stats.player2_wins += 1,
                }
                SeriesOutcome::PlayerWinKingCapture { player, color }
            }
            MatchOutcome::NoMoves(color) => {
                stats.draws += 1;
                SeriesOutcome::PlayerStuck {
                    player: player_for(color),
                    color,
                }
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            result = ?mapped,
            p1_wins = stats.player1_wins,
            p2_wins = stats.player2_wins,
            draws = stats.draws,
            "series game finished"
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

#[inline]
fn king_capture_outcome(winner: Color) -> MatchOutcome {
    match winner {
        Color::White => MatchOutcome::WhiteWinKingCapture,
        Color::Black => MatchOutcome::BlackWinKingCapture,
    }
}

/// Plays uniformly random plies. Returns the played moves and, if a king fell
/// during the prefix, the color that took it.
fn apply_seeded_random_opening(
    board: &mut BoardState,
    side_to_move: &mut Color,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> (Vec<String>, Option<Color>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let candidates = all_legal_moves(board, *side_to_move);
        let Some(&chosen) = candidates.choose(&mut rng) else {
            break;
        };

        opening.push(chosen.to_string());
        let mover = *side_to_move;
        *side_to_move = side_to_move.opposite();
        if board.apply_move(chosen) {
            return (opening, Some(mover));
        }
    }

    debug!(plies = opening.len(), "random opening applied");
    (opening, None)
}
