//! Fixed-depth exhaustive minimax.
//!
//! Every cell of `side_to_move` is expanded, every candidate is applied,
//! scored (directly at depth 0, by recursion otherwise), and undone. The board
//! therefore always reflects the path from the root to the current node.
//!
//! The result is the full set of moves tied for the best score, not a single
//! pick, so callers break ties themselves. There is no pruning: cost grows as
//! branching factor to the power of `depth + 1`.

use std::time::Instant;

use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::{MoveGenerator, PieceRuleGenerator};
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

/// A candidate move and the score its subtree resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredMove {
    pub mv: ChessMove,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Moves applied during the search.
    pub nodes: u64,
    /// Positions scored by the evaluator.
    pub evaluations: u64,
}

/// Minimax over a move generator and a scorer.
pub struct MinimaxSearch<'a, G: MoveGenerator + ?Sized, S: BoardScorer + ?Sized> {
    generator: &'a G,
    scorer: &'a S,
    stats: SearchStats,
}

impl<'a, G: MoveGenerator + ?Sized, S: BoardScorer + ?Sized> MinimaxSearch<'a, G, S> {
    pub fn new(generator: &'a G, scorer: &'a S) -> Self {
        Self {
            generator,
            scorer,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Tied-best moves for `side_to_move`.
    ///
    /// `minimizing` selects the lowest score instead of the highest. Below the
    /// root the roles swap and the flag flips each ply. An empty result means
    /// `side_to_move` had no candidate moves.
    pub fn search(
        &mut self,
        board: &mut BoardState,
        side_to_move: Color,
        other_side: Color,
        depth: u8,
        minimizing: bool,
    ) -> ChessResult<Vec<ScoredMove>> {
        let started = Instant::now();
        let before = self.stats;
        let best = self.search_node(board, side_to_move, other_side, depth, minimizing)?;
        debug!(
            side = %side_to_move,
            depth,
            minimizing,
            nodes = self.stats.nodes - before.nodes,
            evaluations = self.stats.evaluations - before.evaluations,
            tied = best.len(),
            score = best.first().map(|s| s.score),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "minimax root finished"
        );
        Ok(best)
    }

    fn search_node(
        &mut self,
        board: &mut BoardState,
        side_to_move: Color,
        other_side: Color,
        depth: u8,
        minimizing: bool,
    ) -> ChessResult<Vec<ScoredMove>> {
        let candidates = self.generator.legal_moves_for(board, side_to_move);
        let mut scored = Vec::with_capacity(candidates.len());

        for mv in candidates {
            board.apply_move(mv);
            self.stats.nodes += 1;

            let score = if depth == 0 {
                self.evaluate(board)
            } else {
                let replies =
                    self.search_node(board, other_side, side_to_move, depth - 1, !minimizing)?;
                // All tied replies share one score. A side left without moves
                // is scored where it stands.
                match replies.first() {
                    Some(reply) => reply.score,
                    None => self.evaluate(board),
                }
            };

            board.undo_move()?;
            scored.push(ScoredMove { mv, score });
        }

        Ok(select_tied_best(scored, minimizing))
    }

    #[inline]
    fn evaluate(&mut self, board: &BoardState) -> i32 {
        self.stats.evaluations += 1;
        self.scorer.score(board)
    }
}

/// Keeps every entry whose score equals the extreme (min or max) score.
pub fn select_tied_best(scored: Vec<ScoredMove>, minimizing: bool) -> Vec<ScoredMove> {
    let extreme = if minimizing {
        scored.iter().map(|s| s.score).min()
    } else {
        scored.iter().map(|s| s.score).max()
    };
    match extreme {
        Some(best) => scored.into_iter().filter(|s| s.score == best).collect(),
        None => scored,
    }
}

/// Minimax with the default piece rules and `MaterialScorer`.
pub fn minimax(
    board: &mut BoardState,
    side_to_move: Color,
    other_side: Color,
    depth: u8,
    minimizing: bool,
) -> ChessResult<Vec<ScoredMove>> {
    MinimaxSearch::new(&PieceRuleGenerator, &MaterialScorer).search(
        board,
        side_to_move,
        other_side,
        depth,
        minimizing,
    )
}
