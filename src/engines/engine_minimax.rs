//! Computer opponent built on exhaustive minimax.
//!
//! The engine searches to a fixed depth, collects every move tied for the best
//! score, and draws one uniformly at random. Seeding the engine makes the draw
//! reproducible.

use std::fmt;
use std::str::FromStr;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::Difficulty;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::PieceRuleGenerator;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::MinimaxSearch;

/// How the root of the search picks between minimizing and maximizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignConvention {
    /// Minimize when playing Black, maximize when playing White. Consistent
    /// with White-positive scores for either color.
    #[default]
    ByColor,
    /// Always minimize at the root, whatever the engine's color. Only sound
    /// for a Black engine; a White engine then plays for Black's benefit.
    AlwaysMinimize,
}

impl SignConvention {
    #[inline]
    pub const fn minimizing_for(self, color: Color) -> bool {
        match self {
            SignConvention::ByColor => matches!(color, Color::Black),
            SignConvention::AlwaysMinimize => true,
        }
    }
}

impl fmt::Display for SignConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignConvention::ByColor => write!(f, "by-color"),
            SignConvention::AlwaysMinimize => write!(f, "always-minimize"),
        }
    }
}

impl FromStr for SignConvention {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "by-color" | "bycolor" => Ok(SignConvention::ByColor),
            "always-minimize" | "alwaysminimize" => Ok(SignConvention::AlwaysMinimize),
            _ => Err(ChessError::InvalidOption(format!(
                "unknown sign convention '{s}'"
            ))),
        }
    }
}

pub struct MinimaxEngine {
    depth: u8,
    scorer: Box<dyn BoardScorer>,
    sign_convention: SignConvention,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            scorer: Box::new(MaterialScorer),
            sign_convention: SignConvention::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.depth())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn BoardScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_sign_convention(mut self, sign_convention: SignConvention) -> Self {
        self.sign_convention = sign_convention;
        self
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    /// Runs minimax for `color` against its opponent and returns one of the
    /// tied-best moves at random.
    pub fn choose_move_at_depth(
        &mut self,
        board: &mut BoardState,
        color: Color,
        depth: u8,
    ) -> ChessResult<EngineOutput> {
        let minimizing = self.sign_convention.minimizing_for(color);
        let mut search = MinimaxSearch::new(&PieceRuleGenerator, self.scorer.as_ref());
        let tied = search.search(board, color, color.opposite(), depth, minimizing)?;

        let picked = tied
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChessError::NoLegalMoves(color))?;

        let stats = search.stats();
        debug!(
            %color,
            depth,
            nodes = stats.nodes,
            tied = tied.len(),
            score = picked.score,
            mv = %picked.mv,
            "engine picked move"
        );

        Ok(EngineOutput {
            best_move: Some(picked.mv),
            score: Some(picked.score),
            tied_moves: tied.len(),
            nodes: stats.nodes,
        })
    }

    /// Convenience wrapper returning only the move.
    pub fn choose(&mut self, board: &mut BoardState, color: Color) -> ChessResult<ChessMove> {
        let depth = self.depth;
        let out = self.choose_move_at_depth(board, color, depth)?;
        out.best_move.ok_or(ChessError::NoLegalMoves(color))
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Walnut Minimax"
    }

    fn new_game(&mut self) {
        info!(depth = self.depth, "minimax engine ready for a new game");
    }

    fn choose_move(
        &mut self,
        board: &mut BoardState,
        color: Color,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.depth);
        self.choose_move_at_depth(board, color, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_location::BoardLocation;
    use crate::game_state::chess_types::{Piece, PieceKind};
    use crate::search::board_scoring::LegacyMaterialScorer;

    fn rook_trade_position() -> BoardState {
        let mut board = BoardState::new_empty(Color::White);
        board.place_piece(BoardLocation::new(0, 0), Some(Piece::black(PieceKind::King)));
        board.place_piece(BoardLocation::new(2, 5), Some(Piece::black(PieceKind::Rook)));
        board.place_piece(BoardLocation::new(5, 5), Some(Piece::white(PieceKind::Rook)));
        board.place_piece(BoardLocation::new(7, 7), Some(Piece::white(PieceKind::King)));
        board
    }

    #[test]
    fn easy_engine_returns_a_legal_opening_move() {
        let mut board = BoardState::new_game(Color::White);
        let mut engine = MinimaxEngine::for_difficulty(Difficulty::Easy).with_seed(7);
        let mv = engine.choose(&mut board, Color::Black).unwrap();
        assert!(board.legal_moves(mv.from).contains(&mv));
        assert_eq!(board, BoardState::new_game(Color::White));
    }

    #[test]
    fn same_seed_same_move() {
        let mut board = BoardState::new_game(Color::White);
        let a = MinimaxEngine::new(0).with_seed(42).choose(&mut board, Color::Black).unwrap();
        let b = MinimaxEngine::new(0).with_seed(42).choose(&mut board, Color::Black).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn white_engine_by_color_captures() {
        let mut board = rook_trade_position();
        let mut engine = MinimaxEngine::new(0).with_seed(1);
        let out = engine.choose_move(&mut board, Color::White, &GoParams::default()).unwrap();
        assert_eq!(out.best_move.unwrap().captured, Some(Piece::black(PieceKind::Rook)));
        assert_eq!(out.score, Some(5));
        assert_eq!(out.tied_moves, 1);
    }

    #[test]
    fn engine_output_carries_search_stats() {
        let mut board = BoardState::new_game(Color::White);
        let mut engine = MinimaxEngine::new(1).with_seed(9);
        let out = engine.choose_move(&mut board, Color::White, &GoParams::default()).unwrap();
        let mv = out.best_move.unwrap();
        assert!(board.legal_moves(mv.from).contains(&mv));
        assert!(out.score.is_some());
        assert!(out.tied_moves >= 1);
        assert_eq!(out.nodes, 420);
    }

    #[test]
    fn always_minimize_makes_white_avoid_the_capture() {
        let mut board = rook_trade_position();
        let mut engine = MinimaxEngine::new(0)
            .with_seed(1)
            .with_sign_convention(SignConvention::AlwaysMinimize);
        let mv = engine.choose(&mut board, Color::White).unwrap();
        assert!(!mv.is_capture());
    }

    #[test]
    fn no_pieces_means_no_legal_moves() {
        let mut board = BoardState::new_empty(Color::White);
        let mut engine = MinimaxEngine::new(2);
        assert!(matches!(
            engine.choose(&mut board, Color::Black),
            Err(ChessError::NoLegalMoves(Color::Black))
        ));
    }

    #[test]
    fn go_params_depth_overrides_configured_depth() {
        let mut board = BoardState::new_game(Color::White);
        let mut engine = MinimaxEngine::new(0).with_seed(3);
        let out = engine
            .choose_move(&mut board, Color::Black, &GoParams { depth: Some(1) })
            .unwrap();
        assert_eq!(out.nodes, 420);
    }

    #[test]
    fn legacy_scorer_is_pluggable() {
        let mut board = rook_trade_position();
        let mut engine = MinimaxEngine::new(0)
            .with_seed(5)
            .with_scorer(Box::new(LegacyMaterialScorer));
        let out = engine.choose_move(&mut board, Color::Black, &GoParams::default()).unwrap();
        assert_eq!(out.best_move.unwrap().captured, Some(Piece::white(PieceKind::Rook)));
        assert_eq!(out.score, Some(3 - 5));
    }

    #[test]
    fn sign_convention_parses() {
        assert_eq!(
            "always-minimize".parse::<SignConvention>().unwrap(),
            SignConvention::AlwaysMinimize
        );
        assert!(SignConvention::ByColor.minimizing_for(Color::Black));
        assert!(!SignConvention::ByColor.minimizing_for(Color::White));
    }
}
