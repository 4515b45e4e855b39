//! One human-vs-computer game: turn order, move validation, the computer's
//! replies, undo, restart, and the move log.
//!
//! White always moves first, so the side to move follows from the parity of
//! the board history. A captured king ends the game, and so does a side to
//! move without candidate moves; afterwards only `restart` and `save_log` are
//! accepted.

use std::fmt;
use std::path::PathBuf;

use tracing::info;

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Color, Piece};
use crate::move_generation::move_generator::all_legal_moves;
use crate::session::game_config::GameConfig;
use crate::session::move_log::MoveLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Human,
    Computer,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Human => write!(f, "human"),
            Winner::Computer => write!(f, "computer"),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    KingCaptured(Winner),
    /// The side to move had no candidate moves.
    NoMoves(Color),
}

/// What happened on a committed ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: ChessMove,
    pub king_captured: bool,
    /// Score reported by the engine, for computer moves.
    pub score: Option<i32>,
}

pub struct GameSession {
    config: GameConfig,
    board: BoardState,
    engine: MinimaxEngine,
    log: MoveLog,
    outcome: Option<GameEnd>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let board = BoardState::new_game(config.human_color);
        Self::with_board(config, board)
    }

    /// Starts a session from a prepared position. The log starts empty.
    pub fn with_board(config: GameConfig, board: BoardState) -> Self {
        let mut engine = config.build_engine();
        engine.new_game();
        info!(
            human = %config.human_color,
            difficulty = %config.difficulty,
            depth = config.search_depth(),
            scorer = %config.scorer,
            sign_convention = %config.sign_convention,
            "new game"
        );
        let mut session = Self {
            config,
            board,
            engine,
            log: MoveLog::new(),
            outcome: None,
        };
        session.end_if_stuck();
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn outcome(&self) -> Option<GameEnd> {
        self.outcome
    }

    /// The king-capturing side, if the game ended that way.
    pub fn winner(&self) -> Option<Winner> {
        match self.outcome {
            Some(GameEnd::KingCaptured(winner)) => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn human_color(&self) -> Color {
        self.config.human_color
    }

    pub fn computer_color(&self) -> Color {
        self.config.computer_color()
    }

    pub fn side_to_move(&self) -> Color {
        if self.board.history().len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.side_to_move() == self.human_color()
    }

    /// Candidate moves of the human's piece at `from`.
    pub fn moves_from(&self, from: BoardLocation) -> ChessResult<Vec<ChessMove>> {
        self.human_piece_at(from)?;
        Ok(self.board.legal_moves(from))
    }

    pub fn submit_human_move(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
    ) -> ChessResult<MoveReport> {
        self.ensure_turn(self.human_color())?;
        let moved = self.human_piece_at(from)?;
        let mv = ChessMove::new(from, to, moved, self.board.piece_at(to));
        let king_captured = self.board.apply_checked(mv)?;
        Ok(self.commit(mv, king_captured, Winner::Human, None))
    }

    pub fn play_computer_turn(&mut self) -> ChessResult<MoveReport> {
        let color = self.computer_color();
        self.ensure_turn(color)?;
        let out = self
            .engine
            .choose_move(&mut self.board, color, &GoParams::default())?;
        let mv = out.best_move.ok_or(ChessError::NoLegalMoves(color))?;
        let king_captured = self.board.apply_move(mv);
        Ok(self.commit(mv, king_captured, Winner::Computer, out.score))
    }

    /// Takes back the last two plies, one per side.
    pub fn undo_turn(&mut self) -> ChessResult<()> {
        if self.is_over() {
            return Err(ChessError::GameOver);
        }
        if self.board.history().len() < 2 {
            return Err(ChessError::EmptyHistory);
        }
        let last = self.board.undo_move()?;
        let previous = self.board.undo_move()?;
        self.log.pop_turn();
        info!(undone = %last, also = %previous, "turn undone");
        Ok(())
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.log.clear();
        self.outcome = None;
        self.engine.new_game();
        info!(human = %self.human_color(), "game restarted");
        self.end_if_stuck();
    }

    pub fn result_text(&self) -> String {
        match self.outcome {
            Some(GameEnd::KingCaptured(Winner::Human)) => {
                format!("{} wins (human, king captured)", self.human_color())
            }
            Some(GameEnd::KingCaptured(Winner::Computer)) => {
                format!("{} wins (computer, king captured)", self.computer_color())
            }
            Some(GameEnd::NoMoves(color)) => {
                let who = if color == self.human_color() {
                    "human"
                } else {
                    "computer"
                };
                format!("{color} has no moves ({who}), game ends")
            }
            None => "in progress".to_owned(),
        }
    }

    pub fn save_log(&self) -> ChessResult<PathBuf> {
        self.log.save_to(&self.config.log_dir, &self.result_text())
    }

    fn ensure_turn(&self, color: Color) -> ChessResult<()> {
        if self.is_over() {
            return Err(ChessError::GameOver);
        }
        if self.side_to_move() != color {
            return Err(ChessError::NotYourTurn);
        }
        Ok(())
    }

    fn human_piece_at(&self, loc: BoardLocation) -> ChessResult<Piece> {
        let piece = self.board.piece_at(loc).ok_or(ChessError::NoPieceAt(loc))?;
        if piece.color != self.human_color() {
            return Err(ChessError::NotYourPiece(loc));
        }
        Ok(piece)
    }

    /// Ends the game when the side to move has no candidate moves.
    fn end_if_stuck(&mut self) {
        let side = self.side_to_move();
        if self.outcome.is_none() && all_legal_moves(&self.board, side).is_empty() {
            self.outcome = Some(GameEnd::NoMoves(side));
            info!(%side, "game over, side to move has no moves");
        }
    }

    fn commit(
        &mut self,
        mv: ChessMove,
        king_captured: bool,
        mover: Winner,
        score: Option<i32>,
    ) -> MoveReport {
        self.log.push(&mv);
        info!(by = %mover, %mv, ply = self.board.history().len(), "move committed");
        if king_captured {
            self.outcome = Some(GameEnd::KingCaptured(mover));
            info!(winner = %mover, "game over");
        } else {
            self.end_if_stuck();
        }
        MoveReport {
            mv,
            king_captured,
            score,
        }
    }
}
