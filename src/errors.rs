//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type of the crate. Rule violations by a
//! caller (illegal move, undo with nothing to undo, acting out of turn) are
//! reported here without mutating any state; callers decide how to present
//! them.

use thiserror::Error;

use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Color;

#[derive(Debug, Error)]
pub enum ChessError {
    /// The move is not among the legal moves of its origin cell.
    #[error("illegal move {} ({} to {})", .0, .0.from, .0.to)]
    IllegalMove(ChessMove),

    /// `undo_move` was called with an empty history.
    #[error("cannot undo: no moves have been played")]
    EmptyHistory,

    /// The side has no candidate moves at all.
    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("no piece at {0}")]
    NoPieceAt(BoardLocation),

    #[error("the piece at {0} does not belong to the player")]
    NotYourPiece(BoardLocation),

    #[error("it is not the player's turn")]
    NotYourTurn,

    #[error("the game is over")]
    GameOver,

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;
