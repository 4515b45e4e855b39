//! Short move notation used by the move log.
//!
//! Piece letter, `x` on captures, then the destination square: `Pe4`, `Nxf6`.
//! Origin squares are not disambiguated.

use crate::game_state::chess_move::ChessMove;

pub fn move_to_notation(mv: &ChessMove) -> String {
    let capture = if mv.is_capture() { "x" } else { "" };
    format!("{}{}{}", mv.moved.kind.letter(), capture, mv.to.to_algebraic())
}
