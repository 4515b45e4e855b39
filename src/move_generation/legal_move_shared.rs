//! Helpers shared by the per-piece generators.
//!
//! Every candidate destination is classified the same way: empty cells are
//! open, cells holding an opposing piece are captures, anything else (own
//! piece or off the board) is blocked.

use crate::game_state::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Open,
    Capture,
    Blocked,
}

impl Destination {
    #[inline]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Destination::Open | Destination::Capture)
    }
}

#[inline]
pub fn classify_destination(
    board: &BoardState,
    target: Option<BoardLocation>,
    opponent: Color,
) -> Destination {
    let Some(target) = target else {
        return Destination::Blocked;
    };
    match board.piece_at(target) {
        None => Destination::Open,
        Some(piece) if piece.color == opponent => Destination::Capture,
        Some(_) => Destination::Blocked,
    }
}

/// Pairs the piece on `from` with whatever currently sits on `to`.
///
/// `from` must be occupied; the generators only call this after dispatching
/// on the piece found there.
#[inline]
pub fn build_move(board: &BoardState, from: BoardLocation, to: BoardLocation) -> Option<ChessMove> {
    let moved = board.piece_at(from)?;
    Some(ChessMove::new(from, to, moved, board.piece_at(to)))
}

/// Single-step jump used by knights and kings: legal onto empty or opposing cells.
pub fn push_step(
    board: &BoardState,
    from: BoardLocation,
    d_row: i8,
    d_col: i8,
    opponent: Color,
    out: &mut Vec<ChessMove>,
) {
    let target = from.offset(d_row, d_col);
    if classify_destination(board, target, opponent).is_reachable() {
        if let Some(mv) = target.and_then(|to| build_move(board, from, to)) {
            out.push(mv);
        }
    }
}

/// Ray-walk along each direction until the edge, an own piece (excluded), or
/// the first opposing piece (included).
pub fn walk_rays(
    board: &BoardState,
    from: BoardLocation,
    directions: &[(i8, i8)],
    opponent: Color,
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(d_row, d_col) {
            match classify_destination(board, Some(next), opponent) {
                Destination::Open => {
                    out.extend(build_move(board, from, next));
                    cursor = next;
                }
                Destination::Capture => {
                    out.extend(build_move(board, from, next));
                    break;
                }
                Destination::Blocked => break,
            }
        }
    }
}
