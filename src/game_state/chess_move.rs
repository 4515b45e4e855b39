//! Immutable move record.
//!
//! A move carries both endpoints, the piece that moved, and the piece that was
//! standing on the destination. That is everything `undo_move` needs to put the
//! board back, so no separate undo record is kept.

use std::fmt;

use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::Piece;
use crate::utils::move_notation::move_to_notation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

impl ChessMove {
    #[inline]
    pub const fn new(
        from: BoardLocation,
        to: BoardLocation,
        moved: Piece,
        captured: Option<Piece>,
    ) -> Self {
        Self {
            from,
            to,
            moved,
            captured,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn captures_king(&self) -> bool {
        self.captured.is_some_and(Piece::is_king)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", move_to_notation(self))
    }
}
