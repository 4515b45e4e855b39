//! In-place move execution and exact undo.
//!
//! `apply_move` trusts its caller: moves are expected to come from
//! `legal_moves` or from the engine. `apply_checked` is the validating entry
//! point for moves that originate outside the engine.

use tracing::trace;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::move_generation::move_generator::legal_moves;

impl BoardState {
    /// Moves the piece, clears the origin, records the move, and removes the
    /// captured piece from the material table.
    ///
    /// Returns `true` iff a king (of either color) was captured.
    pub fn apply_move(&mut self, mv: ChessMove) -> bool {
        self.set_occupant(mv.to, Some(mv.moved));
        self.set_occupant(mv.from, None);
        self.push_history(mv);
        if let Some(captured) = mv.captured {
            let count = self.material_mut(captured);
            debug_assert!(*count > 0, "captured {captured:?} with zero material");
            *count = count.saturating_sub(1);
        }
        trace!(%mv, from = %mv.from, to = %mv.to, "apply");
        mv.captures_king()
    }

    /// Like `apply_move`, but rejects moves that are not among the current
    /// legal moves of `mv.from`. The board is untouched on error.
    pub fn apply_checked(&mut self, mv: ChessMove) -> ChessResult<bool> {
        if !legal_moves(self, mv.from).contains(&mv) {
            return Err(ChessError::IllegalMove(mv));
        }
        Ok(self.apply_move(mv))
    }

    /// Reverts the most recent move and returns it.
    pub fn undo_move(&mut self) -> ChessResult<ChessMove> {
        let mv = self.pop_history().ok_or(ChessError::EmptyHistory)?;
        self.set_occupant(mv.from, Some(mv.moved));
        self.set_occupant(mv.to, mv.captured);
        if let Some(captured) = mv.captured {
            *self.material_mut(captured) += 1;
        }
        trace!(%mv, "undo");
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_location::BoardLocation;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::move_generation::move_generator::all_legal_moves;

    fn capture_position() -> BoardState {
        let mut board = BoardState::new_empty(Color::White);
        board.place_piece(BoardLocation::new(4, 4), Some(Piece::white(PieceKind::Queen)));
        board.place_piece(BoardLocation::new(1, 4), Some(Piece::black(PieceKind::King)));
        board.place_piece(BoardLocation::new(4, 1), Some(Piece::black(PieceKind::Pawn)));
        board.place_piece(BoardLocation::new(7, 4), Some(Piece::white(PieceKind::King)));
        board
    }

    #[test]
    fn apply_then_undo_restores_every_start_move() {
        let mut board = BoardState::new_game(Color::White);
        let before = board.clone();
        for color in Color::ALL {
            for mv in all_legal_moves(&board.clone(), color) {
                board.apply_move(mv);
                assert_eq!(board.history().len(), 1);
                assert_eq!(board.undo_move().unwrap(), mv);
                assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn capture_round_trip_restores_material() {
        let mut board = capture_position();
        let before = board.clone();
        let pawn = Piece::black(PieceKind::Pawn);
        let mv = board
            .legal_moves(BoardLocation::new(4, 4))
            .into_iter()
            .find(|m| m.captured == Some(pawn))
            .unwrap();

        assert!(!board.apply_move(mv));
        assert_eq!(board.material_count(pawn), 0);
        assert_eq!(board.piece_at(mv.to), Some(Piece::white(PieceKind::Queen)));
        assert_eq!(board.piece_at(mv.from), None);

        board.undo_move().unwrap();
        assert_eq!(board.material_count(pawn), 1);
        assert_eq!(board, before);
    }

    #[test]
    fn king_capture_reports_true_for_either_color() {
        let mut board = capture_position();
        let take_black_king = board
            .legal_moves(BoardLocation::new(4, 4))
            .into_iter()
            .find(|m| m.to == BoardLocation::new(1, 4))
            .unwrap();
        assert!(board.apply_move(take_black_king));
        board.undo_move().unwrap();

        board.place_piece(BoardLocation::new(6, 3), Some(Piece::black(PieceKind::Pawn)));
        let take_white_king = board
            .legal_moves(BoardLocation::new(6, 3))
            .into_iter()
            .find(|m| m.to == BoardLocation::new(7, 4))
            .unwrap();
        assert!(board.apply_move(take_white_king));
    }

    #[test]
    fn undo_on_empty_history_is_an_error() {
        let mut board = BoardState::new_game(Color::White);
        assert!(matches!(board.undo_move(), Err(ChessError::EmptyHistory)));
        assert_eq!(board, BoardState::new_game(Color::White));
    }

    #[test]
    fn apply_checked_rejects_without_mutation() {
        let mut board = BoardState::new_game(Color::White);
        let bogus = ChessMove::new(
            BoardLocation::new(6, 3),
            BoardLocation::new(3, 3),
            Piece::white(PieceKind::Pawn),
            None,
        );
        assert!(matches!(
            board.apply_checked(bogus),
            Err(ChessError::IllegalMove(_))
        ));
        assert_eq!(board, BoardState::new_game(Color::White));

        let push = ChessMove::new(
            BoardLocation::new(6, 3),
            BoardLocation::new(4, 3),
            Piece::white(PieceKind::Pawn),
            None,
        );
        assert!(!board.apply_checked(push).unwrap());
        assert_eq!(board.history(), &[push]);
    }

    #[test]
    fn history_unwinds_in_reverse_order() {
        let mut board = BoardState::new_game(Color::White);
        let first = board.legal_moves(BoardLocation::new(6, 4))[0];
        board.apply_move(first);
        let second = board.legal_moves(BoardLocation::new(1, 4))[0];
        board.apply_move(second);

        assert_eq!(board.undo_move().unwrap(), second);
        assert_eq!(board.undo_move().unwrap(), first);
        assert_eq!(board, BoardState::new_game(Color::White));
    }
}
