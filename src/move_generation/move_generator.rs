//! Candidate move generation entry points.
//!
//! Dispatch is purely a function of the piece on the origin cell. There is no
//! self-check filtering: a move that leaves the own king capturable is legal
//! here, since losing the king is how a game ends.

use crate::game_state::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Move generation contract used by search, so alternative rule sets can be
/// plugged in without touching the search code.
pub trait MoveGenerator: Send + Sync {
    /// Candidate moves for the piece on `from`; empty if the cell is empty.
    fn legal_moves_from(&self, board: &BoardState, from: BoardLocation) -> Vec<ChessMove>;

    /// Candidate moves for every piece of `color`, cells visited row-major.
    fn legal_moves_for(&self, board: &BoardState, color: Color) -> Vec<ChessMove> {
        let mut out = Vec::with_capacity(64);
        for (loc, _) in board.pieces_of(color) {
            out.extend(self.legal_moves_from(board, loc));
        }
        out
    }
}

/// The game's own piece rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceRuleGenerator;

impl MoveGenerator for PieceRuleGenerator {
    fn legal_moves_from(&self, board: &BoardState, from: BoardLocation) -> Vec<ChessMove> {
        let mut out = Vec::with_capacity(32);
        generate_moves_into(board, from, &mut out);
        out
    }

    fn legal_moves_for(&self, board: &BoardState, color: Color) -> Vec<ChessMove> {
        let mut out = Vec::with_capacity(64);
        for (loc, _) in board.pieces_of(color) {
            generate_moves_into(board, loc, &mut out);
        }
        out
    }
}

/// Appends the candidate moves of the piece on `from` to `out`.
pub fn generate_moves_into(board: &BoardState, from: BoardLocation, out: &mut Vec<ChessMove>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, out),
        PieceKind::King => generate_king_moves(board, from, piece.color, out),
    }
}

#[inline]
pub fn legal_moves(board: &BoardState, from: BoardLocation) -> Vec<ChessMove> {
    PieceRuleGenerator.legal_moves_from(board, from)
}

#[inline]
pub fn all_legal_moves(board: &BoardState, color: Color) -> Vec<ChessMove> {
    PieceRuleGenerator.legal_moves_for(board, color)
}

impl BoardState {
    /// Candidate moves from `from`, for highlighting and validation.
    #[inline]
    pub fn legal_moves(&self, from: BoardLocation) -> Vec<ChessMove> {
        legal_moves(self, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    #[test]
    fn empty_cell_yields_no_moves() {
        let board = BoardState::new_game(Color::White);
        assert!(board.legal_moves(BoardLocation::new(4, 4)).is_empty());
    }

    #[test]
    fn white_queen_pawn_pushes_from_start() {
        let board = BoardState::new_game(Color::White);
        let moves = board.legal_moves(BoardLocation::new(6, 3));
        let mut dest: Vec<_> = moves.iter().map(|m| m.to).collect();
        dest.sort();
        assert_eq!(dest, vec![BoardLocation::new(4, 3), BoardLocation::new(5, 3)]);
        assert!(moves.iter().all(|m| !m.is_capture()));
        assert!(moves
            .iter()
            .all(|m| m.moved == Piece::white(PieceKind::Pawn) && m.from == BoardLocation::new(6, 3)));
    }

    #[test]
    fn start_position_has_twenty_moves_per_side() {
        let board = BoardState::new_game(Color::White);
        assert_eq!(all_legal_moves(&board, Color::White).len(), 20);
        assert_eq!(all_legal_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn generated_move_records_captured_piece() {
        let mut board = BoardState::new_empty(Color::White);
        board.place_piece(BoardLocation::new(3, 3), Some(Piece::white(PieceKind::Rook)));
        board.place_piece(BoardLocation::new(3, 6), Some(Piece::black(PieceKind::King)));
        let capture = board
            .legal_moves(BoardLocation::new(3, 3))
            .into_iter()
            .find(|m| m.to == BoardLocation::new(3, 6))
            .unwrap();
        assert!(capture.captures_king());
    }
}
