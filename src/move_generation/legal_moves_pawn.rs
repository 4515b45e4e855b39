//! Pawn move generation.
//!
//! One step forward onto an empty cell, two steps from the starting row when
//! both cells ahead are empty, and forward-diagonal captures of opposing
//! pieces. No en passant and no promotion.

use crate::game_state::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_shared::{build_move, classify_destination, Destination};

pub fn generate_pawn_moves(
    board: &BoardState,
    from: BoardLocation,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    let opponent = color.opposite();
    let forward = color.forward();
    let is_empty = |loc: Option<BoardLocation>| loc.is_some_and(|l| board.piece_at(l).is_none());

    let one_ahead = from.offset(forward, 0);
    if is_empty(one_ahead) {
        out.extend(one_ahead.and_then(|to| build_move(board, from, to)));
    }

    for d_col in [-1, 1] {
        let diagonal = from.offset(forward, d_col);
        if classify_destination(board, diagonal, opponent) == Destination::Capture {
            out.extend(diagonal.and_then(|to| build_move(board, from, to)));
        }
    }

    if from.row == color.pawn_start_row() {
        let two_ahead = from.offset(2 * forward, 0);
        if is_empty(one_ahead) && is_empty(two_ahead) {
            out.extend(two_ahead.and_then(|to| build_move(board, from, to)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    fn destinations(board: &BoardState, from: BoardLocation) -> Vec<BoardLocation> {
        let mut out = Vec::new();
        let color = board.piece_at(from).map(|p| p.color).unwrap();
        generate_pawn_moves(board, from, color, &mut out);
        out.into_iter().map(|m| m.to).collect()
    }

    #[test]
    fn white_pawn_on_start_row_has_single_and_double_step() {
        let board = BoardState::new_game(Color::White);
        let mut dest = destinations(&board, BoardLocation::new(6, 3));
        dest.sort();
        assert_eq!(dest, vec![BoardLocation::new(4, 3), BoardLocation::new(5, 3)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = BoardState::new_game(Color::White);
        board.place_piece(BoardLocation::new(5, 3), Some(Piece::black(PieceKind::Knight)));
        assert!(destinations(&board, BoardLocation::new(6, 3)).is_empty());
        // The neighbouring pawn sees the knight diagonally.
        assert!(destinations(&board, BoardLocation::new(6, 2)).contains(&BoardLocation::new(5, 3)));
    }

    #[test]
    fn pawn_captures_only_opposing_pieces_diagonally() {
        let mut board = BoardState::new_empty(Color::White);
        let from = BoardLocation::new(4, 4);
        board.place_piece(from, Some(Piece::black(PieceKind::Pawn)));
        board.place_piece(BoardLocation::new(5, 3), Some(Piece::white(PieceKind::Bishop)));
        board.place_piece(BoardLocation::new(5, 5), Some(Piece::black(PieceKind::Rook)));

        let mut dest = destinations(&board, from);
        dest.sort();
        assert_eq!(dest, vec![BoardLocation::new(5, 3), BoardLocation::new(5, 4)]);
    }

    #[test]
    fn pawn_on_far_edge_has_no_moves() {
        let mut board = BoardState::new_empty(Color::White);
        let from = BoardLocation::new(0, 0);
        board.place_piece(from, Some(Piece::white(PieceKind::Pawn)));
        assert!(destinations(&board, from).is_empty());
    }
}
