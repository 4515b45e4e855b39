//! King move generation.
//!
//! The row above and the row below are scanned across columns `col-1..=col+1`,
//! then the single cells to the left and right on the same row. Each candidate
//! is legal when empty or held by an opposing piece. No castling.

use crate::game_state::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_shared::push_step;

pub fn generate_king_moves(
    board: &BoardState,
    from: BoardLocation,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    let opponent = color.opposite();
    for d_row in [-1, 1] {
        for d_col in -1..=1 {
            push_step(board, from, d_row, d_col, opponent, out);
        }
    }
    push_step(board, from, 0, -1, opponent, out);
    push_step(board, from, 0, 1, opponent, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn centred_king_covers_neighbourhood() {
        let mut board = BoardState::new_empty(Color::White);
        let from = BoardLocation::new(3, 3);
        board.place_piece(from, Some(Piece::white(PieceKind::King)));

        let mut out = Vec::new();
        generate_king_moves(&board, from, Color::White, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn edge_king_stays_on_board() {
        let mut board = BoardState::new_empty(Color::White);
        let from = BoardLocation::new(7, 7);
        board.place_piece(from, Some(Piece::white(PieceKind::King)));
        board.place_piece(BoardLocation::new(6, 7), Some(Piece::black(PieceKind::Pawn)));
        board.place_piece(BoardLocation::new(7, 6), Some(Piece::white(PieceKind::Rook)));

        let mut out = Vec::new();
        generate_king_moves(&board, from, Color::White, &mut out);
        let mut dest: Vec<_> = out.iter().map(|m| m.to).collect();
        dest.sort();
        assert_eq!(dest, vec![BoardLocation::new(6, 6), BoardLocation::new(6, 7)]);
    }

    #[test]
    fn king_boxed_in_at_start() {
        let board = BoardState::new_game(Color::White);
        let mut out = Vec::new();
        generate_king_moves(&board, BoardLocation::new(0, 4), Color::Black, &mut out);
        assert!(out.is_empty());
    }
}
