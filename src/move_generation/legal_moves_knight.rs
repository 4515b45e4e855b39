use crate::game_state::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_shared::push_step;

pub fn generate_knight_moves(
    board: &BoardState,
    from: BoardLocation,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        push_step(board, from, d_row, d_col, color.opposite(), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn black_knight_from_start_has_two_moves() {
        let board = BoardState::new_game(Color::White);
        let mut out = Vec::new();
        generate_knight_moves(&board, BoardLocation::new(0, 1), Color::Black, &mut out);
        let mut dest: Vec<_> = out.iter().map(|m| m.to).collect();
        dest.sort();
        assert_eq!(dest, vec![BoardLocation::new(2, 0), BoardLocation::new(2, 2)]);
        assert!(out.iter().all(|m| m.captured.is_none()));
    }

    #[test]
    fn centred_knight_reaches_eight_cells_and_captures() {
        let mut board = BoardState::new_empty(Color::White);
        let from = BoardLocation::new(4, 4);
        board.place_piece(from, Some(Piece::white(PieceKind::Knight)));
        board.place_piece(BoardLocation::new(2, 3), Some(Piece::black(PieceKind::Queen)));
        board.place_piece(BoardLocation::new(2, 5), Some(Piece::white(PieceKind::Pawn)));

        let mut out = Vec::new();
        generate_knight_moves(&board, from, Color::White, &mut out);
        assert_eq!(out.len(), 7);
        let capture = out.iter().find(|m| m.to == BoardLocation::new(2, 3)).unwrap();
        assert_eq!(capture.captured, Some(Piece::black(PieceKind::Queen)));
    }
}
