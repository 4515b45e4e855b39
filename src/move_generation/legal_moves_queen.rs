use crate::game_state::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Union of the rook and bishop rays from the same origin.
pub fn generate_queen_moves(
    board: &BoardState,
    from: BoardLocation,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_rook_moves(board, from, color, out);
    generate_bishop_moves(board, from, color, out);
}
