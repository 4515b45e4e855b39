use crate::game_state::board_location::BoardLocation;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_shared::walk_rays;

pub fn generate_bishop_moves(
    board: &BoardState,
    from: BoardLocation,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    walk_rays(board, from, &BISHOP_DIRECTIONS, color.opposite(), out);
}
