//! Engine abstraction layer used by the game session and the match harness.
//!
//! Defines common input parameters and output payloads so different engine
//! configurations can be swapped behind a single trait.

use crate::errors::ChessResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for this call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub score: Option<i32>,
    /// Size of the tied-best set the move was drawn from.
    pub tied_moves: usize,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for `color`. The board is searched in place and is
    /// identical to its input state when this returns.
    fn choose_move(
        &mut self,
        board: &mut BoardState,
        color: Color,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}
