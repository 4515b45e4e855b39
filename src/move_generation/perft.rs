//! Move-tree node counting.
//!
//! Walks the candidate-move tree with apply/undo, alternating colors each ply,
//! and counts leaves along with capture statistics. Handy for checking the
//! generators against known counts and for benchmarking apply/undo.

use crate::errors::ChessResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::{MoveGenerator, PieceRuleGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub king_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.king_captures += rhs.king_captures;
    }
}

pub fn perft(board: &mut BoardState, side_to_move: Color, depth: u8) -> ChessResult<PerftCounts> {
    perft_with(&PieceRuleGenerator, board, side_to_move, depth)
}

pub fn perft_with<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &mut BoardState,
    side_to_move: Color,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.legal_moves_for(board, side_to_move) {
        let king_taken = board.apply_move(mv);
        if depth == 1 {
            total.merge(PerftCounts {
                nodes: 1,
                captures: usize::from(mv.is_capture()),
                king_captures: usize::from(king_taken),
            });
        } else {
            total.merge(perft_with(generator, board, side_to_move.opposite(), depth - 1)?);
        }
        board.undo_move()?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut board = BoardState::new_game(Color::White);
        let counts = perft(&mut board, Color::White, 0).unwrap();
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_from_start_position() {
        let mut board = BoardState::new_game(Color::White);
        assert_eq!(perft(&mut board, Color::White, 1).unwrap().nodes, 20);
        assert_eq!(perft(&mut board, Color::White, 2).unwrap().nodes, 400);
        assert_eq!(board, BoardState::new_game(Color::White));
    }

    #[test]
    fn perft_depth_three_sees_first_captures() {
        let mut board = BoardState::new_game(Color::White);
        let counts = perft(&mut board, Color::White, 3).unwrap();
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.king_captures, 0);
    }
}
