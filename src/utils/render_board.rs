//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (Black's back rank) is printed first, labelled rank 8, so White sits
//! at the bottom of the view.

use crate::game_state::board_location::{BoardLocation, BOARD_SIZE};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &BoardState) -> String {
    render_board_with_targets(board, &[])
}

/// Like `render_board`, with the destinations of `targets` marked: `*` on an
/// empty cell, the piece wrapped in brackets on a capture.
pub fn render_board_with_targets(board: &BoardState, targets: &[ChessMove]) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let loc = BoardLocation::new(row, col);
            let marked = targets.iter().any(|m| m.to == loc);
            match (board.piece_at(loc), marked) {
                (Some(piece), true) => {
                    out.push('[');
                    out.push(piece_to_unicode(piece));
                    out.push(']');
                }
                (Some(piece), false) => {
                    out.push(' ');
                    out.push(piece_to_unicode(piece));
                    out.push(' ');
                }
                (None, true) => out.push_str(" * "),
                (None, false) => {
                    out.push(' ');
                    out.push(empty_glyph(board.cell_shade_at(loc)));
                    out.push(' ');
                }
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

fn empty_glyph(shade: CellShade) -> char {
    match shade {
        CellShade::Light => '·',
        CellShade::Dark => ':',
    }
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
