//! Mutable board model.
//!
//! `BoardState` owns the 8x8 grid of cells, the per-piece material table, and
//! the applied-move history. It is mutated in place by `apply_move` and
//! restored exactly by `undo_move` (see `move_generation::legal_move_apply`).

use crate::game_state::board_location::{BoardLocation, BOARD_SIZE};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

/// One square of the board: a fixed background shade and an optional occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    shade: CellShade,
    occupant: Option<Piece>,
}

impl Cell {
    #[inline]
    pub const fn shade(&self) -> CellShade {
        self.shade
    }

    #[inline]
    pub const fn occupant(&self) -> Option<Piece> {
        self.occupant
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    // [row][col]
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    // Indexed by `Piece::index()`.
    material: [u8; Piece::COUNT],
    history: Vec<ChessMove>,
    human_color: Color,
}

impl BoardState {
    /// Board with no pieces and zero material. Use `place_piece` to set up a
    /// custom position.
    pub fn new_empty(human_color: Color) -> Self {
        let mut cells = [[Cell {
            shade: CellShade::Light,
            occupant: None,
        }; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for loc in BoardLocation::all() {
            cells[loc.row as usize][loc.col as usize].shade = CellShade::for_cell(loc.row, loc.col);
        }

        Self {
            cells,
            material: [0; Piece::COUNT],
            history: Vec::new(),
            human_color,
        }
    }

    /// Standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn new_game(human_color: Color) -> Self {
        let mut board = Self::new_empty(human_color);
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.place_piece(BoardLocation::new(0, col), Some(Piece::black(*kind)));
            board.place_piece(BoardLocation::new(1, col), Some(Piece::black(PieceKind::Pawn)));
            board.place_piece(BoardLocation::new(6, col), Some(Piece::white(PieceKind::Pawn)));
            board.place_piece(BoardLocation::new(7, col), Some(Piece::white(*kind)));
        }
        board
    }

    /// Back to the starting layout, keeping the human/computer assignment.
    pub fn reset(&mut self) {
        *self = Self::new_game(self.human_color);
    }

    #[inline]
    pub const fn human_color(&self) -> Color {
        self.human_color
    }

    #[inline]
    pub const fn computer_color(&self) -> Color {
        self.human_color.opposite()
    }

    #[inline]
    pub fn cell(&self, loc: BoardLocation) -> &Cell {
        &self.cells[loc.row as usize][loc.col as usize]
    }

    #[inline]
    pub fn piece_at(&self, loc: BoardLocation) -> Option<Piece> {
        self.cell(loc).occupant
    }

    #[inline]
    pub fn cell_shade_at(&self, loc: BoardLocation) -> CellShade {
        self.cell(loc).shade
    }

    #[inline]
    pub fn effective_color_at(&self, loc: BoardLocation) -> EffectiveColor {
        let cell = self.cell(loc);
        match cell.occupant {
            Some(piece) => EffectiveColor::Piece(piece.color),
            None => EffectiveColor::Background(cell.shade),
        }
    }

    #[inline]
    pub fn color_at(&self, loc: BoardLocation) -> Option<Color> {
        self.piece_at(loc).map(|p| p.color)
    }

    /// Remaining count of `piece` still on the board.
    #[inline]
    pub fn material_count(&self, piece: Piece) -> u8 {
        self.material[piece.index()]
    }

    #[inline]
    pub fn material(&self) -> &[u8; Piece::COUNT] {
        &self.material
    }

    /// Applied moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[ChessMove] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last()
    }

    /// Occupied cells of `color` in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        BoardLocation::all().filter_map(move |loc| match self.piece_at(loc) {
            Some(piece) if piece.color == color => Some((loc, piece)),
            _ => None,
        })
    }

    /// Setup helper: puts `piece` (or nothing) on `loc` and keeps the material
    /// table equal to what is on the board. Not recorded in the history.
    pub fn place_piece(&mut self, loc: BoardLocation, piece: Option<Piece>) {
        if let Some(old) = self.piece_at(loc) {
            self.material[old.index()] -= 1;
        }
        if let Some(new) = piece {
            self.material[new.index()] += 1;
        }
        self.set_occupant(loc, piece);
    }

    // Raw cell write used by apply/undo; material is handled by the caller.
    #[inline]
    pub(crate) fn set_occupant(&mut self, loc: BoardLocation, piece: Option<Piece>) {
        self.cells[loc.row as usize][loc.col as usize].occupant = piece;
    }

    #[inline]
    pub(crate) fn material_mut(&mut self, piece: Piece) -> &mut u8 {
        &mut self.material[piece.index()]
    }

    #[inline]
    pub(crate) fn push_history(&mut self, mv: ChessMove) {
        self.history.push(mv);
    }

    #[inline]
    pub(crate) fn pop_history(&mut self) -> Option<ChessMove> {
        self.history.pop()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_game(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_standard_material_for_both_sides() {
        let board = BoardState::new_game(Color::White);
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                assert_eq!(
                    board.material_count(Piece::new(color, kind)),
                    kind.starting_count(),
                    "{color:?} {kind:?}"
                );
            }
        }
        assert!(board.history().is_empty());
    }

    #[test]
    fn new_game_layout_puts_black_on_row_zero() {
        let board = BoardState::new_game(Color::White);
        assert_eq!(
            board.piece_at(BoardLocation::new(0, 4)),
            Some(Piece::black(PieceKind::King))
        );
        assert_eq!(
            board.piece_at(BoardLocation::new(7, 3)),
            Some(Piece::white(PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(BoardLocation::new(6, 0)),
            Some(Piece::white(PieceKind::Pawn))
        );
        assert_eq!(board.piece_at(BoardLocation::new(4, 4)), None);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn effective_color_falls_back_to_background() {
        let board = BoardState::new_game(Color::White);
        assert_eq!(
            board.effective_color_at(BoardLocation::new(0, 0)),
            EffectiveColor::Piece(Color::Black)
        );
        assert_eq!(
            board.effective_color_at(BoardLocation::new(3, 0)),
            EffectiveColor::Background(CellShade::Dark)
        );
        assert_eq!(board.cell_shade_at(BoardLocation::new(0, 0)), CellShade::Light);
    }

    #[test]
    fn place_piece_tracks_material_on_replace() {
        let mut board = BoardState::new_empty(Color::White);
        let loc = BoardLocation::new(3, 3);
        board.place_piece(loc, Some(Piece::white(PieceKind::Rook)));
        board.place_piece(loc, Some(Piece::black(PieceKind::Knight)));
        assert_eq!(board.material_count(Piece::white(PieceKind::Rook)), 0);
        assert_eq!(board.material_count(Piece::black(PieceKind::Knight)), 1);
        board.place_piece(loc, None);
        assert!(board.material().iter().all(|c| *c == 0));
    }

    #[test]
    fn reset_keeps_color_assignment() {
        let mut board = BoardState::new_game(Color::Black);
        board.place_piece(BoardLocation::new(6, 0), None);
        board.reset();
        assert_eq!(board.human_color(), Color::Black);
        assert_eq!(board.computer_color(), Color::White);
        assert_eq!(board, BoardState::new_game(Color::Black));
    }
}
