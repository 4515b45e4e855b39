//! Core value types shared by the board, move generation, and search.
//!
//! Colors and piece kinds are small closed enums so every dispatch over them is
//! exhaustive. A colored piece packs into a single `Piece` value whose ordinal
//! (`0..12`) indexes the material table directly.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;

/// Side of a piece or player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step for this side. White starts on rows 6/7 and
    /// advances toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Color {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(ChessError::InvalidOption(format!("unknown color '{s}'"))),
        }
    }
}

/// Piece kind without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Number of pieces of this kind each side starts with.
    #[inline]
    pub const fn starting_count(self) -> u8 {
        match self {
            PieceKind::Pawn => 8,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => 2,
            PieceKind::Queen | PieceKind::King => 1,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A colored piece. Empty cells are `Option::<Piece>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const COUNT: usize = 12;

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub const fn white(kind: PieceKind) -> Self {
        Self::new(Color::White, kind)
    }

    #[inline]
    pub const fn black(kind: PieceKind) -> Self {
        Self::new(Color::Black, kind)
    }

    /// Ordinal in `0..12`, White kinds first.
    #[inline]
    pub const fn index(self) -> usize {
        self.color.index() * 6 + self.kind.index()
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    pub fn all() -> impl Iterator<Item = Piece> {
        Color::ALL
            .into_iter()
            .flat_map(|color| PieceKind::ALL.into_iter().map(move |kind| Piece::new(color, kind)))
    }
}

/// Background shade of a board cell, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellShade {
    Light,
    Dark,
}

impl CellShade {
    #[inline]
    pub const fn for_cell(row: u8, col: u8) -> Self {
        if (row + col) % 2 == 0 {
            CellShade::Light
        } else {
            CellShade::Dark
        }
    }
}

/// Color a presentation layer sees at a cell: the occupant's color when
/// occupied, otherwise the background shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectiveColor {
    Piece(Color),
    Background(CellShade),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_indices_cover_material_table() {
        let mut seen = [false; Piece::COUNT];
        for piece in Piece::all() {
            assert!(!seen[piece.index()]);
            seen[piece.index()] = true;
        }
        assert!(seen.iter().all(|x| *x));
    }

    #[test]
    fn checkerboard_corners_are_light() {
        assert_eq!(CellShade::for_cell(0, 0), CellShade::Light);
        assert_eq!(CellShade::for_cell(7, 7), CellShade::Light);
        assert_eq!(CellShade::for_cell(0, 1), CellShade::Dark);
        assert_eq!(CellShade::for_cell(1, 0), CellShade::Dark);
    }

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!("WHITE".parse::<Color>().unwrap(), Color::White);
        assert_eq!("b".parse::<Color>().unwrap(), Color::Black);
        assert!("green".parse::<Color>().is_err());
    }
}
