use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;

pub const BOARD_SIZE: u8 = 8;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A cell coordinate. Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardLocation {
    pub row: u8,
    pub col: u8,
}

impl BoardLocation {
    /// Builds a location the caller already knows is on the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i16, col: i16) -> Option<Self> {
        let size = i16::from(BOARD_SIZE);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Shifts the location by `(d_row, d_col)`, or `None` when the target is
    /// off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(
            i16::from(self.row) + i16::from(d_row),
            i16::from(self.col) + i16::from(d_col),
        )
    }

    /// Row-major iteration over all 64 cells.
    pub fn all() -> impl Iterator<Item = BoardLocation> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| BoardLocation::new(row, col)))
    }

    /// Parses squares such as `e2`. Column `a` is col 0, rank `8` is row 0.
    pub fn from_algebraic(text: &str) -> Result<Self, ChessError> {
        let mut chars = text.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessError::InvalidSquare(text.to_owned()));
        };
        let col = FILES
            .iter()
            .position(|f| *f == file.to_ascii_lowercase())
            .ok_or_else(|| ChessError::InvalidSquare(text.to_owned()))?;
        let rank = rank
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or_else(|| ChessError::InvalidSquare(text.to_owned()))?;
        Ok(Self::new((8 - rank) as u8, col as u8))
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", FILES[self.col as usize], 8 - self.row)
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for BoardLocation {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}
