//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays independent of the heuristic by delegating static scoring to
//! `BoardScorer`. Scores are White-positive: above zero favours White, below
//! zero favours Black, zero is materially balanced.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score from White's point of view.
    fn score(&self, board: &BoardState) -> i32;
}

/// `white_count - black_count` for one piece kind.
#[inline]
pub fn material_difference(board: &BoardState, kind: PieceKind) -> i32 {
    i32::from(board.material_count(Piece::white(kind)))
        - i32::from(board.material_count(Piece::black(kind)))
}

/// Weighted material difference per kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_weight(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::King => 200,
            PieceKind::Queen => 50,
            PieceKind::Rook => 5,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 3,
            PieceKind::Pawn => 1,
        }
    }

    /// Contribution of a single piece kind to the total score.
    #[inline]
    pub fn term(board: &BoardState, kind: PieceKind) -> i32 {
        Self::piece_weight(kind) * material_difference(board, kind)
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &BoardState) -> i32 {
        PieceKind::ALL
            .into_iter()
            .map(|kind| Self::term(board, kind))
            .sum()
    }
}

/// The historical formula, kept verbatim for comparison games: the queen slot
/// repeats the king difference and the bishop difference is added unweighted
/// next to a constant 3. The start position scores 3, not 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyMaterialScorer;

impl BoardScorer for LegacyMaterialScorer {
    fn score(&self, board: &BoardState) -> i32 {
        let king = material_difference(board, PieceKind::King);
        let queen_slot = material_difference(board, PieceKind::King);
        let rook = material_difference(board, PieceKind::Rook);
        let bishop = material_difference(board, PieceKind::Bishop);
        let knight = material_difference(board, PieceKind::Knight);
        let pawn = material_difference(board, PieceKind::Pawn);

        200 * king + 50 * queen_slot + 5 * rook + 3 + bishop + 3 * knight + pawn
    }
}

/// Scores with the default `MaterialScorer`.
#[inline]
pub fn evaluate(board: &BoardState) -> i32 {
    MaterialScorer.score(board)
}

/// Configuration-level choice of scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    #[default]
    Material,
    Legacy,
}

impl ScorerKind {
    pub fn build(self) -> Box<dyn BoardScorer> {
        match self {
            ScorerKind::Material => Box::new(MaterialScorer),
            ScorerKind::Legacy => Box::new(LegacyMaterialScorer),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorerKind::Material => write!(f, "material"),
            ScorerKind::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for ScorerKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "material" => Ok(ScorerKind::Material),
            "legacy" => Ok(ScorerKind::Legacy),
            _ => Err(ChessError::InvalidOption(format!("unknown scorer '{s}'"))),
        }
    }
}
