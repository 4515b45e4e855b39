//! Settings for one human-vs-computer game.

use std::path::PathBuf;

use crate::engines::engine_minimax::{MinimaxEngine, SignConvention};
use crate::game_state::chess_rules::Difficulty;
use crate::game_state::chess_types::Color;
use crate::search::board_scoring::ScorerKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub human_color: Color,
    pub difficulty: Difficulty,
    /// Search depth that replaces the difficulty's depth when set.
    pub depth_override: Option<u8>,
    pub scorer: ScorerKind,
    pub sign_convention: SignConvention,
    /// Fixed seed for the engine's tie-breaking. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub log_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_color: Color::White,
            difficulty: Difficulty::Easy,
            depth_override: None,
            scorer: ScorerKind::Material,
            sign_convention: SignConvention::ByColor,
            seed: None,
            log_dir: PathBuf::from("."),
        }
    }
}

impl GameConfig {
    #[inline]
    pub fn search_depth(&self) -> u8 {
        self.depth_override.unwrap_or(self.difficulty.depth())
    }

    #[inline]
    pub fn computer_color(&self) -> Color {
        self.human_color.opposite()
    }

    pub fn build_engine(&self) -> MinimaxEngine {
        let engine = MinimaxEngine::new(self.search_depth())
            .with_scorer(self.scorer.build())
            .with_sign_convention(self.sign_convention);
        match self.seed {
            Some(seed) => engine.with_seed(seed),
            None => engine,
        }
    }
}
