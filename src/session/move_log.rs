//! Running record of a game in move notation, with save-to-file support.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::errors::ChessResult;
use crate::game_state::chess_move::ChessMove;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    entries: Vec<String>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: &ChessMove) {
        self.entries.push(mv.to_string());
    }

    /// Drops the last `plies` entries (fewer if the log is shorter).
    pub fn pop_plies(&mut self, plies: usize) {
        let keep = self.entries.len().saturating_sub(plies);
        self.entries.truncate(keep);
    }

    /// Drops the last human/computer pair.
    pub fn pop_turn(&mut self) {
        self.pop_plies(2);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One line per full move: `1. Pe4 Pd5`. White always opens a line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, pair) in self.entries.chunks(2).enumerate() {
            out.push_str(&format!("{}. {}", i + 1, pair[0]));
            if let Some(black) = pair.get(1) {
                out.push(' ');
                out.push_str(black);
            }
            out.push('\n');
        }
        out
    }

    /// Writes the log under `dir` as `walnut_game_<timestamp>.log` and returns
    /// the written path. Existing files are never overwritten: a clashing
    /// name gets a `_<n>` suffix.
    pub fn save_to(&self, dir: &Path, result: &str) -> ChessResult<PathBuf> {
        let now = Local::now();
        fs::create_dir_all(dir)?;
        let stem = format!("walnut_game_{}", now.format("%Y%m%d_%H%M%S_%3f"));

        let contents = format!(
            "Walnut Chess game log\nDate: {}\nResult: {}\nPlies: {}\n\n",
            now.format("%Y-%m-%d %H:%M:%S"),
            result,
            self.entries.len()
        );
        let contents = contents + &self.render();

        let mut suffix = 0u32;
        let (path, mut file) = loop {
            let name = match suffix {
                0 => format!("{stem}.log"),
                n => format!("{stem}_{n}.log"),
            };
            let path = dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => break (path, file),
                Err(err) if err.kind() == ErrorKind::AlreadyExists => suffix += 1,
                Err(err) => return Err(err.into()),
            }
        };
        file.write_all(contents.as_bytes())?;

        info!(path = %path.display(), plies = self.entries.len(), "move log saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_location::BoardLocation;
    use crate::game_state::chess_types::{Piece, PieceKind};

    fn pawn_move(from: (u8, u8), to: (u8, u8), white: bool) -> ChessMove {
        let piece = if white {
            Piece::white(PieceKind::Pawn)
        } else {
            Piece::black(PieceKind::Pawn)
        };
        ChessMove::new(
            BoardLocation::new(from.0, from.1),
            BoardLocation::new(to.0, to.1),
            piece,
            None,
        )
    }

    fn three_ply_log() -> MoveLog {
        let mut log = MoveLog::new();
        log.push(&pawn_move((6, 4), (4, 4), true));
        log.push(&pawn_move((1, 3), (3, 3), false));
        log.push(&pawn_move((6, 3), (4, 3), true));
        log
    }

    #[test]
    fn render_pairs_moves_by_number() {
        assert_eq!(three_ply_log().render(), "1. Pe4 Pd5\n2. Pd4\n");
        assert_eq!(MoveLog::new().render(), "");
    }

    #[test]
    fn pop_turn_removes_two_entries() {
        let mut log = three_ply_log();
        log.pop_turn();
        assert_eq!(log.entries(), ["Pe4"]);
        log.pop_turn();
        assert!(log.is_empty());
    }

    #[test]
    fn save_writes_header_and_moves() {
        let dir = std::env::temp_dir().join(format!("walnut_log_test_{}", std::process::id()));
        let path = three_ply_log().save_to(&dir, "in progress").unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("walnut_game_") && name.ends_with(".log"));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Walnut Chess game log\nDate: "));
        assert!(text.contains("Result: in progress\n"));
        assert!(text.ends_with("1. Pe4 Pd5\n2. Pd4\n"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn back_to_back_saves_keep_both_files() {
        let dir = std::env::temp_dir().join(format!("walnut_log_twice_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let log = three_ply_log();
        let first = log.save_to(&dir, "in progress").unwrap();
        let second = log.save_to(&dir, "White wins").unwrap();

        assert_ne!(first, second);
        assert!(fs::read_to_string(&first).unwrap().contains("Result: in progress\n"));
        assert!(fs::read_to_string(&second).unwrap().contains("Result: White wins\n"));
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }
}
