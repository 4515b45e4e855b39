//! Crate root module declarations for the Walnut Chess engine.
//!
//! This file exposes the top-level subsystems (board state, move generation,
//! search, engines, the game session, and utility helpers) so binaries,
//! benches, and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_location;
    pub mod board_state;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_config;
    pub mod game_session;
    pub mod move_log;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod move_notation;
    pub mod render_board;
}
