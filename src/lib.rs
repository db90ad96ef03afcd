//! Crate root module declarations for the pawns-only chess game.
//!
//! Exposes the rules engine (board state, move generation, status and the
//! turn controller), the console front-end, engines and notation helpers so
//! the binary, tests and benchmarks can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_controller;
    pub mod game_state;
    pub mod game_status;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_moves_pawn;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod console {
    pub mod console_top;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
}
