//! Crate root module declarations for the Ember Chess engine.
//!
//! Exposes the board model, move generation, search, engines, and utility
//! helpers so the binaries, benches, and tests can import stable module
//! paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod greedy;
    pub mod minimax;
    pub mod move_finder;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_search;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_log;
    pub mod long_algebraic;
    pub mod render_game_state;
}
