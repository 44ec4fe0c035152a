//! Leaf-node counting over make/undo, used to validate move generation.

use crate::game_state::game_state::GameState;

/// Number of leaf nodes `depth` plies below `game_state`. The state is
/// restored before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.get_valid_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        game_state.make_move(mv);
        nodes += perft(game_state, depth - 1);
        game_state.undo_move();
    }
    nodes
}

/// Per-root-move leaf counts, sorted by move notation.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for mv in game_state.get_valid_moves() {
        game_state.make_move(mv);
        out.push((mv.get_chess_notation(), perft(game_state, depth - 1)));
        game_state.undo_move();
    }
    out.sort();
    out
}
