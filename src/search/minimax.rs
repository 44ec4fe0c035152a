//! Depth-limited minimax with explicit max/min branches.
//!
//! Scores are from White's point of view: White maximises, Black minimises.
//! Kept alongside negamax for comparison; the default move finder uses
//! `negamax_alpha_beta`.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{score_material, score_terminal_or_material, CHECKMATE_SCORE};

/// Returns the best move among `valid_moves` for the side given by
/// `white_moving` and its White-relative score. Leaves `game_state` as found.
pub fn minimax(
    game_state: &mut GameState,
    valid_moves: &[Move],
    depth: u8,
    white_moving: bool,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;

    if depth == 0 {
        return (None, score_material(&game_state.board));
    }
    if valid_moves.is_empty() {
        return (None, score_terminal_or_material(game_state));
    }

    let mut best_move = None;
    let mut best_score = if white_moving {
        -CHECKMATE_SCORE
    } else {
        CHECKMATE_SCORE
    };

    for &mv in valid_moves {
        game_state.make_move(mv);
        let next_moves = game_state.get_valid_moves();
        let (_, score) = minimax(game_state, &next_moves, depth - 1, !white_moving, nodes);
        game_state.undo_move();

        let improves = if white_moving {
            score > best_score
        } else {
            score < best_score
        };
        if best_move.is_none() || improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    (best_move, best_score)
}
