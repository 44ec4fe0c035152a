//! One-reply lookahead without recursion.
//!
//! For each candidate, assume the opponent answers with the reply that is
//! best for them on material (or ends the game) and keep the candidate whose
//! worst case is least bad.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{score_material, CHECKMATE_SCORE, STALEMATE_SCORE};

/// Returns the chosen move and its score from the mover's point of view.
pub fn greedy_reply_search(
    game_state: &mut GameState,
    valid_moves: &[Move],
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    let turn_multiplier = game_state.side_to_move().sign();
    let mut best_move = None;
    let mut opponent_min_max_score = CHECKMATE_SCORE;

    for &player_move in valid_moves {
        *nodes += 1;
        game_state.make_move(player_move);
        let opponent_moves = game_state.get_valid_moves();

        let opponent_max_score = if game_state.checkmate {
            -CHECKMATE_SCORE
        } else if game_state.stalemate {
            STALEMATE_SCORE
        } else {
            let mut max_score = -CHECKMATE_SCORE;
            for &opponent_move in &opponent_moves {
                *nodes += 1;
                game_state.make_move(opponent_move);
                let score = -turn_multiplier * score_material(&game_state.board);
                game_state.undo_move();
                max_score = max_score.max(score);
            }
            max_score
        };
        game_state.undo_move();

        if best_move.is_none() || opponent_max_score < opponent_min_max_score {
            opponent_min_max_score = opponent_max_score;
            best_move = Some(player_move);
        }
    }

    (best_move, -opponent_min_max_score)
}
