//! Negamax search, with and without alpha-beta pruning.
//!
//! Every call scores from the perspective of the side to move: children are
//! searched with the multiplier flipped and their scores negated.
//! `turn_multiplier` is `+1` when White is to move and `-1` otherwise.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{score_terminal_or_material, CHECKMATE_SCORE};

pub fn negamax(
    game_state: &mut GameState,
    valid_moves: &[Move],
    depth: u8,
    turn_multiplier: i32,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;

    if depth == 0 || valid_moves.is_empty() {
        return (None, turn_multiplier * score_terminal_or_material(game_state));
    }

    let mut best_move = None;
    let mut max_score = -CHECKMATE_SCORE;

    for &mv in valid_moves {
        game_state.make_move(mv);
        let next_moves = game_state.get_valid_moves();
        let (_, child) = negamax(game_state, &next_moves, depth - 1, -turn_multiplier, nodes);
        game_state.undo_move();

        let score = -child;
        if best_move.is_none() || score > max_score {
            max_score = score;
            best_move = Some(mv);
        }
    }

    (best_move, max_score)
}

/// Negamax over the `(alpha, beta)` window. Siblings are skipped once
/// `alpha >= beta`; the value returned for the full window matches `negamax`.
pub fn negamax_alpha_beta(
    game_state: &mut GameState,
    valid_moves: &[Move],
    depth: u8,
    mut alpha: i32,
    beta: i32,
    turn_multiplier: i32,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;

    if depth == 0 || valid_moves.is_empty() {
        return (None, turn_multiplier * score_terminal_or_material(game_state));
    }

    let mut best_move = None;
    let mut max_score = -CHECKMATE_SCORE;

    for &mv in valid_moves {
        game_state.make_move(mv);
        let next_moves = game_state.get_valid_moves();
        let (_, child) = negamax_alpha_beta(
            game_state,
            &next_moves,
            depth - 1,
            -beta,
            -alpha,
            -turn_multiplier,
            nodes,
        );
        game_state.undo_move();

        let score = -child;
        if best_move.is_none() || score > max_score {
            max_score = score;
            best_move = Some(mv);
        }

        if max_score > alpha {
            alpha = max_score;
        }
        if alpha >= beta {
            break;
        }
    }

    (best_move, max_score)
}
