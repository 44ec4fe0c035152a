use crate::game_state::chess_rules::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::chess_move::Move;

/// Queen moves are the union of the rook and bishop patterns.
pub fn generate_queen_moves(game_state: &GameState, side: Color, from: Coord, out: &mut Vec<Move>) {
    let queen = Piece::new(side, PieceKind::Queen);
    push_sliding_moves(game_state, queen, from, &ROOK_DIRECTIONS, out);
    push_sliding_moves(game_state, queen, from, &BISHOP_DIRECTIONS, out);
}
