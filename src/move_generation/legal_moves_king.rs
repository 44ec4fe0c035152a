use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::chess_move::Move;

// Castling is not modelled.
pub fn generate_king_moves(game_state: &GameState, side: Color, from: Coord, out: &mut Vec<Move>) {
    let king = Piece::new(side, PieceKind::King);
    push_step_moves(game_state, king, from, &KING_OFFSETS, out);
}
