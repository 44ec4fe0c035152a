use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(
    game_state: &GameState,
    side: Color,
    from: Coord,
    out: &mut Vec<Move>,
) {
    let knight = Piece::new(side, PieceKind::Knight);
    push_step_moves(game_state, knight, from, &KNIGHT_OFFSETS, out);
}
