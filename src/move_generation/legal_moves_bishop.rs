use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(
    game_state: &GameState,
    side: Color,
    from: Coord,
    out: &mut Vec<Move>,
) {
    let bishop = Piece::new(side, PieceKind::Bishop);
    push_sliding_moves(game_state, bishop, from, &BISHOP_DIRECTIONS, out);
}
