use crate::game_state::chess_types::Coord;
use crate::moves::chess_move::Move;

/// Single move-stack entry for `make_move` / `undo_move`.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: Move,
    pub prev_en_passant_square: Option<Coord>,
}
