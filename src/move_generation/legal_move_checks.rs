use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;

/// True if any pseudo-legal move of `attacker` ends on `target`.
///
/// Pawn pushes count as well, so the answer is only meaningful for occupied
/// squares such as a king's.
pub fn square_attacked_by(game_state: &GameState, target: Coord, attacker: Color) -> bool {
    let mut opponent_moves = Vec::with_capacity(64);
    generate_pseudo_legal_moves(game_state, attacker, &mut opponent_moves);
    opponent_moves.iter().any(|mv| mv.end == target)
}

impl GameState {
    /// Whether the side to move has its king attacked.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move())
    }

    /// Whether `(row, col)` is reachable by the opponent of the side to move.
    /// Pure read: no state is touched.
    #[inline]
    pub fn square_attacked(&self, row: i8, col: i8) -> bool {
        square_attacked_by(self, (row, col), self.side_to_move().opposite())
    }

    #[inline]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        square_attacked_by(self, self.king_location(color), color.opposite())
    }
}
