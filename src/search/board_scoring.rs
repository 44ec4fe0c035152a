//! Static position scoring.
//!
//! Material is counted from White's point of view (positive favours White).
//! Terminal positions override material with the checkmate sentinel or the
//! stalemate score.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Dominates any reachable material balance.
pub const CHECKMATE_SCORE: i32 = 1000;
pub const STALEMATE_SCORE: i32 = 0;

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => 0,
        PieceKind::Queen => 10,
        PieceKind::Rook => 5,
        PieceKind::Bishop => 3,
        PieceKind::Knight => 3,
        PieceKind::Pawn => 1,
    }
}

/// White material minus Black material.
pub fn score_material(board: &Board) -> i32 {
    board
        .iter()
        .flatten()
        .flatten()
        .map(|piece| match piece.color {
            Color::White => piece_value(piece.kind),
            Color::Black => -piece_value(piece.kind),
        })
        .sum()
}

/// Material score unless `get_valid_moves` has flagged the game as over.
/// A mated White scores `-CHECKMATE_SCORE`, a mated Black `+CHECKMATE_SCORE`.
pub fn score_terminal_or_material(game_state: &GameState) -> i32 {
    if game_state.checkmate {
        if game_state.white_to_move {
            -CHECKMATE_SCORE
        } else {
            CHECKMATE_SCORE
        }
    } else if game_state.stalemate {
        STALEMATE_SCORE
    } else {
        score_material(&game_state.board)
    }
}
