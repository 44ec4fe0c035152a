//! Coordinate-notation move input.
//!
//! Text such as `e2e4` is resolved against the legal moves of the current
//! position, so a successful parse is also the legality check. Promotion is
//! always to a queen; a trailing `q` is tolerated.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::{move_id, Move};
use crate::utils::algebraic::algebraic_to_coord;

pub fn parse_move(game_state: &mut GameState, text: &str) -> ChessResult<Move> {
    let text = text.trim();
    let squares = match text.len() {
        4 => text,
        5 if text.ends_with(['q', 'Q']) => &text[..4],
        _ => {
            return Err(ChessError::InvalidAlgebraic(format!(
                "expected four-character move such as e2e4: {text}"
            )))
        }
    };
    if !squares.is_ascii() {
        return Err(ChessError::InvalidAlgebraic(format!("non-ASCII move: {text}")));
    }

    let start = algebraic_to_coord(&squares[0..2])?;
    let end = algebraic_to_coord(&squares[2..4])?;
    let wanted = move_id(start, end);

    game_state
        .get_valid_moves()
        .into_iter()
        .find(|mv| mv.move_id == wanted)
        .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))
}
