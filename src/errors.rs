//! Error type for the parsing and lookup surfaces of the engine.
//!
//! The board core itself (`make_move`, `undo_move`, generation, search) is
//! infallible: it trusts callers to pass only moves returned by
//! `get_valid_moves`. Errors come from turning outside text into engine
//! values.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Color;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The FEN string could not be parsed.
    InvalidFen(String),
    /// A square or move in coordinate notation could not be parsed.
    InvalidAlgebraic(String),
    /// Well-formed move text that names no legal move in the current position.
    IllegalMove(String),
    /// The board does not hold exactly one king of this color.
    InvalidKingCount(Color),
    /// No search strategy goes by this name.
    UnknownStrategy(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidAlgebraic(msg) => write!(f, "invalid algebraic notation: {msg}"),
            ChessError::IllegalMove(mv) => write!(f, "illegal move in current position: {mv}"),
            ChessError::InvalidKingCount(color) => {
                write!(f, "board must hold exactly one {color:?} king")
            }
            ChessError::UnknownStrategy(name) => write!(f, "unknown search strategy: {name}"),
        }
    }
}

impl Error for ChessError {}
