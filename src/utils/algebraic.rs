//! Square conversions between board coordinates and algebraic names.
//!
//! Files a-h map to columns 0-7 left to right; ranks 1-8 map to rows 7-0
//! bottom to top.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{on_board, Coord};

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const RANKS_BY_ROW: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// Convert a board coordinate to algebraic notation (for example: `(4, 4)` -> "e4").
pub fn coord_to_algebraic((row, col): Coord) -> String {
    let file = FILES.get(col as usize).copied().unwrap_or('?');
    let rank = RANKS_BY_ROW.get(row as usize).copied().unwrap_or('?');
    let mut out = String::with_capacity(2);
    out.push(file);
    out.push(rank);
    out
}

/// Convert algebraic notation (for example: "e4") to a board coordinate.
pub fn algebraic_to_coord(square: &str) -> ChessResult<Coord> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(format!(
            "square must be two characters: {square}"
        )));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "file out of range: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "rank out of range: {}",
            rank as char
        )));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    debug_assert!(on_board(row, col));
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_coord, coord_to_algebraic};

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(coord_to_algebraic((7, 0)), "a1");
        assert_eq!(coord_to_algebraic((0, 7)), "h8");
        assert_eq!(algebraic_to_coord("a1").expect("a1 should parse"), (7, 0));
        assert_eq!(algebraic_to_coord("h8").expect("h8 should parse"), (0, 7));
        assert_eq!(algebraic_to_coord("E4").expect("upper-case file is accepted"), (4, 4));
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_coord("i1").is_err());
        assert!(algebraic_to_coord("a9").is_err());
        assert!(algebraic_to_coord("a").is_err());
        assert!(algebraic_to_coord("a10").is_err());
    }
}
