//! Canonical chess-rule constants.
//!
//! Starting layout, pawn ranks, and the offset tables the piece generators
//! walk. Rows count down the board from Black's back rank (row 0).

use crate::game_state::chess_types::{Color, Coord, PieceKind};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_KING_START: Coord = (7, 4);
pub const BLACK_KING_START: Coord = (0, 4);

pub const ROOK_DIRECTIONS: [Coord; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub const BISHOP_DIRECTIONS: [Coord; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const KNIGHT_OFFSETS: [Coord; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [Coord; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row delta of a single pawn push.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row from which a pawn may advance two squares.
#[inline]
pub const fn pawn_start_row(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Farthest row for a pawn of `color`; reaching it promotes.
#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Row holding the back rank of `color` in the starting position.
#[inline]
pub const fn back_rank_row(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}
