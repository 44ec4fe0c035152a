//! Single-ply move value.
//!
//! A `Move` is built fresh for every candidate during generation and is
//! immutable afterwards. Equality and hashing use only the coordinate
//! identity (`move_id`), never the captured piece or flags.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::{Board, Coord, Piece, PieceKind};
use crate::utils::algebraic::coord_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Coord,
    pub end: Coord,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_pawn_promotion: bool,
    pub is_enpassant_move: bool,
    pub move_id: u16,
}

impl Move {
    /// Ordinary move or capture; the captured piece is read from `board` at `end`.
    pub fn new(start: Coord, end: Coord, piece_moved: Piece, board: &Board) -> Self {
        let piece_captured = board[end.0 as usize][end.1 as usize];
        Self::build(start, end, piece_moved, piece_captured, false)
    }

    /// Diagonal pawn capture into the empty en-passant square. The captured
    /// piece is recorded as the opposing pawn even though `end` is empty.
    pub fn en_passant(start: Coord, end: Coord, piece_moved: Piece) -> Self {
        let captured = Piece::new(piece_moved.color.opposite(), PieceKind::Pawn);
        Self::build(start, end, piece_moved, Some(captured), true)
    }

    fn build(
        start: Coord,
        end: Coord,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
        is_enpassant_move: bool,
    ) -> Self {
        let is_pawn_promotion =
            piece_moved.kind == PieceKind::Pawn && end.0 == promotion_row(piece_moved.color);

        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_pawn_promotion,
            is_enpassant_move,
            move_id: move_id(start, end),
        }
    }

    /// Coordinate notation such as `e2e4`.
    pub fn get_chess_notation(&self) -> String {
        let mut out = coord_to_algebraic(self.start);
        out.push_str(&coord_to_algebraic(self.end));
        out
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_capture_square(&self) -> Coord {
        (self.start.0, self.end.1)
    }
}

#[inline]
pub const fn move_id(start: Coord, end: Coord) -> u16 {
    start.0 as u16 * 1000 + start.1 as u16 * 100 + end.0 as u16 * 10 + end.1 as u16
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id == other.move_id
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_chess_notation())
    }
}
