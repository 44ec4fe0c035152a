//! Core value types shared by the board model, move generation, and search.
//!
//! The board is a fixed 8x8 grid of `Option<Piece>` where row 0 is Black's
//! back rank, row 7 is White's back rank, and column 0 is the a-file.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Single-letter prefix used in piece codes (`w` / `b`).
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// `+1` for White, `-1` for Black. Used as the negamax perspective multiplier.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Inverse of [`PieceKind::code`], case-insensitive.
    pub fn from_code(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece occupying a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Two-character code such as `wP` or `bK`.
    pub fn code(self) -> String {
        let mut out = String::with_capacity(2);
        out.push(self.color.code());
        out.push(self.kind.code());
        out
    }
}

/// Square contents: `None` is an empty square.
pub type SquareContent = Option<Piece>;

/// 8x8 grid indexed as `board[row][col]`.
pub type Board = [[SquareContent; 8]; 8];

/// Board coordinate as `(row, col)`. Signed so direction offsets can be added
/// before the bounds check.
pub type Coord = (i8, i8);

pub const BOARD_SIZE: i8 = 8;

#[inline]
pub const fn on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}
