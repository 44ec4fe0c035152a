//! Core board-state representation.
//!
//! `GameState` owns the 8x8 grid, side-to-move flag, king-location caches,
//! the en-passant target, and the move stack driven by `make_move` /
//! `undo_move`. Move generation and legality live in `move_generation`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    back_rank_row, pawn_start_row, BACK_RANK, BLACK_KING_START, WHITE_KING_START,
};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,

    pub white_to_move: bool,

    // King-location caches; kept in step with `board` by make/undo.
    pub white_king_location: Coord,
    pub black_king_location: Coord,

    /// Square a pawn may capture into this ply only.
    pub en_passant_square: Option<Coord>,

    pub move_stack: Vec<UndoState>,

    // Outcome flags, refreshed by `get_valid_moves`.
    pub checkmate: bool,
    pub stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        let mut board: Board = [[None; 8]; 8];
        for color in [Color::White, Color::Black] {
            let back = back_rank_row(color) as usize;
            let pawns = pawn_start_row(color) as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board[back][col] = Some(Piece::new(color, *kind));
                board[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }

        Self {
            board,
            white_to_move: true,
            white_king_location: WHITE_KING_START,
            black_king_location: BLACK_KING_START,
            en_passant_square: None,
            move_stack: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    /// Build a state from an arbitrary board. Exactly one king per color is required.
    pub fn from_board(
        board: Board,
        white_to_move: bool,
        en_passant_square: Option<Coord>,
    ) -> ChessResult<Self> {
        let white_king_location = locate_single_king(&board, Color::White)?;
        let black_king_location = locate_single_king(&board, Color::Black)?;

        Ok(Self {
            board,
            white_to_move,
            white_king_location,
            black_king_location,
            en_passant_square,
            move_stack: Vec::new(),
            checkmate: false,
            stalemate: false,
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Coord {
        match color {
            Color::White => self.white_king_location,
            Color::Black => self.black_king_location,
        }
    }

    /// Contents of `(row, col)`; off-board coordinates read as empty.
    #[inline]
    pub fn piece_at(&self, row: i8, col: i8) -> SquareContent {
        if on_board(row, col) {
            self.board[row as usize][col as usize]
        } else {
            None
        }
    }

    /// Played moves, oldest first.
    pub fn move_log(&self) -> impl Iterator<Item = &Move> + '_ {
        self.move_stack.iter().map(|entry| &entry.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_stack.last().map(|entry| &entry.mv)
    }

    /// True once `get_valid_moves` has observed checkmate or stalemate.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }

    #[inline]
    pub(crate) fn set_square(&mut self, (row, col): Coord, content: SquareContent) {
        self.board[row as usize][col as usize] = content;
    }

    #[inline]
    pub(crate) fn set_king_location(&mut self, color: Color, location: Coord) {
        match color {
            Color::White => self.white_king_location = location,
            Color::Black => self.black_king_location = location,
        }
    }
}

fn locate_single_king(board: &Board, color: Color) -> ChessResult<Coord> {
    let king = Piece::new(color, PieceKind::King);
    let mut found = None;
    for (row, squares) in board.iter().enumerate() {
        for (col, content) in squares.iter().enumerate() {
            if *content == Some(king) {
                if found.is_some() {
                    return Err(ChessError::InvalidKingCount(color));
                }
                found = Some((row as i8, col as i8));
            }
        }
    }
    found.ok_or(ChessError::InvalidKingCount(color))
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn new_game_matches_starting_fen() {
        let fresh = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(fresh.board, parsed.board);
        assert!(fresh.white_to_move);
        assert_eq!(fresh.white_king_location, (7, 4));
        assert_eq!(fresh.black_king_location, (0, 4));
        assert_eq!(fresh.en_passant_square, None);
        assert!(fresh.move_stack.is_empty());
    }

    #[test]
    fn starting_corners_hold_rooks() {
        let game = GameState::new_game();
        assert_eq!(
            game.piece_at(0, 0),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert_eq!(
            game.piece_at(7, 7),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(game.piece_at(8, 0), None);
    }

    #[test]
    fn from_board_rejects_missing_and_duplicate_kings() {
        let mut board = GameState::new_game().board;
        board[0][4] = None;
        let err = GameState::from_board(board, true, None).expect_err("no black king");
        assert!(matches!(err, ChessError::InvalidKingCount(Color::Black)));

        board[0][4] = Some(Piece::new(Color::Black, PieceKind::King));
        board[4][4] = Some(Piece::new(Color::White, PieceKind::King));
        let err = GameState::from_board(board, true, None).expect_err("two white kings");
        assert!(matches!(err, ChessError::InvalidKingCount(Color::White)));
    }
}
