//! Occupancy helpers shared by the per-piece generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

/// Walk each direction one square at a time until the board edge, stopping
/// on (and including) the first enemy piece and before the first friendly one.
pub fn push_sliding_moves(
    game_state: &GameState,
    piece: Piece,
    from: Coord,
    directions: &[Coord],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let (mut row, mut col) = (from.0 + d_row, from.1 + d_col);
        while on_board(row, col) {
            match game_state.piece_at(row, col) {
                None => out.push(Move::new(from, (row, col), piece, &game_state.board)),
                Some(target) if target.color != piece.color => {
                    out.push(Move::new(from, (row, col), piece, &game_state.board));
                    break;
                }
                Some(_) => break,
            }
            row += d_row;
            col += d_col;
        }
    }
}

/// Fixed-offset targets that are on the board and not held by a friendly piece.
pub fn push_step_moves(
    game_state: &GameState,
    piece: Piece,
    from: Coord,
    offsets: &[Coord],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let (row, col) = (from.0 + d_row, from.1 + d_col);
        if !on_board(row, col) {
            continue;
        }
        if !is_friendly(game_state.piece_at(row, col), piece.color) {
            out.push(Move::new(from, (row, col), piece, &game_state.board));
        }
    }
}

#[inline]
pub fn is_friendly(content: SquareContent, side: Color) -> bool {
    matches!(content, Some(piece) if piece.color == side)
}

#[inline]
pub fn is_enemy(content: SquareContent, side: Color) -> bool {
    matches!(content, Some(piece) if piece.color != side)
}
