//! Reversible move application.
//!
//! `make_move` trusts its caller: only moves returned by `get_valid_moves`
//! may be passed in. Every `make_move` must be paired with exactly one
//! `undo_move` before control returns to a shallower search frame.

use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};
use crate::moves::chess_move::Move;

impl GameState {
    pub fn make_move(&mut self, mv: Move) {
        let mover = mv.piece_moved.color;

        self.set_square(mv.start, None);
        self.set_square(mv.end, Some(mv.piece_moved));
        self.move_stack.push(UndoState {
            mv,
            prev_en_passant_square: self.en_passant_square,
        });
        self.white_to_move = !self.white_to_move;

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_location(mover, mv.end);
        }

        if mv.is_pawn_promotion {
            self.set_square(mv.end, Some(Piece::new(mover, PieceKind::Queen)));
        }

        if mv.is_enpassant_move {
            self.set_square(mv.en_passant_capture_square(), None);
        }

        self.en_passant_square =
            if mv.piece_moved.kind == PieceKind::Pawn && (mv.start.0 - mv.end.0).abs() == 2 {
                Some(((mv.start.0 + mv.end.0) / 2, mv.start.1))
            } else {
                None
            };
    }

    /// Reverts the most recent `make_move`; no-op on an empty stack. Always
    /// clears `checkmate` and `stalemate`.
    pub fn undo_move(&mut self) {
        if let Some(UndoState {
            mv,
            prev_en_passant_square,
        }) = self.move_stack.pop()
        {
            self.set_square(mv.start, Some(mv.piece_moved));
            self.set_square(mv.end, mv.piece_captured);
            self.white_to_move = !self.white_to_move;

            if mv.piece_moved.kind == PieceKind::King {
                self.set_king_location(mv.piece_moved.color, mv.start);
            }

            if mv.is_enpassant_move {
                self.set_square(mv.end, None);
                self.set_square(mv.en_passant_capture_square(), mv.piece_captured);
            }

            self.en_passant_square = prev_en_passant_square;
        }

        self.checkmate = false;
        self.stalemate = false;
    }
}
