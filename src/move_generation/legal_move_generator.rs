//! Full legal move generation pipeline.
//!
//! Dispatches every piece of the generating side to its pseudo-legal
//! generator, then filters out moves that leave the mover's own king
//! attacked. `get_valid_moves` is also what refreshes the checkmate and
//! stalemate flags.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Pseudo-legal moves for every piece of `side`, ignoring self-check.
pub fn generate_pseudo_legal_moves(game_state: &GameState, side: Color, out: &mut Vec<Move>) {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let Some(piece) = game_state.piece_at(row, col) else {
                continue;
            };
            if piece.color != side {
                continue;
            }

            let from = (row, col);
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game_state, side, from, out),
                PieceKind::Knight => generate_knight_moves(game_state, side, from, out),
                PieceKind::Bishop => generate_bishop_moves(game_state, side, from, out),
                PieceKind::Rook => generate_rook_moves(game_state, side, from, out),
                PieceKind::Queen => generate_queen_moves(game_state, side, from, out),
                PieceKind::King => generate_king_moves(game_state, side, from, out),
            }
        }
    }
}

impl GameState {
    /// Pseudo-legal moves for the side to move.
    pub fn get_possible_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        generate_pseudo_legal_moves(self, self.side_to_move(), &mut moves);
        moves
    }

    /// Legal moves for the side to move. Sets `checkmate` or `stalemate` when
    /// none exist and clears both otherwise. The en-passant target is left as
    /// it was found.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let saved_en_passant = self.en_passant_square;
        let mover = self.side_to_move();

        let mut moves = self.get_possible_moves();
        moves.retain(|mv| {
            self.make_move(*mv);
            let exposed = self.is_king_attacked(mover);
            self.undo_move();
            !exposed
        });

        if moves.is_empty() {
            if self.in_check() {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        self.en_passant_square = saved_en_passant;
        moves
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::parse_move;

    fn play(game: &mut GameState, moves: &[&str]) {
        for text in moves {
            let mv = parse_move(game, text).expect("scripted move should be legal");
            game.make_move(mv);
        }
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut game = GameState::new_game();
        assert_eq!(game.get_possible_moves().len(), 20);
        assert_eq!(game.get_valid_moves().len(), 20);
        assert!(!game.checkmate && !game.stalemate);
    }

    #[test]
    fn valid_moves_are_a_subset_and_never_expose_the_king() {
        // White king on e1 pinned-rook position: the e2 rook may only slide on the e-file.
        let mut game = GameState::from_fen("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1")
            .expect("FEN should parse");
        let possible = game.get_possible_moves();
        let valid = game.get_valid_moves();

        assert!(valid.len() < possible.len());
        for mv in &valid {
            assert!(possible.contains(mv));
            let mut probe = game.clone();
            probe.make_move(*mv);
            assert!(!probe.is_king_attacked(game.side_to_move()));
        }
        assert!(valid
            .iter()
            .filter(|m| m.piece_moved.kind == crate::game_state::chess_types::PieceKind::Rook)
            .all(|m| m.end.1 == 4));
    }

    #[test]
    fn fools_mate_sets_checkmate() {
        let mut game = GameState::new_game();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

        let moves = game.get_valid_moves();
        assert!(moves.is_empty());
        assert!(game.checkmate);
        assert!(!game.stalemate);
        assert!(game.is_game_over());
    }

    #[test]
    fn cornered_king_without_check_is_stalemate() {
        // Black king a8, white queen c7, white king c6; black to move.
        let mut game =
            GameState::from_fen("k7/2Q5/2K5/8/8/8/8/8 b - - 0 1").expect("FEN should parse");

        let moves = game.get_valid_moves();
        assert!(moves.is_empty());
        assert!(game.stalemate);
        assert!(!game.checkmate);
    }

    #[test]
    fn flags_clear_once_moves_exist_again() {
        let mut game = GameState::new_game();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        let _ = game.get_valid_moves();
        assert!(game.checkmate);

        game.undo_move();
        assert!(!game.checkmate && !game.stalemate);
        let moves = game.get_valid_moves();
        assert!(!moves.is_empty());
        assert!(!game.checkmate && !game.stalemate);
    }

    #[test]
    fn en_passant_capture_is_offered_and_applied() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
        assert_eq!(game.en_passant_square, Some((2, 3)));

        let moves = game.get_valid_moves();
        assert_eq!(game.en_passant_square, Some((2, 3)));
        let ep = moves
            .iter()
            .copied()
            .find(|m| m.get_chess_notation() == "e5d6")
            .expect("e5d6 should be legal");
        assert!(ep.is_enpassant_move);
        assert_eq!(ep.piece_captured.map(|p| p.code()), Some("bP".to_owned()));

        game.make_move(ep);
        assert_eq!(game.piece_at(3, 3), None, "captured pawn on d5 is removed");
        assert_eq!(game.piece_at(1, 3), None, "d7 stays empty");
        assert_eq!(game.piece_at(2, 3).map(|p| p.code()), Some("wP".to_owned()));
        assert_eq!(game.piece_at(3, 4), None);
    }

    #[test]
    fn get_valid_moves_leaves_en_passant_target_untouched() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4"]);
        let before = game.en_passant_square;
        let _ = game.get_valid_moves();
        assert_eq!(game.en_passant_square, before);
        assert_eq!(game.move_stack.len(), 1);
    }
}
