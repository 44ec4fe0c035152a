use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::is_enemy;
use crate::moves::chess_move::Move;

/// Pushes, the double push from the start row, diagonal captures, and the
/// en-passant capture. Promotion is flagged on the move, never branched.
pub fn generate_pawn_moves(game_state: &GameState, side: Color, from: Coord, out: &mut Vec<Move>) {
    let pawn = Piece::new(side, PieceKind::Pawn);
    let step = pawn_direction(side);
    let (row, col) = from;
    let ahead = row + step;
    if !on_board(ahead, col) {
        return;
    }

    if game_state.piece_at(ahead, col).is_none() {
        out.push(Move::new(from, (ahead, col), pawn, &game_state.board));

        let two_ahead = ahead + step;
        if row == pawn_start_row(side)
            && on_board(two_ahead, col)
            && game_state.piece_at(two_ahead, col).is_none()
        {
            out.push(Move::new(from, (two_ahead, col), pawn, &game_state.board));
        }
    }

    for d_col in [-1i8, 1i8] {
        let target_col = col + d_col;
        if !on_board(ahead, target_col) {
            continue;
        }

        let target = game_state.piece_at(ahead, target_col);
        if is_enemy(target, side) {
            out.push(Move::new(from, (ahead, target_col), pawn, &game_state.board));
        } else if target.is_none() && game_state.en_passant_square == Some((ahead, target_col)) {
            out.push(Move::en_passant(from, (ahead, target_col), pawn));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::moves::chess_move::Move;

    fn notations(moves: &[Move]) -> Vec<String> {
        let mut out: Vec<String> = moves.iter().map(|m| m.get_chess_notation()).collect();
        out.sort();
        out
    }

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_pawn_moves(&game, Color::White, (6, 4), &mut out);
        assert_eq!(notations(&out), vec!["e2e3".to_owned(), "e2e4".to_owned()]);

        out.clear();
        generate_pawn_moves(&game, Color::Black, (1, 3), &mut out);
        assert_eq!(notations(&out), vec!["d7d5".to_owned(), "d7d6".to_owned()]);
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        // Knight on e3 blocks e2 entirely; knight on d4 blocks only d2d4.
        let game = GameState::from_fen("k7/8/8/8/3n4/4n3/3PP3/7K w - - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, Color::White, (6, 4), &mut out);
        assert!(out.is_empty());

        out.clear();
        generate_pawn_moves(&game, Color::White, (6, 3), &mut out);
        assert_eq!(notations(&out), vec!["d2d3".to_owned(), "d2e3".to_owned()]);
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let game = GameState::from_fen("k7/8/8/8/8/2p1P3/3P4/7K w - - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, Color::White, (6, 3), &mut out);
        assert_eq!(
            notations(&out),
            vec!["d2c3".to_owned(), "d2d3".to_owned(), "d2d4".to_owned()]
        );
        let capture = out
            .iter()
            .find(|m| m.get_chess_notation() == "d2c3")
            .expect("capture should be generated");
        assert_eq!(
            capture.piece_captured,
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn en_passant_target_yields_flagged_capture() {
        let game = GameState::from_fen("k7/8/8/3pP3/8/8/8/7K w - d6 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, Color::White, (3, 4), &mut out);

        let ep = out
            .iter()
            .find(|m| m.get_chess_notation() == "e5d6")
            .expect("en-passant capture should be generated");
        assert!(ep.is_enpassant_move);
        assert_eq!(ep.piece_captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
    }

    #[test]
    fn last_row_push_is_flagged_as_promotion() {
        let game = GameState::from_fen("k7/4P3/8/8/8/8/8/7K w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, Color::White, (1, 4), &mut out);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_pawn_promotion);
    }
}
