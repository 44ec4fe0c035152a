use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(game_state: &GameState, side: Color, from: Coord, out: &mut Vec<Move>) {
    let rook = Piece::new(side, PieceKind::Rook);
    push_sliding_moves(game_state, rook, from, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn rook_on_open_board_reaches_fourteen_squares() {
        let game = GameState::from_fen("k7/8/8/8/3R4/8/8/7K w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, Color::White, (4, 3), &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_stops_on_enemy_and_before_friend() {
        // d4 rook, black pawn on d6, white pawn on f4.
        let game =
            GameState::from_fen("k7/8/3p4/8/3R1P2/8/8/7K w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, Color::White, (4, 3), &mut out);

        let targets: Vec<String> = out.iter().map(|m| m.get_chess_notation()).collect();
        assert!(targets.contains(&"d4d6".to_owned()));
        assert!(!targets.contains(&"d4d7".to_owned()));
        assert!(targets.contains(&"d4e4".to_owned()));
        assert!(!targets.contains(&"d4f4".to_owned()));
        assert!(out.iter().any(|m| m.get_chess_notation() == "d4d6" && m.is_capture()));
    }
}
