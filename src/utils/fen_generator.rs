use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::coord_to_algebraic;

/// Four-field FEN: placement, side to move, castling (always `-`) and the
/// en-passant target.
pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = if game_state.white_to_move { "w" } else { "b" };
    let en_passant = game_state
        .en_passant_square
        .map_or_else(|| "-".to_owned(), coord_to_algebraic);

    format!(
        "{} {} - {}",
        generate_board_field(&game_state.board),
        side_to_move,
        en_passant
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, squares) in board.iter().enumerate() {
        let mut empty_count = 0u8;

        for content in squares {
            match content {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_fen_char(*piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_fen_char(piece: Piece) -> char {
    match piece.color {
        Color::White => piece.kind.code(),
        Color::Black => piece.kind.code().to_ascii_lowercase(),
    }
}
