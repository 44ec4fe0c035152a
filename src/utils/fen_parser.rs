//! FEN-to-GameState parser.
//!
//! Reads piece placement, side to move and the en-passant target. Castling
//! rights and the move clocks are accepted for compatibility but not kept,
//! so four to six fields parse.
//!
//! Positions the move generator cannot undo exactly are rejected: an
//! en-passant target must sit behind a pawn that has just double-pushed, and
//! the side that is not to move may not be in check.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_coord;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(ChessError::InvalidFen(format!(
            "expected 4 to 6 fields, found {}",
            fields.len()
        )));
    }

    let board = parse_board(fields[0])?;
    let white_to_move = parse_side_to_move(fields[1])?;
    validate_castling_field(fields[2])?;
    let side = if white_to_move { Color::White } else { Color::Black };
    let en_passant_square = parse_en_passant_square(fields[3], &board, side)?;
    for clock in &fields[4..] {
        clock
            .parse::<u16>()
            .map_err(|_| ChessError::InvalidFen(format!("invalid move clock: {clock}")))?;
    }

    let game_state = GameState::from_board(board, white_to_move, en_passant_square)?;
    if game_state.is_king_attacked(side.opposite()) {
        return Err(ChessError::InvalidFen(format!(
            "{:?} is in check but not to move",
            side.opposite()
        )));
    }
    Ok(game_state)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board: Board = [[None; 8]; 8];
    // FEN lists rank 8 first, which is row 0 here.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;
            if col >= 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} has too many files",
                    8 - row
                )));
            }
            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(board)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let kind = PieceKind::from_code(ch)?;
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some(Piece::new(color, kind))
}

fn parse_side_to_move(side_part: &str) -> ChessResult<bool> {
    match side_part {
        "w" => Ok(true),
        "b" => Ok(false),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn validate_castling_field(castling_part: &str) -> ChessResult<()> {
    if castling_part == "-" || castling_part.chars().all(|ch| "KQkq".contains(ch)) {
        Ok(())
    } else {
        Err(ChessError::InvalidFen(format!(
            "invalid castling field: {castling_part}"
        )))
    }
}

fn parse_en_passant_square(
    en_passant_part: &str,
    board: &Board,
    side: Color,
) -> ChessResult<Option<Coord>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let wrong =
        |reason: &str| ChessError::InvalidFen(format!("en-passant square {en_passant_part} {reason}"));
    let (row, col) = algebraic_to_coord(en_passant_part).map_err(|_| wrong("is not a square"))?;

    // White captures onto the sixth rank, Black onto the third.
    let expected_row = match side {
        Color::White => 2,
        Color::Black => 5,
    };
    if row != expected_row {
        return Err(wrong("is on the wrong rank for the side to move"));
    }

    // The opposing pawn moved from `from_row` through `row` to `pawn_row`.
    let step = pawn_direction(side.opposite());
    let from_row = (row - step) as usize;
    let pawn_row = (row + step) as usize;
    let col_index = col as usize;
    if board[row as usize][col_index].is_some() || board[from_row][col_index].is_some() {
        return Err(wrong("is not behind an empty path"));
    }
    if board[pawn_row][col_index] != Some(Piece::new(side.opposite(), PieceKind::Pawn)) {
        return Err(wrong("has no opposing pawn to capture"));
    }
    Ok(Some((row, col)))
}
