//! Move-log formatting.
//!
//! Each played move becomes one `<piece code>_<notation>` line, oldest first.
//! Log files are named from the local time the game ended.

use chrono::{DateTime, TimeZone};

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub const LOG_FILE_NAME_FORMAT: &str = "game_log_%d_%m_%Y_%H_%M_%S.csv";

pub fn log_line(mv: &Move) -> String {
    format!("{}_{}", mv.piece_moved.code(), mv.get_chess_notation())
}

pub fn render_move_log(game_state: &GameState) -> String {
    game_state
        .move_log()
        .map(log_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn log_file_name<Tz: TimeZone>(finished_at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    finished_at.format(LOG_FILE_NAME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone, Utc};

    use super::{log_file_name, log_line, render_move_log};
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::parse_move;

    #[test]
    fn lines_follow_play_order() {
        let mut game = GameState::new_game();
        for text in ["e2e4", "d7d5", "e4d5"] {
            let mv = parse_move(&mut game, text).expect("opening move is legal");
            game.make_move(mv);
        }

        let last = game.last_move().expect("three moves played");
        assert_eq!(log_line(last), "wP_e4d5");
        assert_eq!(render_move_log(&game), "wP_e2e4\nbP_d7d5\nwP_e4d5");
        assert_eq!(render_move_log(&GameState::new_game()), "");
    }

    #[test]
    fn file_name_is_zero_padded() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 7, 9, 5, 2)
            .single()
            .expect("valid timestamp");
        assert_eq!(log_file_name(&at), "game_log_07_03_2024_09_05_02.csv");

        let name = log_file_name(&Local::now());
        assert!(name.starts_with("game_log_") && name.ends_with(".csv"));
    }
}
