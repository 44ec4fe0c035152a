//! Lists the legal moves of a position.
//!
//! Usage:
//! `cargo run --bin move_list -- "<fen>" [perft depth]`
//!
//! Without a FEN the starting position is used. With a depth, each move is
//! followed by its perft node count.

use std::env;

use ember_chess::game_state::game_state::GameState;
use ember_chess::move_generation::perft::perft_divide;
use ember_chess::utils::render_game_state::render_game_state;

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize) -> Option<T> {
    args.get(idx).and_then(|s| s.parse::<T>().ok())
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut game = match args.get(1) {
        Some(fen) => GameState::from_fen(fen).map_err(|e| e.to_string())?,
        None => GameState::new_game(),
    };
    let perft_depth: Option<u8> = parse_arg(&args, 2);

    println!("{}\n", render_game_state(&game));

    match perft_depth {
        Some(depth) if depth > 0 => {
            let divided = perft_divide(&mut game, depth);
            let total: u64 = divided.iter().map(|(_, nodes)| nodes).sum();
            for (notation, nodes) in &divided {
                println!("{notation}: {nodes}");
            }
            println!("\n{} moves, {} nodes at depth {}", divided.len(), total, depth);
        }
        _ => {
            let moves = game.get_valid_moves();
            let listed: Vec<String> = moves.iter().map(|mv| mv.get_chess_notation()).collect();
            println!("{}", listed.join(" "));
            println!("\n{} legal moves", moves.len());
            if game.checkmate {
                println!("checkmate");
            } else if game.stalemate {
                println!("stalemate");
            }
        }
    }
    Ok(())
}
