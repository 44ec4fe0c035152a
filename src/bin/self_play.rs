//! Engine-vs-engine game runner.
//!
//! Usage:
//! `cargo run --release --bin self_play -- --white alphabeta --black random --depth 2`
//!
//! Flags: `--white`, `--black` (strategy names), `--depth`, `--seed`,
//! `--max-plies`, `--fen`. Set `RUST_LOG=debug` to see per-move search logs.

use std::env;

use chrono::Local;
use log::{info, warn};

use ember_chess::engines::engine_random::RandomEngine;
use ember_chess::engines::engine_search::SearchEngine;
use ember_chess::engines::engine_trait::Engine;
use ember_chess::game_state::game_state::GameState;
use ember_chess::search::move_finder::{SearchConfig, SearchStrategy, DEFAULT_SEARCH_DEPTH};
use ember_chess::utils::game_log::{log_file_name, render_move_log};
use ember_chess::utils::render_game_state::render_game_state;

struct RunConfig {
    white: SearchStrategy,
    black: SearchStrategy,
    depth: u8,
    seed: Option<u64>,
    max_plies: u32,
    fen: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            white: SearchStrategy::NegamaxAlphaBeta,
            black: SearchStrategy::Random,
            depth: DEFAULT_SEARCH_DEPTH,
            seed: None,
            max_plies: 200,
            fen: None,
        }
    }
}

fn parse_args(args: &[String]) -> Result<RunConfig, String> {
    let mut config = RunConfig::default();
    let mut iter = args.iter().skip(1);
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--white" => config.white = value.parse().map_err(|e| format!("{e}"))?,
            "--black" => config.black = value.parse().map_err(|e| format!("{e}"))?,
            "--depth" => {
                config.depth = value
                    .parse()
                    .map_err(|_| format!("invalid depth: {value}"))?
            }
            "--seed" => {
                config.seed = Some(value.parse().map_err(|_| format!("invalid seed: {value}"))?)
            }
            "--max-plies" => {
                config.max_plies = value
                    .parse()
                    .map_err(|_| format!("invalid ply limit: {value}"))?
            }
            "--fen" => config.fen = Some(value.clone()),
            other => return Err(format!("unknown flag: {other}")),
        }
    }
    Ok(config)
}

fn build_player(strategy: SearchStrategy, depth: u8, seed: Option<u64>) -> Box<dyn Engine> {
    match (strategy, seed) {
        (SearchStrategy::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
        (SearchStrategy::Random, None) => Box::new(RandomEngine::new()),
        (strategy, seed) => {
            let config = SearchConfig {
                depth,
                strategy,
                ..SearchConfig::default()
            };
            match seed {
                Some(seed) => Box::new(SearchEngine::with_seed(config, seed)),
                None => Box::new(SearchEngine::new(config)),
            }
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args)?;

    let mut game = match &config.fen {
        Some(fen) => GameState::from_fen(fen).map_err(|e| e.to_string())?,
        None => GameState::new_game(),
    };
    let mut white = build_player(config.white, config.depth, config.seed);
    // Offset so two seeded players of the same kind do not mirror each other.
    let mut black = build_player(config.black, config.depth, config.seed.map(|s| s ^ 0x9e37));
    white.new_game();
    black.new_game();
    info!("{} (white) vs {} (black)", white.name(), black.name());

    let mut plies = 0u32;
    loop {
        let valid_moves = game.get_valid_moves();
        if game.is_game_over() {
            break;
        }
        if plies >= config.max_plies {
            warn!("stopping after {plies} plies without a result");
            break;
        }

        let player = if game.white_to_move { &mut white } else { &mut black };
        let output = player.choose_move(&mut game, &valid_moves);
        let Some(mv) = output.best_move else {
            return Err(format!("{} returned no move", player.name()));
        };
        info!(
            "{}: {}{} score {:?} nodes {}",
            player.name(),
            mv,
            if mv.is_capture() { " (capture)" } else { "" },
            output.score,
            output.nodes
        );
        game.make_move(mv);
        plies += 1;
    }

    println!("{}\n", render_game_state(&game));
    println!("{}\n", render_move_log(&game));
    let outcome = if game.checkmate {
        if game.white_to_move {
            "Black wins by checkmate"
        } else {
            "White wins by checkmate"
        }
    } else if game.stalemate {
        "Stalemate"
    } else {
        "Unfinished"
    };
    println!("{outcome} after {plies} plies");
    println!("log file name: {}", log_file_name(&Local::now()));
    Ok(())
}
