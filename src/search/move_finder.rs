//! Search entry points consumed by the turn-taking loop.
//!
//! The root move list is shuffled before searching, so among equally scored
//! root moves the choice is random. Pass a seeded RNG to the `_with_rng`
//! variants for reproducible results. Every strategy returns `None` for an
//! empty move list and leaves the game state as it found it.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::ChessError;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::CHECKMATE_SCORE;
use crate::search::greedy::greedy_reply_search;
use crate::search::minimax::minimax;
use crate::search::negamax::{negamax, negamax_alpha_beta};

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    Random,
    Greedy,
    Minimax,
    Negamax,
    #[default]
    NegamaxAlphaBeta,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 5] = [
        SearchStrategy::Random,
        SearchStrategy::Greedy,
        SearchStrategy::Minimax,
        SearchStrategy::Negamax,
        SearchStrategy::NegamaxAlphaBeta,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SearchStrategy::Random => "random",
            SearchStrategy::Greedy => "greedy",
            SearchStrategy::Minimax => "minimax",
            SearchStrategy::Negamax => "negamax",
            SearchStrategy::NegamaxAlphaBeta => "alphabeta",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if matches!(wanted.as_str(), "negamax_alpha_beta" | "alpha_beta" | "alpha-beta") {
            return Ok(SearchStrategy::NegamaxAlphaBeta);
        }
        SearchStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| ChessError::UnknownStrategy(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root; values below 1 are treated as 1.
    pub depth: u8,
    pub strategy: SearchStrategy,
    pub shuffle_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            strategy: SearchStrategy::default(),
            shuffle_root: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Score of `best_move` for the side to move at the root. Always 0 for
    /// the random strategy.
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Production move finder: alpha-beta negamax at the default depth.
pub fn find_best_move(game_state: &mut GameState, valid_moves: &[Move]) -> Option<Move> {
    let mut rng = rand::rng();
    find_best_move_with_rng(game_state, valid_moves, &SearchConfig::default(), &mut rng).best_move
}

pub fn find_best_move_with_rng<R: Rng + ?Sized>(
    game_state: &mut GameState,
    valid_moves: &[Move],
    config: &SearchConfig,
    rng: &mut R,
) -> SearchResult {
    let depth = config.depth.max(1);
    if valid_moves.is_empty() {
        debug!("{} search skipped: no legal moves", config.strategy);
        return SearchResult {
            depth,
            ..SearchResult::default()
        };
    }

    let mut root_moves = valid_moves.to_vec();
    if config.shuffle_root {
        root_moves.shuffle(rng);
    }

    let stack_depth = game_state.move_stack.len();
    let turn_multiplier = game_state.side_to_move().sign();
    let mut nodes = 0u64;

    let (best_move, best_score) = match config.strategy {
        SearchStrategy::Random => (root_moves.choose(rng).copied(), 0),
        SearchStrategy::Greedy => greedy_reply_search(game_state, &root_moves, &mut nodes),
        SearchStrategy::Minimax => {
            let white_moving = game_state.white_to_move;
            let (mv, score) = minimax(game_state, &root_moves, depth, white_moving, &mut nodes);
            (mv, score * turn_multiplier)
        }
        SearchStrategy::Negamax => {
            negamax(game_state, &root_moves, depth, turn_multiplier, &mut nodes)
        }
        SearchStrategy::NegamaxAlphaBeta => negamax_alpha_beta(
            game_state,
            &root_moves,
            depth,
            -CHECKMATE_SCORE,
            CHECKMATE_SCORE,
            turn_multiplier,
            &mut nodes,
        ),
    };
    debug_assert_eq!(game_state.move_stack.len(), stack_depth);

    debug!(
        "{} depth {} nodes {} best {} score {}",
        config.strategy,
        depth,
        nodes,
        best_move.map_or_else(|| "none".to_owned(), |m| m.get_chess_notation()),
        best_score
    );
    trace!("root order: {:?}", root_moves.iter().map(Move::get_chess_notation).collect::<Vec<_>>());

    SearchResult {
        best_move,
        best_score,
        depth,
        nodes,
    }
}

/// Uniform pick from `valid_moves`; `None` when it is empty.
pub fn find_random_move(valid_moves: &[Move]) -> Option<Move> {
    let mut rng = rand::rng();
    find_random_move_with_rng(valid_moves, &mut rng)
}

pub fn find_random_move_with_rng<R: Rng + ?Sized>(valid_moves: &[Move], rng: &mut R) -> Option<Move> {
    valid_moves.choose(rng).copied()
}
