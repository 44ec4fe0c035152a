//! Search-backed engine.
//!
//! Wraps `find_best_move_with_rng` with a fixed `SearchConfig` and its own
//! RNG, so the same engine can be seeded for reproducible games.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::move_finder::{find_best_move_with_rng, SearchConfig, SearchStrategy};

pub struct SearchEngine {
    config: SearchConfig,
    rng: StdRng,
    name: String,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SearchConfig, rng: StdRng) -> Self {
        let name = format!("Ember {} d{}", config.strategy, config.depth.max(1));
        Self { config, rng, name }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for SearchEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        info!("{} ready for a new game", self.name);
    }

    fn choose_move(&mut self, game_state: &mut GameState, valid_moves: &[Move]) -> EngineOutput {
        let result = find_best_move_with_rng(game_state, valid_moves, &self.config, &mut self.rng);
        let score = match self.config.strategy {
            SearchStrategy::Random => None,
            _ => result.best_move.map(|_| result.best_score),
        };
        EngineOutput {
            best_move: result.best_move,
            score,
            nodes: result.nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;
    use crate::search::move_finder::{SearchConfig, SearchStrategy};

    #[test]
    fn name_reflects_strategy_and_depth() {
        let engine = SearchEngine::with_seed(
            SearchConfig {
                depth: 3,
                strategy: SearchStrategy::Minimax,
                shuffle_root: false,
            },
            0,
        );
        assert_eq!(engine.name(), "Ember minimax d3");
    }

    #[test]
    fn finds_back_rank_mate() {
        let mut game =
            GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let moves = game.get_valid_moves();
        let mut engine = SearchEngine::with_seed(SearchConfig::default(), 17);

        let out = engine.choose_move(&mut game, &moves);
        assert_eq!(
            out.best_move.map(|m| m.get_chess_notation()),
            Some("a1a8".to_owned())
        );
        assert_eq!(out.score, Some(1000));
        assert!(out.nodes > 0);
        assert!(game.move_stack.is_empty());
    }

    #[test]
    fn checkmated_side_gets_no_move() {
        let mut game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1")
            .expect("FEN should parse");
        let moves = game.get_valid_moves();
        assert!(game.checkmate);
        let out = SearchEngine::default().choose_move(&mut game, &moves);
        assert!(out.best_move.is_none());
        assert_eq!(out.score, None);
    }
}
