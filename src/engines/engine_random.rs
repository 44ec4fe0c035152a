//! Random-move engine.
//!
//! Selects uniformly from legal moves and is used for diagnostics,
//! integration testing, and as the search fallback.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::move_finder::find_random_move_with_rng;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Ember Random"
    }

    fn choose_move(&mut self, _game_state: &mut GameState, valid_moves: &[Move]) -> EngineOutput {
        EngineOutput {
            best_move: find_random_move_with_rng(valid_moves, &mut self.rng),
            score: None,
            nodes: 0,
        }
    }
}
