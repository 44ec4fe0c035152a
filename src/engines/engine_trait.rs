//! Engine abstraction used by the turn-taking loop.
//!
//! A player is anything that, given the current state and its legal moves,
//! names one of those moves. Human input and computer strategies sit behind
//! the same trait so the loop can select either at runtime.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Score of `best_move` for the side to move, when the engine computes one.
    pub score: Option<i32>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick one of `valid_moves`. Implementations may explore the tree through
    /// `game_state` but must hand it back unchanged.
    fn choose_move(&mut self, game_state: &mut GameState, valid_moves: &[Move]) -> EngineOutput;
}
