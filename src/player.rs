use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, Cell};
use crate::common::ShotResult;
use crate::config::BOARD_SIZE;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next target given the tracking board's deduced state.
    fn select_target(&mut self, rng: &mut SmallRng, tracking: &Board) -> (u8, u8);

    /// Called with both boards at the start of every turn.
    fn observe_boards(&mut self, _own: &Board, _tracking: &Board) {}

    /// Called while waiting for the opponent to move.
    fn await_opponent(&mut self) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: (u8, u8), _result: ShotResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: (u8, u8), _result: ShotResult) {}
}

/// Player that fires uniformly at random at cells it knows nothing about.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, tracking: &Board) -> (u8, u8) {
        let mut candidates = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if tracking.get(x, y) == Cell::Unknown {
                    candidates.push((x, y));
                }
            }
        }
        if candidates.is_empty() {
            // Unreachable while the game is in progress: a fully known
            // tracking board has no segments left afloat.
            return (0, 0);
        }
        candidates[rng.random_range(0..candidates.len())]
    }
}
