use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotResult;
use crate::player::Player;
use crate::protocol::Move;
use crate::ui;

/// Human player on the console: shows both boards each turn and prompts for
/// a move until one parses.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng, _tracking: &Board) -> (u8, u8) {
        loop {
            print!("Your turn: ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                continue;
            }
            match Move::parse(line.trim()) {
                Some(mv) => return (mv.x, mv.y),
                None => println!("This move is incorrect"),
            }
        }
    }

    fn observe_boards(&mut self, own: &Board, tracking: &Board) {
        ui::print_board_pair(own, tracking);
    }

    fn await_opponent(&mut self) {
        println!("Waiting for turn...");
    }

    fn handle_shot_result(&mut self, _target: (u8, u8), result: ShotResult) {
        match result {
            ShotResult::Miss => println!("Miss!"),
            ShotResult::Hit => println!("Hit!"),
            ShotResult::Kill => println!("Kill!"),
        }
    }

    fn handle_opponent_shot(&mut self, target: (u8, u8), _result: ShotResult) {
        let (x, y) = target;
        println!("Shot to {}", Move { x, y });
    }
}
