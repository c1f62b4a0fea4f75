use log::{debug, info};
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotResult;
use crate::player::Player;
use crate::protocol::Move;
use crate::transport::Transport;

/// Terminal state of a finished game, from this side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// One side of a running game: the own board, the deduced opponent view and
/// the turn loop driving both over a transport.
pub struct Session {
    my_board: Board,
    tracking: Board,
    player: Box<dyn Player>,
    transport: Box<dyn Transport>,
}

impl Session {
    pub fn new(my_board: Board, player: Box<dyn Player>, transport: Box<dyn Transport>) -> Self {
        Self {
            my_board,
            tracking: Board::unknown(),
            player,
            transport,
        }
    }

    /// Play until one board is fully destroyed.
    ///
    /// Initiative stays with a shooter that hits or kills and passes to the
    /// opponent on a miss. The server side starts without initiative, the
    /// client side with it.
    pub async fn run(&mut self, rng: &mut SmallRng, mut my_initiative: bool) -> anyhow::Result<Outcome> {
        while !self.ended() {
            self.player.observe_boards(&self.my_board, &self.tracking);
            if my_initiative {
                let (x, y) = self.player.select_target(rng, &self.tracking);
                let mv = Move { x, y };
                debug!("firing at {}", mv);
                self.transport.send_move(mv).await?;
                let res = self.transport.recv_result().await?;
                debug!("result for {}: {:?}", mv, res);
                match res {
                    ShotResult::Miss => self.tracking.mark_miss(x, y),
                    ShotResult::Hit => self.tracking.mark_hit(x, y),
                    ShotResult::Kill => self.tracking.mark_kill(x, y),
                }
                self.player.handle_shot_result((x, y), res);
                my_initiative = !matches!(res, ShotResult::Miss);
            } else {
                self.player.await_opponent();
                let mv = self.transport.recv_move().await?;
                let res = self.my_board.shoot(mv.x, mv.y);
                debug!("incoming shot at {}: {:?}", mv, res);
                self.player.handle_opponent_shot((mv.x, mv.y), res);
                self.transport.send_result(res).await?;
                my_initiative = matches!(res, ShotResult::Miss);
            }
        }

        let outcome = if self.my_board.is_destroyed() {
            Outcome::Lost
        } else {
            Outcome::Won
        };
        info!("game over: {:?}", outcome);
        Ok(outcome)
    }

    fn ended(&self) -> bool {
        self.my_board.is_destroyed() || self.tracking.is_destroyed()
    }

    /// This side's own board.
    pub fn my_board(&self) -> &Board {
        &self.my_board
    }

    /// The deduced opponent view.
    pub fn tracking_board(&self) -> &Board {
        &self.tracking
    }
}
