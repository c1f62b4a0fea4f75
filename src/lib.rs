mod board;
mod common;
mod config;
mod logging;
mod player;
mod player_cli;
pub mod protocol;
mod session;
pub mod transport;
pub mod ui;

pub use board::{Board, Cell};
pub use common::{ProtocolError, ShotResult};
pub use config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS, TOTAL_SHIP_CELLS};
pub use logging::init_logging;
pub use player::{Player, RandomPlayer};
pub use player_cli::CliPlayer;
pub use protocol::Move;
pub use session::{Outcome, Session};
pub use transport::tcp::TcpTransport;
