use crate::common::ShotResult;
use crate::protocol::Move;

/// Point-to-point exchange of moves and shot results.
///
/// Every message has a fixed wire length, so receivers read exactly the
/// bytes of the message type the turn order says comes next.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send_move(&mut self, mv: Move) -> anyhow::Result<()>;
    async fn recv_move(&mut self) -> anyhow::Result<Move>;
    async fn send_result(&mut self, res: ShotResult) -> anyhow::Result<()>;
    async fn recv_result(&mut self) -> anyhow::Result<ShotResult>;
}

pub mod in_memory;
pub mod tcp;
