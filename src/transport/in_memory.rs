use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::common::ShotResult;
use crate::protocol::{self, Move};
use crate::transport::Transport;

/// In-process transport carrying the same byte-level wire format as the TCP
/// transport. Used by tests and single-process games.
pub struct InMemoryTransport {
    recv_queue: Arc<Mutex<VecDeque<u8>>>,
    send_queue: Arc<Mutex<VecDeque<u8>>>,
}

impl InMemoryTransport {
    /// Two connected endpoints; bytes written on one side are read in order
    /// on the other.
    pub fn pair() -> (Self, Self) {
        let q1 = Arc::new(Mutex::new(VecDeque::new()));
        let q2 = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                recv_queue: q1.clone(),
                send_queue: q2.clone(),
            },
            Self {
                recv_queue: q2,
                send_queue: q1,
            },
        )
    }

    fn write_bytes(&self, data: &[u8]) -> anyhow::Result<()> {
        let mut queue = self
            .send_queue
            .lock()
            .map_err(|_| anyhow::anyhow!("transport queue poisoned"))?;
        queue.extend(data.iter().copied());
        Ok(())
    }

    async fn read_bytes(&self, buf: &mut [u8]) -> anyhow::Result<()> {
        loop {
            {
                let mut queue = self
                    .recv_queue
                    .lock()
                    .map_err(|_| anyhow::anyhow!("transport queue poisoned"))?;
                if queue.len() >= buf.len() {
                    for slot in buf.iter_mut() {
                        if let Some(byte) = queue.pop_front() {
                            *slot = byte;
                        }
                    }
                    return Ok(());
                }
            }
            if Arc::strong_count(&self.recv_queue) == 1 {
                return Err(anyhow::anyhow!("channel closed"));
            }
            yield_now().await;
        }
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send_move(&mut self, mv: Move) -> anyhow::Result<()> {
        self.write_bytes(&mv.encode())
    }

    async fn recv_move(&mut self) -> anyhow::Result<Move> {
        let mut buf = [0u8; 2];
        self.read_bytes(&mut buf).await?;
        Ok(Move::decode(buf)?)
    }

    async fn send_result(&mut self, res: ShotResult) -> anyhow::Result<()> {
        self.write_bytes(&[protocol::encode_result(res)])
    }

    async fn recv_result(&mut self) -> anyhow::Result<ShotResult> {
        let mut buf = [0u8; 1];
        self.read_bytes(&mut buf).await?;
        Ok(protocol::decode_result(buf[0])?)
    }
}
