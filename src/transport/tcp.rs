use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::common::ShotResult;
use crate::protocol::{self, Move};
use crate::transport::Transport;

/// Default timeout for network operations. Turns wait on a human at the
/// other end, so this is generous.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self::with_timeout(stream, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self {
            stream,
            timeout_duration,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }

    async fn write_exact(&mut self, data: &[u8]) -> anyhow::Result<()> {
        let op = self.stream.write_all(data);
        timeout(self.timeout_duration, op)
            .await
            .map_err(|_| anyhow::anyhow!("send timeout after {:?}", self.timeout_duration))?
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::BrokenPipe
                    || e.kind() == std::io::ErrorKind::ConnectionReset
                {
                    anyhow::anyhow!("connection closed by peer")
                } else {
                    anyhow::anyhow!("write error: {}", e)
                }
            })
    }

    async fn read_exact(&mut self, buf: &mut [u8]) -> anyhow::Result<()> {
        let op = self.stream.read_exact(buf);
        timeout(self.timeout_duration, op)
            .await
            .map_err(|_| anyhow::anyhow!("receive timeout after {:?}", self.timeout_duration))?
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::UnexpectedEof
                    || e.kind() == std::io::ErrorKind::ConnectionReset
                {
                    anyhow::anyhow!("connection closed by peer")
                } else {
                    anyhow::anyhow!("read error: {}", e)
                }
            })?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send_move(&mut self, mv: Move) -> anyhow::Result<()> {
        self.write_exact(&mv.encode()).await
    }

    async fn recv_move(&mut self) -> anyhow::Result<Move> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf).await?;
        Ok(Move::decode(buf)?)
    }

    async fn send_result(&mut self, res: ShotResult) -> anyhow::Result<()> {
        self.write_exact(&[protocol::encode_result(res)]).await
    }

    async fn recv_result(&mut self) -> anyhow::Result<ShotResult> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf).await?;
        Ok(protocol::decode_result(buf[0])?)
    }
}
