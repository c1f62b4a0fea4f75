//! Common types: shot outcomes and protocol-level faults.

use core::fmt;

/// Outcome of a shot, as reported by the board that was fired upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// No ship segment at the target cell.
    Miss,
    /// A ship segment was destroyed, but its ship still has segments left.
    Hit,
    /// The shot destroyed the last segment of a ship.
    Kill,
}

/// Faults in data received from the peer. The shared understanding of the
/// game state cannot be trusted after one of these, so sessions treat them
/// as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// A 2-byte move whose letter or digit is out of range.
    MalformedMove([u8; 2]),
    /// A shot-result byte outside the ASCII digits `'0'..='2'`.
    MalformedResult(u8),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MalformedMove(bytes) => {
                write!(
                    f,
                    "malformed move encoding: {:?}",
                    String::from_utf8_lossy(bytes)
                )
            }
            ProtocolError::MalformedResult(byte) => {
                write!(f, "shot result code out of range: 0x{:02x}", byte)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}
