use thiserror::Error;

/// Errors produced while decoding an uplink frame.
///
/// Insufficient input is the only failure mode: every byte value is a valid
/// reading in every position, and the CRC byte is extracted without being
/// verified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("insufficient bytes: need at least {needed}, got {got}")]
    InsufficientBytes { needed: usize, got: usize },
}
