//! Error types for key derivation.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur while deriving the machine key pair.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The fingerprint is not valid hexadecimal.
    #[error("invalid fingerprint hex: {0}")]
    InvalidHex(String),

    /// The entropy stream ran out before key generation finished.
    #[error("entropy exhausted: needed {needed} bytes, {available} available")]
    EntropyExhausted { needed: usize, available: usize },

    /// The curve rejected the derived scalar or point.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),
}
