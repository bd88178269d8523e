//! Deterministic entropy for key generation.
//!
//! Key generation normally draws from a CSPRNG. Here the byte source is the
//! decoded machine fingerprint, so the same machine always yields the same
//! key pair. The stream is finite: once consumed it cannot be refilled.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, CryptoResult};

/// A source of bytes consumed by key generation.
pub trait EntropySource {
    /// Fills `dest` completely from the source.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EntropyExhausted`] if fewer than `dest.len()`
    /// bytes remain. Nothing is consumed in that case.
    fn fill(&mut self, dest: &mut [u8]) -> CryptoResult<()>;

    /// Bytes left to read.
    fn remaining(&self) -> usize;
}

/// A fixed byte sequence with a single read cursor.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SnEntropy {
    bytes: Vec<u8>,
    cursor: usize,
}

impl SnEntropy {
    /// Creates a stream over raw bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Creates a stream over a hex-encoded fingerprint.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidHex`] if `sn` is not valid hex.
    pub fn from_hex(sn: &str) -> CryptoResult<Self> {
        hex::decode(sn)
            .map(Self::new)
            .map_err(|e| CryptoError::InvalidHex(e.to_string()))
    }
}

impl EntropySource for SnEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> CryptoResult<()> {
        let available = self.remaining();
        if dest.len() > available {
            return Err(CryptoError::EntropyExhausted {
                needed: dest.len(),
                available,
            });
        }
        let end = self.cursor + dest.len();
        dest.copy_from_slice(&self.bytes[self.cursor..end]);
        self.cursor = end;
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }
}

impl std::fmt::Debug for SnEntropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnEntropy")
            .field("bytes", &"[REDACTED]")
            .field("cursor", &self.cursor)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_in_order() {
        let mut s = SnEntropy::new(vec![1, 2, 3, 4, 5]);
        let mut a = [0u8; 2];
        let mut b = [0u8; 3];
        s.fill(&mut a).unwrap();
        s.fill(&mut b).unwrap();
        assert_eq!(a, [1, 2]);
        assert_eq!(b, [3, 4, 5]);
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn short_read_consumes_nothing() {
        let mut s = SnEntropy::new(vec![1, 2]);
        let mut buf = [0u8; 3];
        assert!(matches!(
            s.fill(&mut buf),
            Err(CryptoError::EntropyExhausted {
                needed: 3,
                available: 2
            })
        ));
        assert_eq!(s.remaining(), 2);
    }

    #[test]
    fn debug_redacts_bytes() {
        let s = SnEntropy::new(vec![0xAB; 4]);
        let dbg = format!("{s:?}");
        assert!(dbg.contains("REDACTED"));
        assert!(!dbg.contains("171"));
    }
}
