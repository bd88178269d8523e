//! Deterministic P-256 key pair generation.
//!
//! The private scalar is produced with the "extra random bits" method of
//! FIPS 186-4 B.4.1: read `256/8 + 8` bytes, interpret them big-endian as
//! `c`, and take `d = (c mod (n - 1)) + 1`. The method never rejects input,
//! so exactly [`SEED_LEN`] bytes are consumed from the entropy source.

use p256::elliptic_curve::bigint::{Encoding, NonZero, U320};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};
use tracing::debug;
use zeroize::Zeroizing;

use crate::encoding;
use crate::entropy::EntropySource;
use crate::error::{CryptoError, CryptoResult};

/// Size of a P-256 field element in bytes.
pub const FIELD_LEN: usize = 32;

/// Bytes of entropy consumed per key pair.
pub const SEED_LEN: usize = FIELD_LEN + 8;

/// Group order of P-256 minus one, widened to the seed size.
const ORDER_MINUS_ONE: U320 = U320::from_be_hex(
    "0000000000000000FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632550",
);

/// A P-256 key pair bound to one machine fingerprint.
#[derive(Clone)]
pub struct MachineKeyPair {
    secret: SecretKey,
    public: PublicKey,
    encoded_public: Vec<u8>,
}

impl MachineKeyPair {
    /// Generates a key pair from `entropy`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EntropyExhausted`] if the source holds fewer
    /// than [`SEED_LEN`] bytes, or [`CryptoError::KeyDerivation`] if the curve
    /// rejects the resulting scalar.
    pub fn derive(entropy: &mut impl EntropySource) -> CryptoResult<Self> {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        entropy.fill(&mut seed[..])?;

        let modulus = Option::<NonZero<U320>>::from(NonZero::new(ORDER_MINUS_ONE))
            .ok_or_else(|| CryptoError::KeyDerivation("zero group order".to_string()))?;
        let c = U320::from_be_slice(&seed[..]);
        let d = c.rem(&modulus).wrapping_add(&U320::ONE);

        // d < n, so the top eight bytes are zero.
        let scalar = Zeroizing::new(d.to_be_bytes());
        let secret = SecretKey::from_slice(&scalar[SEED_LEN - FIELD_LEN..])
            .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;
        let public = secret.public_key();
        let encoded_public = encode_public_key(&public)?;

        debug!(len = encoded_public.len(), "derived machine key pair");

        Ok(Self {
            secret,
            public,
            encoded_public,
        })
    }

    /// Returns the private key.
    #[must_use]
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    /// Returns the public key.
    #[must_use]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Returns `X || Y`, each coordinate as its minimal big-endian magnitude.
    #[must_use]
    pub fn encoded_public_key(&self) -> &[u8] {
        &self.encoded_public
    }

    /// Encodes the public key as a license key string.
    #[must_use]
    pub fn license_key(&self) -> String {
        encoding::license_key(&self.encoded_public)
    }
}

impl std::fmt::Debug for MachineKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MachineKeyPair")
            .field("secret", &"[REDACTED]")
            .field("public", &hex::encode(&self.encoded_public))
            .finish()
    }
}

/// Concatenates the affine coordinates without a SEC1 tag byte.
///
/// Leading zero bytes of each coordinate are dropped, matching the integer
/// byte form that deployed keys were computed from.
fn encode_public_key(public: &PublicKey) -> CryptoResult<Vec<u8>> {
    let point = public.to_encoded_point(false);
    let (Some(x), Some(y)) = (point.x(), point.y()) else {
        return Err(CryptoError::KeyDerivation(
            "public key has no affine coordinates".to_string(),
        ));
    };

    let mut out = Vec::with_capacity(2 * FIELD_LEN);
    out.extend_from_slice(trim_leading_zeros(x));
    out.extend_from_slice(trim_leading_zeros(y));
    Ok(out)
}

fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
