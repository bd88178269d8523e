//! License key encoding: HASH160, versioned payload, checksum, base-58.

use num_bigint::BigUint;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Version byte prepended to the public key hash.
pub const VERSION: u8 = 0x00;

/// Number of checksum bytes appended to the payload.
pub const CHECKSUM_LEN: usize = 4;

/// Length of the public key hash.
pub const HASH_LEN: usize = 20;

/// Base-58 alphabet without `0`, `O`, `I` and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// RIPEMD-160 of SHA-256 of the encoded public key.
#[must_use]
pub fn hash_pub_key(pub_key: &[u8]) -> [u8; HASH_LEN] {
    let sha = Sha256::digest(pub_key);
    let ripe = Ripemd160::digest(sha);

    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(&ripe);
    out
}

/// First [`CHECKSUM_LEN`] bytes of double SHA-256.
#[must_use]
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);

    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second[..CHECKSUM_LEN]);
    out
}

/// Encodes `input` in base-58.
///
/// The digits are those of `input` read as one big-endian unsigned integer.
/// Any non-empty input then gets exactly one leading `1`, however many zero
/// bytes it starts with. Issued license keys depend on this, so it must not
/// be changed to the usual one-`1`-per-zero-byte rule.
#[must_use]
pub fn base58_encode(input: &[u8]) -> String {
    if input.is_empty() {
        return String::new();
    }

    let start = input.iter().position(|&b| b != 0).unwrap_or(input.len());
    let mut out = String::with_capacity(input.len() * 138 / 100 + 2);
    out.push(char::from(ALPHABET[0]));

    let magnitude = &input[start..];
    if !magnitude.is_empty() {
        let digits = BigUint::from_bytes_be(magnitude).to_radix_be(58);
        out.extend(digits.iter().map(|&d| char::from(ALPHABET[usize::from(d)])));
    }
    out
}

/// Builds the license key for an encoded public key.
#[must_use]
pub fn license_key(pub_key: &[u8]) -> String {
    let mut payload = Vec::with_capacity(1 + HASH_LEN + CHECKSUM_LEN);
    payload.push(VERSION);
    payload.extend_from_slice(&hash_pub_key(pub_key));

    let sum = checksum(&payload);
    payload.extend_from_slice(&sum);

    base58_encode(&payload)
}
