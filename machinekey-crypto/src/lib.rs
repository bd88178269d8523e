//! Deterministic key derivation and license key encoding.
//!
//! The machine fingerprint is decoded into bytes and used as the only
//! entropy for P-256 key generation. The resulting public key is hashed and
//! encoded as a base-58 check string:
//!
//! ```text
//! base58( 0x00 || RIPEMD160(SHA256(X || Y)) || SHA256(SHA256(..))[..4] )
//! ```

mod encoding;
mod entropy;
mod error;
mod keypair;

pub use encoding::{
    base58_encode, checksum, hash_pub_key, license_key, ALPHABET, CHECKSUM_LEN, HASH_LEN, VERSION,
};
pub use entropy::{EntropySource, SnEntropy};
pub use error::{CryptoError, CryptoResult};
pub use keypair::{MachineKeyPair, FIELD_LEN, SEED_LEN};
