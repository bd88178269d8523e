//! Error types for the licensing module.

use machinekey_crypto::CryptoError;
use machinekey_dmi::DmiError;
use thiserror::Error;

/// Licensing-specific errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Inventory could not be collected or parsed.
    #[error("inventory error: {0}")]
    Dmi(#[from] DmiError),

    /// System UUID or processor ID is missing.
    #[error("machine identity unavailable: {0}")]
    IdentityUnavailable(String),

    /// Identifier reordering did not produce an 80-character fingerprint.
    #[error("fingerprint derivation failed: {0}")]
    FingerprintDerivation(String),

    /// The fingerprint could not be turned into a key pair.
    #[error("key derivation failed: {0}")]
    KeyDerivation(#[from] CryptoError),

    /// The configured key does not belong to this machine.
    #[error("invalid license key")]
    Mismatch,

    /// No usable license key is configured.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML.
    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
