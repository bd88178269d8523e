//! Error types for inventory parsing and collection.

use thiserror::Error;

/// Errors raised while reading or querying the hardware inventory.
#[derive(Debug, Error)]
pub enum DmiError {
    /// No record in the inventory text could be parsed.
    #[error("unable to parse dmidecode output")]
    Parse,

    /// The table was queried before any inventory data was loaded.
    #[error("inventory is empty; parse dmidecode output first")]
    Lookup,

    /// The `dmidecode` binary was not found in any probed location.
    #[error("unable to find the '{0}' binary")]
    BinaryNotFound(String),

    /// Spawning or reading from the inventory tool failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The inventory tool exited unsuccessfully.
    #[error("dmidecode exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },

    /// The inventory tool produced output that is not valid UTF-8.
    #[error("invalid dmidecode output: {0}")]
    InvalidOutput(String),

    /// Hardware data requires root privileges.
    #[error("root privileges are required to read hardware information")]
    InsufficientPrivilege,
}

/// Result type for inventory operations.
pub type DmiResult<T> = Result<T, DmiError>;
