//! Machine-bound licensing.
//!
//! A license is bound to one machine through two SMBIOS identifiers:
//!
//! 1. `dmidecode` output is parsed into records ([`machinekey_dmi`]).
//! 2. The System Information UUID and Processor Information ID form the
//!    [`MachineIdentity`].
//! 3. The identifiers are spliced into an 80-character [`Fingerprint`].
//! 4. The decoded fingerprint seeds a P-256 key pair ([`machinekey_crypto`]).
//! 5. The public key is encoded as a base-58 check [`LicenseKey`].
//!
//! [`LicenseVerifier`] compares the derived key with the configured one.
//! The same machine always yields the same key; any failure means the
//! license is invalid.

mod config;
mod error;
mod fingerprint;
mod identity;
mod key;
mod verify;

pub use config::{LicenseConfig, CONFIG_FILE, LICENSE_KEY_ENV};
pub use error::{LicenseError, LicenseResult};
pub use fingerprint::{Fingerprint, FINGERPRINT_LEN};
pub use identity::{MachineIdentity, CPU_ID_FIELD, UUID_FIELD};
pub use key::{LicenseKey, MachineLicense};
pub use verify::{derive_from_inventory, verify_inventory, LicenseVerifier};
