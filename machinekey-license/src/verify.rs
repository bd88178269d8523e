//! License verification.
//!
//! The inventory is parsed, the machine license re-derived, and its key
//! compared with the configured one. Every failure is fatal to the caller;
//! none are retried because the pipeline is deterministic.

use machinekey_dmi::{read_checked, DmiTable, InventorySource};
use tracing::{debug, info, warn};

use crate::config::LicenseConfig;
use crate::error::{LicenseError, LicenseResult};
use crate::identity::MachineIdentity;
use crate::key::MachineLicense;

/// Derives the machine license from raw `dmidecode` output.
///
/// # Errors
///
/// Returns the first failing stage's error.
pub fn derive_from_inventory(inventory: &str) -> LicenseResult<MachineLicense> {
    let table = DmiTable::parse(inventory)?;
    let identity = MachineIdentity::from_table(&table)?;
    MachineLicense::derive(&identity)
}

/// Checks `expected` against the license derived from `inventory`.
///
/// # Errors
///
/// Returns [`LicenseError::Mismatch`] if the keys differ, or the error of
/// whichever derivation stage failed.
pub fn verify_inventory(inventory: &str, expected: &str) -> LicenseResult<MachineLicense> {
    let license = derive_from_inventory(inventory)?;
    if license.license_key().matches(expected) {
        Ok(license)
    } else {
        Err(LicenseError::Mismatch)
    }
}

/// Verifies the configured key against an inventory source.
#[derive(Debug)]
pub struct LicenseVerifier<S> {
    source: S,
    config: LicenseConfig,
}

impl<S: InventorySource> LicenseVerifier<S> {
    /// Creates a verifier.
    pub fn new(source: S, config: LicenseConfig) -> Self {
        Self { source, config }
    }

    /// Returns the config.
    #[must_use]
    pub fn config(&self) -> &LicenseConfig {
        &self.config
    }

    /// Reads the inventory and derives this machine's license.
    ///
    /// # Errors
    ///
    /// Returns an error if the source needs root and the process is not
    /// root, or if any derivation stage fails.
    pub fn machine_license(&self) -> LicenseResult<MachineLicense> {
        derive_from_inventory(&self.read_inventory()?)
    }

    /// Runs the full check.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Mismatch`] or the upstream error.
    pub fn verify(&self) -> LicenseResult<MachineLicense> {
        let result = self
            .read_inventory()
            .and_then(|inventory| verify_inventory(&inventory, &self.config.license_key));

        match result {
            Ok(license) => {
                info!("license verified");
                Ok(license)
            }
            Err(e) => {
                warn!("license verification failed");
                debug!("license verification failure cause: {e}");
                Err(e)
            }
        }
    }

    fn read_inventory(&self) -> LicenseResult<String> {
        Ok(read_checked(&self.source)?)
    }

    /// True only when [`verify`](Self::verify) succeeds.
    #[must_use]
    pub fn is_licensed(&self) -> bool {
        self.verify().is_ok()
    }
}
