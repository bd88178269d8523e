//! License keys derived from a machine fingerprint.

use std::fmt;

use machinekey_crypto::MachineKeyPair;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LicenseResult;
use crate::fingerprint::Fingerprint;
use crate::identity::MachineIdentity;

/// A base-58 check encoded license key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseKey(String);

impl LicenseKey {
    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison with a configured key.
    #[must_use]
    pub fn matches(&self, expected: &str) -> bool {
        self.0 == expected
    }
}

impl fmt::Display for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything derived for one machine: fingerprint, key pair and license key.
#[derive(Debug, Clone)]
pub struct MachineLicense {
    fingerprint: Fingerprint,
    key_pair: MachineKeyPair,
    license_key: LicenseKey,
}

impl MachineLicense {
    /// Derives the license for `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::FingerprintDerivation`](crate::LicenseError::FingerprintDerivation)
    /// or [`LicenseError::KeyDerivation`](crate::LicenseError::KeyDerivation).
    pub fn derive(identity: &MachineIdentity) -> LicenseResult<Self> {
        Self::from_fingerprint(identity.fingerprint()?)
    }

    /// Derives the license for an already computed fingerprint.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::KeyDerivation`](crate::LicenseError::KeyDerivation)
    /// if the fingerprint is not hex or too short to seed the key.
    pub fn from_fingerprint(fingerprint: Fingerprint) -> LicenseResult<Self> {
        let mut entropy = fingerprint.entropy()?;
        let key_pair = MachineKeyPair::derive(&mut entropy)?;
        let license_key = LicenseKey(key_pair.license_key());

        debug!(license_key = %license_key, "derived machine license");

        Ok(Self {
            fingerprint,
            key_pair,
            license_key,
        })
    }

    /// Returns the fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Returns the key pair.
    #[must_use]
    pub fn key_pair(&self) -> &MachineKeyPair {
        &self.key_pair
    }

    /// Returns the license key.
    #[must_use]
    pub fn license_key(&self) -> &LicenseKey {
        &self.license_key
    }
}
