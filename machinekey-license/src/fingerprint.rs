//! Machine fingerprint (SN) derivation.
//!
//! The processor ID and system UUID are cut into fixed byte ranges and
//! spliced together in a scrambled order. The offsets are part of the
//! license format: changing any of them invalidates every issued key.

use std::fmt;

use machinekey_crypto::SnEntropy;
use serde::{Deserialize, Serialize};

use crate::error::{LicenseError, LicenseResult};
use crate::identity::MachineIdentity;

/// Length of a fingerprint in hex characters.
pub const FINGERPRINT_LEN: usize = 80;

const MIN_CPU_ID_LEN: usize = 11;
const MIN_UUID_LEN: usize = 24;
const MIN_BUFFER_LEN: usize = 45;

/// An 80-character hexadecimal machine fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Derives the fingerprint of `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::FingerprintDerivation`] if the identifiers are
    /// too short to slice or the result is not exactly
    /// [`FINGERPRINT_LEN`] characters.
    pub fn derive(identity: &MachineIdentity) -> LicenseResult<Self> {
        obfuscate(identity.system_uuid(), identity.cpu_id()).map(Self)
    }

    /// Returns the fingerprint text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the fingerprint into a key generation byte stream.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::KeyDerivation`] if the fingerprint is not hex.
    pub fn entropy(&self) -> LicenseResult<SnEntropy> {
        Ok(SnEntropy::from_hex(&self.0)?)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn obfuscate(system_uuid: &str, cpu_id: &str) -> LicenseResult<String> {
    let cpu: Vec<u8> = cpu_id.bytes().filter(|&b| b != b' ').collect();
    let uuid: Vec<u8> = system_uuid.bytes().filter(|&b| b != b'-').collect();

    if cpu.len() < MIN_CPU_ID_LEN || uuid.len() < MIN_UUID_LEN {
        return Err(LicenseError::FingerprintDerivation(format!(
            "identifiers too short (cpu {} bytes, uuid {} bytes)",
            cpu.len(),
            uuid.len()
        )));
    }

    let mut fragments: Vec<&[u8]> = vec![
        &cpu[0..5],
        &cpu[11..],
        &cpu[9..11],
        &cpu[5..9],
        &uuid[7..15],
        &uuid[..7],
        &uuid[24..],
        &uuid[15..24],
    ];
    let buffer = fragments.concat();
    if buffer.len() < MIN_BUFFER_LEN {
        return Err(LicenseError::FingerprintDerivation(format!(
            "intermediate buffer is {} bytes",
            buffer.len()
        )));
    }

    // The list is not cleared first, so the whole buffer is emitted twice.
    fragments.extend([
        &buffer[45..],
        &buffer[18..22],
        &buffer[..5],
        &buffer[43..45],
        &buffer[31..38],
        &buffer[25..31],
        &buffer[38..43],
    ]);
    let sn = fragments.concat();

    if sn.len() != FINGERPRINT_LEN {
        return Err(LicenseError::FingerprintDerivation(format!(
            "expected {FINGERPRINT_LEN} characters, got {}",
            sn.len()
        )));
    }

    String::from_utf8(sn).map_err(|e| LicenseError::FingerprintDerivation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_are_stripped() {
        let a = obfuscate("4C4C4544-0042-3510-8052-B4C04F395A32", "A9 06 08 00 FF FB EB BF").unwrap();
        let b = obfuscate("4C4C4544004235108052B4C04F395A32", "A9060800FFFBEBBF").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn short_cpu_id_does_not_panic() {
        let err = obfuscate("4C4C4544-0042-3510-8052-B4C04F395A32", "A9 06").unwrap_err();
        assert!(matches!(err, LicenseError::FingerprintDerivation(_)));
    }

    #[test]
    fn short_buffer_does_not_panic() {
        // 11 + 24 bytes pass the slice bounds but not the buffer bound.
        let err = obfuscate("123456781234123412341234", "ABCDEFGHIJK").unwrap_err();
        assert!(matches!(err, LicenseError::FingerprintDerivation(_)));
    }
}
