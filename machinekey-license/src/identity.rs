//! Hardware identifiers read from the inventory.

use machinekey_dmi::{DmiError, DmiTable, TYPE_PROCESSOR, TYPE_SYSTEM};
use serde::{Deserialize, Serialize};

use crate::error::{LicenseError, LicenseResult};
use crate::fingerprint::Fingerprint;

/// Field of the System Information record holding the system UUID.
pub const UUID_FIELD: &str = "UUID";

/// Field of the Processor Information record holding the CPU ID.
pub const CPU_ID_FIELD: &str = "ID";

/// The two identifiers a license is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineIdentity {
    system_uuid: String,
    cpu_id: String,
}

impl MachineIdentity {
    /// Creates an identity from raw identifiers as `dmidecode` prints them.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::IdentityUnavailable`] if either is empty.
    pub fn new(system_uuid: impl Into<String>, cpu_id: impl Into<String>) -> LicenseResult<Self> {
        let system_uuid = system_uuid.into();
        let cpu_id = cpu_id.into();

        if system_uuid.is_empty() {
            return Err(LicenseError::IdentityUnavailable("system UUID is empty".into()));
        }
        if cpu_id.is_empty() {
            return Err(LicenseError::IdentityUnavailable("processor ID is empty".into()));
        }

        Ok(Self {
            system_uuid,
            cpu_id,
        })
    }

    /// Reads the System Information UUID and the Processor Information ID.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::IdentityUnavailable`] if the table is empty or
    /// either field is missing or empty.
    pub fn from_table(table: &DmiTable) -> LicenseResult<Self> {
        let system_uuid = read_field(table, TYPE_SYSTEM, UUID_FIELD)?;
        let cpu_id = read_field(table, TYPE_PROCESSOR, CPU_ID_FIELD)?;
        Self::new(system_uuid, cpu_id)
    }

    /// Returns the system UUID.
    #[must_use]
    pub fn system_uuid(&self) -> &str {
        &self.system_uuid
    }

    /// Returns the processor ID.
    #[must_use]
    pub fn cpu_id(&self) -> &str {
        &self.cpu_id
    }

    /// Derives this machine's fingerprint.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::FingerprintDerivation`] if the identifiers are
    /// too short or do not splice into a fingerprint of the expected length.
    pub fn fingerprint(&self) -> LicenseResult<Fingerprint> {
        Fingerprint::derive(self)
    }
}

fn read_field(table: &DmiTable, type_code: u8, field: &str) -> LicenseResult<String> {
    let record = table
        .search_by_type(type_code)
        .map_err(|e: DmiError| LicenseError::IdentityUnavailable(e.to_string()))?;

    Ok(record
        .and_then(|r| r.field(field))
        .unwrap_or_default()
        .to_string())
}
