//! Parsed inventory records and lookups over them.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{DmiError, DmiResult};
use crate::parser;

/// One SMBIOS structure as printed by `dmidecode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryRecord {
    handle: String,
    type_code: u8,
    size: u32,
    name: String,
    fields: BTreeMap<String, String>,
}

impl InventoryRecord {
    pub(crate) fn new(handle: &str, type_code: u8, size: u32, name: &str) -> Self {
        Self {
            handle: handle.to_string(),
            type_code,
            size,
            name: name.to_string(),
            fields: BTreeMap::new(),
        }
    }

    pub(crate) fn set_field(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    /// Returns the record handle.
    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Returns the SMBIOS type code.
    #[must_use]
    pub fn type_code(&self) -> u8 {
        self.type_code
    }

    /// Returns the structure size in bytes.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the display name (the line after the header).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a field value. Array fields hold their entries joined by
    /// [`ARRAY_SEPARATOR`](crate::ARRAY_SEPARATOR).
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns all fields.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

/// Record selector for [`DmiTable::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Match on the SMBIOS type code.
    Type(u8),
    /// Match on the display name, e.g. `System Information`.
    Name(&'a str),
    /// Match on an arbitrary field value.
    Field { key: &'a str, value: &'a str },
}

impl Selector<'_> {
    fn matches(&self, record: &InventoryRecord) -> bool {
        match *self {
            Self::Type(code) => record.type_code == code,
            Self::Name(name) => record.name == name,
            Self::Field { key, value } => record.field(key) == Some(value),
        }
    }
}

/// All records recovered from one `dmidecode` run, keyed by handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DmiTable {
    records: BTreeMap<String, InventoryRecord>,
}

impl DmiTable {
    /// Parses raw `dmidecode` output.
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Parse`] if no record could be recovered.
    pub fn parse(output: &str) -> DmiResult<Self> {
        parser::parse(output)
    }

    pub(crate) fn from_records(records: BTreeMap<String, InventoryRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record with the given handle.
    #[must_use]
    pub fn get(&self, handle: &str) -> Option<&InventoryRecord> {
        self.records.get(handle)
    }

    /// Iterates records in handle order.
    pub fn records(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.records.values()
    }

    /// Finds the first record, in handle order, matching `selector`.
    ///
    /// `Ok(None)` means the table holds data but nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Lookup`] if the table is empty.
    pub fn find(&self, selector: Selector<'_>) -> DmiResult<Option<&InventoryRecord>> {
        if self.records.is_empty() {
            return Err(DmiError::Lookup);
        }
        Ok(self.records.values().find(|r| selector.matches(r)))
    }

    /// Finds a record by SMBIOS type code.
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Lookup`] if the table is empty.
    pub fn search_by_type(&self, type_code: u8) -> DmiResult<Option<&InventoryRecord>> {
        self.find(Selector::Type(type_code))
    }

    /// Finds a record by display name.
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Lookup`] if the table is empty.
    pub fn search_by_name(&self, name: &str) -> DmiResult<Option<&InventoryRecord>> {
        self.find(Selector::Name(name))
    }
}
