//! Record splitting and the per-record body state machine.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{DmiError, DmiResult};
use crate::table::{DmiTable, InventoryRecord};
use crate::token::{self, Token};

/// Separator between entries of an array field.
pub const ARRAY_SEPARATOR: &str = "\t\t";

/// Blocks shorter than this are incomplete or inactive structures.
const MIN_RECORD_LINES: usize = 3;

/// Body parser state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Reading `key: value` fields.
    Scanning,
    /// Collecting double-tab entries for `key`.
    InBlock { key: String, items: String },
}

impl State {
    /// Feeds one body line, updating `record` and returning the next state.
    ///
    /// A line that ends an array block is re-lexed as an ordinary body line,
    /// so no line is lost on the transition.
    pub fn step(self, line: &str, record: &mut InventoryRecord) -> Self {
        let in_block = matches!(self, Self::InBlock { .. });

        match (self, token::body(line, in_block)) {
            (Self::InBlock { key, mut items }, Token::ArrayContinuation { value }) => {
                if !items.is_empty() {
                    items.push_str(ARRAY_SEPARATOR);
                }
                items.push_str(value);
                record.set_field(&key, &items);
                Self::InBlock { key, items }
            }
            (_, Token::Field { key, value }) => {
                record.set_field(key, value);
                Self::Scanning
            }
            (_, Token::ArrayHeader { key }) => Self::InBlock {
                key: key.to_string(),
                items: String::new(),
            },
            _ => Self::Scanning,
        }
    }
}

/// Parses one blank-line-separated block. `None` means the block is skipped.
fn parse_record(block: &str) -> Option<InventoryRecord> {
    let lines: Vec<&str> = block.split('\n').collect();
    if lines.len() < MIN_RECORD_LINES {
        return None;
    }

    let header = token::header(lines[0])?;
    let mut record = InventoryRecord::new(header.handle, header.type_code, header.size, lines[1]);

    let mut state = State::Scanning;
    for line in &lines[2..] {
        state = state.step(line, &mut record);
    }

    Some(record)
}

/// Parses complete `dmidecode` output into a [`DmiTable`].
///
/// Malformed or short blocks are skipped. A later block with the same handle
/// replaces an earlier one.
///
/// # Errors
///
/// Returns [`DmiError::Parse`] if no block yields a record.
pub fn parse(output: &str) -> DmiResult<DmiTable> {
    let mut records = BTreeMap::new();
    let mut skipped = 0usize;

    for block in output.split("\n\n") {
        match parse_record(block) {
            Some(record) => {
                records.insert(record.handle().to_string(), record);
            }
            None => skipped += 1,
        }
    }

    debug!(records = records.len(), skipped, "parsed dmidecode output");

    if records.is_empty() {
        return Err(DmiError::Parse);
    }
    Ok(DmiTable::from_records(records))
}
