//! SMBIOS/DMI inventory parsing.
//!
//! Turns the text printed by `dmidecode` into a table of records keyed by
//! handle. Parsing is split into a line tokenizer ([`token`]) and a small
//! per-record state machine ([`State`]) with two states, `Scanning` and
//! `InBlock`.
//!
//! ```text
//! Handle 0x0001, DMI type 1, 27 bytes     <- header
//! System Information                      <- display name
//! 	UUID: 4C4C4544-0042-3510-8052-B4C04F395A32   <- field
//! 	Flags:                                       <- array header
//! 		FPU (Floating-point unit on-chip)        <- continuation
//! ```

mod error;
mod parser;
mod source;
mod table;
pub mod token;

pub use error::{DmiError, DmiResult};
pub use parser::{parse, State, ARRAY_SEPARATOR};
pub use source::{
    is_root, read_checked, require_root, Dmidecode, InventorySource, StaticInventory,
    DMIDECODE_BINARY, SEARCH_DIRS,
};
pub use table::{DmiTable, InventoryRecord, Selector};

/// SMBIOS type code of the System Information structure.
pub const TYPE_SYSTEM: u8 = 1;

/// SMBIOS type code of the Processor Information structure.
pub const TYPE_PROCESSOR: u8 = 4;
