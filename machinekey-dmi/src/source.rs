//! Where inventory text comes from.
//!
//! The parser itself is pure; this module holds the thin I/O seam around it:
//! running `dmidecode`, replaying captured output, and the privilege check
//! that reading SMBIOS tables needs.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{DmiError, DmiResult};

/// Name of the inventory tool.
pub const DMIDECODE_BINARY: &str = "dmidecode";

/// Directories probed for [`DMIDECODE_BINARY`], in order.
pub const SEARCH_DIRS: [&str; 3] = ["/sbin", "/usr/sbin", "/usr/local/sbin"];

/// A provider of raw `dmidecode` text.
pub trait InventorySource {
    /// Returns the complete inventory output.
    fn read_inventory(&self) -> DmiResult<String>;

    /// Whether reading requires root privileges.
    fn requires_root(&self) -> bool {
        false
    }
}

impl<T: InventorySource + ?Sized> InventorySource for Box<T> {
    fn read_inventory(&self) -> DmiResult<String> {
        (**self).read_inventory()
    }

    fn requires_root(&self) -> bool {
        (**self).requires_root()
    }
}

/// Runs the system `dmidecode` binary.
#[derive(Debug, Clone)]
pub struct Dmidecode {
    binary: String,
    search_dirs: Vec<PathBuf>,
}

impl Default for Dmidecode {
    fn default() -> Self {
        Self {
            binary: DMIDECODE_BINARY.to_string(),
            search_dirs: SEARCH_DIRS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Dmidecode {
    /// Creates a runner probing the standard sbin directories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner probing custom directories.
    #[must_use]
    pub fn with_search_dirs(binary: &str, dirs: Vec<PathBuf>) -> Self {
        Self {
            binary: binary.to_string(),
            search_dirs: dirs,
        }
    }

    /// Returns the first probed path that exists and is not a directory.
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::BinaryNotFound`] when no candidate exists.
    pub fn find_binary(&self) -> DmiResult<PathBuf> {
        self.search_dirs
            .iter()
            .map(|dir| dir.join(&self.binary))
            .find(|candidate| is_file(candidate))
            .ok_or_else(|| DmiError::BinaryNotFound(self.binary.clone()))
    }
}

fn is_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| !m.is_dir())
}

impl InventorySource for Dmidecode {
    fn read_inventory(&self) -> DmiResult<String> {
        let bin = self.find_binary()?;
        debug!("running {}", bin.display());

        let output = Command::new(&bin).output()?;
        if !output.status.success() {
            return Err(DmiError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| DmiError::InvalidOutput(e.to_string()))
    }

    fn requires_root(&self) -> bool {
        true
    }
}

/// Inventory text captured earlier, e.g. from `dmidecode > dump.txt`.
#[derive(Debug, Clone)]
pub struct StaticInventory {
    text: String,
}

impl StaticInventory {
    /// Wraps in-memory text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads a dump file.
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Io`] if the file cannot be read.
    pub fn from_file(path: &Path) -> DmiResult<Self> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }
}

impl InventorySource for StaticInventory {
    fn read_inventory(&self) -> DmiResult<String> {
        Ok(self.text.clone())
    }
}

/// True when the effective user is root.
#[cfg(unix)]
#[must_use]
pub fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_root() -> bool {
    false
}

/// Fails unless the effective user is root.
///
/// # Errors
///
/// Returns [`DmiError::InsufficientPrivilege`] for non-root users.
pub fn require_root() -> DmiResult<()> {
    if is_root() {
        Ok(())
    } else {
        Err(DmiError::InsufficientPrivilege)
    }
}

/// Reads `source`, checking privileges first when it needs root.
///
/// # Errors
///
/// Returns [`DmiError::InsufficientPrivilege`] before touching a source that
/// requires root, or the source's own read error.
pub fn read_checked<S: InventorySource + ?Sized>(source: &S) -> DmiResult<String> {
    if source.requires_root() {
        require_root()?;
    }
    source.read_inventory()
}
