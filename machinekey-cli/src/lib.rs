//! Command-line front end for machine-bound license keys.
//!
//! Exposes the argument parser and command handlers so they can be driven
//! from tests without spawning the binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use machinekey_dmi::{DmiTable, Dmidecode, InventorySource, StaticInventory};
use machinekey_license::{derive_from_inventory, LicenseConfig, LicenseVerifier};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "machinekey")]
#[command(about = "Derive and verify machine-bound license keys")]
pub struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print this machine's 80-character fingerprint
    Fingerprint {
        /// Read captured dmidecode output instead of running dmidecode
        #[arg(long)]
        dmi_file: Option<PathBuf>,
    },

    /// Print the license key this machine requires
    Key {
        /// Read captured dmidecode output instead of running dmidecode
        #[arg(long)]
        dmi_file: Option<PathBuf>,

        /// Print fingerprint and key as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify the configured license key against this machine
    Check {
        /// Read captured dmidecode output instead of running dmidecode
        #[arg(long)]
        dmi_file: Option<PathBuf>,

        /// Path to config.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Expected license key; overrides the config file
        #[arg(long)]
        license_key: Option<String>,
    },

    /// Print the parsed inventory as JSON
    Inventory {
        /// Read captured dmidecode output instead of running dmidecode
        #[arg(long)]
        dmi_file: Option<PathBuf>,
    },
}

/// Output of `machinekey key --json`.
#[derive(Debug, Serialize)]
pub struct KeyReport {
    pub fingerprint: String,
    pub license_key: String,
}

/// Picks the captured dump when given, otherwise the live `dmidecode`.
pub fn inventory_source(dmi_file: Option<&Path>) -> Result<Box<dyn InventorySource>> {
    match dmi_file {
        Some(path) => {
            let source = StaticInventory::from_file(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(Box::new(source))
        }
        None => Ok(Box::new(Dmidecode::new())),
    }
}

fn read_inventory(dmi_file: Option<&Path>) -> Result<String> {
    let source = inventory_source(dmi_file)?;
    Ok(machinekey_dmi::read_checked(&source)?)
}

/// Runs `command` and returns the text to print on success.
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Fingerprint { dmi_file } => {
            let license = derive_from_inventory(&read_inventory(dmi_file.as_deref())?)?;
            Ok(license.fingerprint().to_string())
        }
        Command::Key { dmi_file, json } => {
            let license = derive_from_inventory(&read_inventory(dmi_file.as_deref())?)?;
            if *json {
                let report = KeyReport {
                    fingerprint: license.fingerprint().to_string(),
                    license_key: license.license_key().to_string(),
                };
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(license.license_key().to_string())
            }
        }
        Command::Check {
            dmi_file,
            config,
            license_key,
        } => {
            let config = match license_key {
                Some(key) => LicenseConfig::new(key.as_str()),
                None => LicenseConfig::load(config.as_deref())
                    .context("no license key configured")?,
            };
            let verifier = LicenseVerifier::new(inventory_source(dmi_file.as_deref())?, config);
            verifier.verify()?;
            Ok("license valid".to_string())
        }
        Command::Inventory { dmi_file } => {
            let table = DmiTable::parse(&read_inventory(dmi_file.as_deref())?)?;
            Ok(serde_json::to_string_pretty(&table)?)
        }
    }
}
