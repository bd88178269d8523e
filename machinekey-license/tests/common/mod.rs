//! Shared test helpers for license tests.

#![allow(dead_code)]

pub const SYSTEM_UUID: &str = "4C4C4544-0042-3510-8052-B4C04F395A32";
pub const CPU_ID: &str = "A9 06 08 00 FF FB EB BF";
pub const FINGERPRINT: &str =
    "A9060BEBBFFF800F400423514C4C4544F395A3208052B4C04C00423A90602B4F395A3C4C45420805";
pub const LICENSE_KEY: &str = "1E8T9fYBBUemhnStWepZrYJF8sNz6zsuij";

/// Builds `dmidecode`-style output with one system and one processor record.
pub fn inventory(system_uuid: &str, cpu_id: &str) -> String {
    format!(
        "# dmidecode 3.3\n\
         Getting SMBIOS data from sysfs.\n\
         SMBIOS 3.2.0 present.\n\
         \n\
         Handle 0x0001, DMI type 1, 27 bytes\n\
         System Information\n\
         \tManufacturer: Dell Inc.\n\
         \tProduct Name: PowerEdge R740\n\
         \tUUID: {system_uuid}\n\
         \tWake-up Type: Power Switch\n\
         \n\
         Handle 0x0400, DMI type 4, 48 bytes\n\
         Processor Information\n\
         \tSocket Designation: CPU1\n\
         \tID: {cpu_id}\n\
         \tFlags:\n\
         \t\tFPU (Floating-point unit on-chip)\n\
         \t\tVME (Virtual mode extension)\n\
         \tVersion: Intel(R) Xeon(R) Gold 6130 CPU @ 2.10GHz\n\
         \n"
    )
}

/// The default test machine's inventory.
pub fn default_inventory() -> String {
    inventory(SYSTEM_UUID, CPU_ID)
}
