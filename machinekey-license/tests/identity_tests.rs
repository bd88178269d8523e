mod common;

use common::{default_inventory, CPU_ID, SYSTEM_UUID};
use machinekey_dmi::DmiTable;
use machinekey_license::{LicenseError, MachineIdentity};

#[test]
fn reads_uuid_and_cpu_id() {
    let table = DmiTable::parse(&default_inventory()).unwrap();
    let identity = MachineIdentity::from_table(&table).unwrap();
    assert_eq!(identity.system_uuid(), SYSTEM_UUID);
    assert_eq!(identity.cpu_id(), CPU_ID);
}

#[test]
fn missing_processor_record() {
    let text = format!("Handle 0x0001, DMI type 1, 27 bytes\nSystem Information\n\tUUID: {SYSTEM_UUID}\n");
    let table = DmiTable::parse(&text).unwrap();
    assert!(matches!(
        MachineIdentity::from_table(&table),
        Err(LicenseError::IdentityUnavailable(_))
    ));
}

#[test]
fn missing_uuid_field() {
    let text = format!(
        "Handle 0x0001, DMI type 1, 27 bytes\nSystem Information\n\tSerial Number: 5B2XQ33\n\n\
         Handle 0x0400, DMI type 4, 48 bytes\nProcessor Information\n\tID: {CPU_ID}\n"
    );
    let table = DmiTable::parse(&text).unwrap();
    assert!(matches!(
        MachineIdentity::from_table(&table),
        Err(LicenseError::IdentityUnavailable(_))
    ));
}

#[test]
fn empty_table_is_unavailable() {
    let table = DmiTable::default();
    assert!(matches!(
        MachineIdentity::from_table(&table),
        Err(LicenseError::IdentityUnavailable(_))
    ));
}

#[test]
fn empty_identifiers_are_rejected() {
    assert!(MachineIdentity::new("", CPU_ID).is_err());
    assert!(MachineIdentity::new(SYSTEM_UUID, "").is_err());
}

#[test]
fn identity_serde() {
    let identity = MachineIdentity::new(SYSTEM_UUID, CPU_ID).unwrap();
    let json = serde_json::to_string(&identity).unwrap();
    let parsed: MachineIdentity = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, identity);
}
