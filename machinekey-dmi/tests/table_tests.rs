use machinekey_dmi::{DmiError, DmiTable, Selector, TYPE_PROCESSOR, TYPE_SYSTEM};

const DUMP: &str = include_str!("fixtures/dmidecode.txt");

fn table() -> DmiTable {
    DmiTable::parse(DUMP).unwrap()
}

#[test]
fn search_by_type() {
    let table = table();
    let system = table.search_by_type(TYPE_SYSTEM).unwrap().unwrap();
    assert_eq!(system.handle(), "0x0001");
}

#[test]
fn first_match_in_handle_order() {
    let table = table();
    let cpu = table.search_by_type(TYPE_PROCESSOR).unwrap().unwrap();
    assert_eq!(cpu.handle(), "0x0400");
    assert_eq!(cpu.field("Socket Designation"), Some("CPU1"));
}

#[test]
fn search_by_name() {
    let table = table();
    let bios = table.search_by_name("BIOS Information").unwrap().unwrap();
    assert_eq!(bios.type_code(), 0);
}

#[test]
fn search_by_field() {
    let table = table();
    let cpu = table
        .find(Selector::Field {
            key: "Socket Designation",
            value: "CPU2",
        })
        .unwrap()
        .unwrap();
    assert_eq!(cpu.handle(), "0x0401");
}

#[test]
fn no_match_is_not_an_error() {
    let table = table();
    assert!(table.search_by_type(17).unwrap().is_none());
    assert!(table.search_by_name("Memory Device").unwrap().is_none());
}

#[test]
fn lookup_on_empty_table_fails() {
    let table = DmiTable::default();
    assert!(table.is_empty());
    assert!(matches!(table.search_by_type(TYPE_SYSTEM), Err(DmiError::Lookup)));
    assert!(matches!(table.search_by_name("System Information"), Err(DmiError::Lookup)));
}
