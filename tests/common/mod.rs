use chrono::NaiveDate;
use rust_decimal_macros::dec;
use team_ledger::{
    ledger::{Project, User},
    storage::{JsonStorage, RecordStore},
};
use tempfile::TempDir;

/// JSON-backed store in a fresh directory, seeded with one project and its
/// team's logins. Keep the `TempDir` alive for the duration of the test.
pub fn seeded_store() -> (JsonStorage, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let storage =
        JsonStorage::new(Some(temp.path().join("records"))).expect("create json storage backend");
    storage
        .append_project(&Project::new("Kiosk", dec!(10000), ["A", "B"]))
        .expect("seed project");
    storage
        .append_user(&User::new("A", "alpha"))
        .expect("seed user");
    storage
        .append_user(&User::new("B", "bravo"))
        .expect("seed user");
    (storage, temp)
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, d).expect("valid date")
}
