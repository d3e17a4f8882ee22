// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::errors::LedgerError;
use billfold::ledger::Ledger;
use billfold::models::{Transaction, TxKind};
use billfold::store;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .add_at(TxKind::Income, "Salary", dec("2000"), "Job", "personal", ts(2025, 3, 1, 9, 0))
        .unwrap();
    ledger
        .add_at(TxKind::Expense, "Rent", dec("600"), "Housing", "personal", ts(2025, 3, 2, 10, 30))
        .unwrap();
    ledger
        .add_at(TxKind::Expense, "Server", dec("40.50"), "Infra", "business", ts(2025, 4, 1, 0, 5))
        .unwrap();
    ledger
}

#[test]
fn round_trip_preserves_records_totals_and_counter() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("budget_data.csv");

    let original = sample_ledger();
    store::save_ledger(&original, &path).unwrap();
    let loaded = store::load_ledger(&path).unwrap();

    let before: Vec<Transaction> = original.transactions().cloned().collect();
    let after: Vec<Transaction> = loaded.transactions().cloned().collect();
    assert_eq!(before, after);

    assert_eq!(
        original.category_summary("personal"),
        loaded.category_summary("personal")
    );
    assert_eq!(
        original.category_summary("business"),
        loaded.category_summary("business")
    );
    assert_eq!(loaded.next_id(), 4);
}

#[test]
fn rebuilt_totals_equal_a_fresh_aggregation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("budget_data.csv");
    store::save_ledger(&sample_ledger(), &path).unwrap();

    let loaded = store::load_ledger(&path).unwrap();
    for profile in ["personal", "business"] {
        let fresh = loaded.recompute_category_totals(profile);
        for (category, total) in loaded.category_summary(profile) {
            assert_eq!(fresh.get(&category), Some(&total));
        }
    }
}

#[test]
fn unparseable_amount_fails_the_whole_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("budget_data.csv");
    std::fs::write(
        &path,
        "ID,Type,Description,Amount,Category,Timestamp,Profile\n\
         1,Income,Salary,2000,Job,2025-03-01 09:00:00,default\n\
         2,Expense,Rent,abc,Housing,2025-03-02 10:30:00,default\n",
    )
    .unwrap();

    let err = store::load_ledger(&path).unwrap_err();
    match err {
        LedgerError::CorruptRecord { line, reason } => {
            assert_eq!(line, 3);
            assert!(reason.contains("abc"), "reason was: {reason}");
        }
        other => panic!("expected CorruptRecord, got {other:?}"),
    }
}

#[test]
fn unrecognized_type_is_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("budget_data.csv");
    std::fs::write(
        &path,
        "ID,Type,Description,Amount,Category,Timestamp,Profile\n\
         1,Transfer,Salary,2000,Job,2025-03-01 09:00:00,default\n",
    )
    .unwrap();
    assert!(matches!(
        store::load_ledger(&path).unwrap_err(),
        LedgerError::CorruptRecord { .. }
    ));
}

#[test]
fn duplicate_ids_are_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("budget_data.csv");
    std::fs::write(
        &path,
        "ID,Type,Description,Amount,Category,Timestamp,Profile\n\
         1,Income,Salary,2000,Job,2025-03-01 09:00:00,default\n\
         1,Expense,Rent,600,Housing,2025-03-02 10:30:00,default\n",
    )
    .unwrap();
    assert!(matches!(
        store::load_ledger(&path).unwrap_err(),
        LedgerError::CorruptRecord { .. }
    ));
}

#[test]
fn missing_file_is_reported_but_recoverable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");

    assert!(matches!(
        store::load_ledger(&path).unwrap_err(),
        LedgerError::FileNotFound(_)
    ));

    let ledger = store::load_or_default(&path).unwrap();
    assert!(ledger.is_empty());
    assert_eq!(ledger.next_id(), 1);
}

#[test]
fn header_only_file_loads_empty_with_counter_at_one() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("budget_data.csv");
    std::fs::write(&path, "ID,Type,Description,Amount,Category,Timestamp,Profile\n").unwrap();

    let ledger = store::load_ledger(&path).unwrap();
    assert!(ledger.is_empty());
    assert_eq!(ledger.next_id(), 1);
}

#[test]
fn counter_resumes_past_the_highest_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("budget_data.csv");
    std::fs::write(
        &path,
        "ID,Type,Description,Amount,Category,Timestamp,Profile\n\
         3,Income,Salary,2000,Job,2025-03-01 09:00:00,default\n\
         7,Expense,Rent,600,Housing,2025-03-02 10:30:00,default\n",
    )
    .unwrap();

    let mut ledger = store::load_ledger(&path).unwrap();
    assert_eq!(ledger.next_id(), 8);
    let out = ledger
        .add(TxKind::Expense, "Coffee", dec("4"), "Food", "default")
        .unwrap();
    assert_eq!(out.id, 8);
}

#[test]
fn legacy_rows_without_profile_load_as_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("budget_data.csv");
    std::fs::write(
        &path,
        "ID,Type,Description,Amount,Category,Timestamp\n\
         1,Expense,Rent,600,Housing,2025-03-02 10:30:00\n",
    )
    .unwrap();

    let ledger = store::load_ledger(&path).unwrap();
    assert_eq!(ledger.get(1).unwrap().profile, "default");
    assert_eq!(ledger.category_total("default", "Housing"), dec("-600"));
}
