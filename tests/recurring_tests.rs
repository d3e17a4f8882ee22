// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::ledger::Ledger;
use billfold::models::{Interval, Template, TxKind};
use billfold::recurring::{self, TemplateBook};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn ts(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn monthly_rent(profile: &str) -> Template {
    Template {
        profile: profile.to_string(),
        kind: TxKind::Expense,
        description: "Rent".to_string(),
        amount: dec("600"),
        category: "Housing".to_string(),
        interval: Interval::Monthly,
        last_applied: None,
    }
}

#[test]
fn monthly_template_fires_once_per_month() {
    let mut ledger = Ledger::new();
    let mut book = TemplateBook::default();
    book.register(monthly_rent("default"));

    let first = recurring::materialize_due(&mut ledger, &mut book, "default", ts(2025, 3, 5)).unwrap();
    assert_eq!(first.len(), 1);

    // Same month again: nothing double-booked.
    let again = recurring::materialize_due(&mut ledger, &mut book, "default", ts(2025, 3, 28)).unwrap();
    assert!(again.is_empty());
    assert_eq!(ledger.len(), 1);

    // Next month it is due again, and the template survived.
    let april = recurring::materialize_due(&mut ledger, &mut book, "default", ts(2025, 4, 1)).unwrap();
    assert_eq!(april.len(), 1);
    assert_eq!(book.len(), 1);
    assert_eq!(ledger.balance("default").expenses, dec("1200"));
}

#[test]
fn weekly_template_fires_on_week_boundaries() {
    let mut ledger = Ledger::new();
    let mut book = TemplateBook::default();
    book.register(Template {
        profile: "default".to_string(),
        kind: TxKind::Expense,
        description: "Groceries".to_string(),
        amount: dec("80"),
        category: "Food".to_string(),
        interval: Interval::Weekly,
        last_applied: None,
    });

    // 2025-03-03 is a Monday; 2025-03-07 the same ISO week; 2025-03-10 the next.
    assert_eq!(
        recurring::materialize_due(&mut ledger, &mut book, "default", ts(2025, 3, 3))
            .unwrap()
            .len(),
        1
    );
    assert!(
        recurring::materialize_due(&mut ledger, &mut book, "default", ts(2025, 3, 7))
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        recurring::materialize_due(&mut ledger, &mut book, "default", ts(2025, 3, 10))
            .unwrap()
            .len(),
        1
    );
    assert_eq!(ledger.len(), 2);
}

#[test]
fn materialized_transactions_get_fresh_ids_and_the_run_timestamp() {
    let mut ledger = Ledger::new();
    ledger
        .add_at(TxKind::Income, "Salary", dec("2000"), "Job", "default", ts(2025, 3, 1))
        .unwrap();

    let mut book = TemplateBook::default();
    book.register(monthly_rent("default"));
    let now = ts(2025, 3, 5);
    let outcomes = recurring::materialize_due(&mut ledger, &mut book, "default", now).unwrap();

    assert_eq!(outcomes.len(), 1);
    let tx = ledger.get(outcomes[0].id).unwrap();
    assert_eq!(tx.id, 2);
    assert_eq!(tx.timestamp, now);
    assert_eq!(tx.category, "Housing");
    assert_eq!(tx.kind, TxKind::Expense);
}

#[test]
fn templates_are_scoped_to_their_profile() {
    let mut ledger = Ledger::new();
    let mut book = TemplateBook::default();
    book.register(monthly_rent("personal"));
    book.register(monthly_rent("business"));

    let outcomes =
        recurring::materialize_due(&mut ledger, &mut book, "personal", ts(2025, 3, 5)).unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(ledger.balance("personal").expenses, dec("600"));
    assert_eq!(ledger.balance("business").expenses, dec("0"));
}

#[test]
fn materialized_expense_can_alert() {
    let mut ledger = Ledger::new();
    let mut book = TemplateBook::default();
    let mut big = monthly_rent("default");
    big.amount = dec("900");
    book.register(big);

    let outcomes =
        recurring::materialize_due(&mut ledger, &mut book, "default", ts(2025, 3, 5)).unwrap();
    let alert = outcomes[0].alert.as_ref().expect("rent should alert");
    assert_eq!(alert.total, dec("-900"));
}
