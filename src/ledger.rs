// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The record store and its category aggregator. Records live in an arena
//! keyed by id; per-profile category totals are maintained incrementally by
//! an explicit reconciliation step applied in the same call that commits the
//! record change, so the invariant `sum(category totals) == income - expenses`
//! holds for every profile after every operation.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;

use crate::budget::{self, BudgetAlert};
use crate::errors::LedgerError;
use crate::models::{Balance, Transaction, TxKind};

/// Category assigned when the caller leaves it blank.
pub const DEFAULT_CATEGORY: &str = "General";

/// Result of an add: the assigned id plus an advisory budget alert, if the
/// affected category crossed the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub id: u64,
    pub alert: Option<BudgetAlert>,
}

#[derive(Debug)]
pub struct Ledger {
    // Monotonic ids make id order the insertion order.
    records: BTreeMap<u64, Transaction>,
    next_id: u64,
    // profile -> category -> running signed total
    categories: BTreeMap<String, BTreeMap<String, Decimal>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
            categories: BTreeMap::new(),
        }
    }

    /// Add a record to `profile` with the next id and the current timestamp.
    pub fn add(
        &mut self,
        kind: TxKind,
        description: &str,
        amount: Decimal,
        category: &str,
        profile: &str,
    ) -> Result<AddOutcome, LedgerError> {
        self.add_at(
            kind,
            description,
            amount,
            category,
            profile,
            Local::now().naive_local(),
        )
    }

    /// Add with an explicit timestamp. Used by the recurrence engine and the
    /// importer; `add` delegates here with now.
    pub fn add_at(
        &mut self,
        kind: TxKind,
        description: &str,
        amount: Decimal,
        category: &str,
        profile: &str,
        timestamp: NaiveDateTime,
    ) -> Result<AddOutcome, LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }
        let category = normalize_category(category);
        let id = self.next_id;
        let tx = Transaction {
            id,
            kind,
            description: description.to_string(),
            amount,
            category: category.to_string(),
            timestamp,
            profile: profile.to_string(),
        };
        let delta = tx.signed_amount();
        let profile = tx.profile.clone();
        self.records.insert(id, tx);
        self.next_id += 1;
        let alert = self.reconcile(&profile, category, delta);
        Ok(AddOutcome { id, alert })
    }

    /// Replace description, amount and category in place; id and kind are
    /// preserved and the timestamp refreshed. The aggregator reverses the old
    /// contribution and applies the new one, so an amount edit from 100 to 40
    /// moves the category total by 60. Budget checks run against the final
    /// totals only, never against the half-reconciled state between reversal
    /// and re-apply.
    pub fn edit(
        &mut self,
        id: u64,
        description: &str,
        amount: Decimal,
        category: &str,
    ) -> Result<Vec<BudgetAlert>, LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }
        let category = normalize_category(category);
        let tx = self.records.get_mut(&id).ok_or(LedgerError::NotFound(id))?;
        let old_delta = tx.signed_amount();
        let old_category = std::mem::replace(&mut tx.category, category.to_string());
        tx.description = description.to_string();
        tx.amount = amount;
        tx.timestamp = Local::now().naive_local();
        let new_delta = tx.signed_amount();
        let profile = tx.profile.clone();

        let mut alerts = Vec::new();
        if old_category == category {
            let net = new_delta - old_delta;
            let total = self.apply_delta(&profile, category, net);
            if net < Decimal::ZERO {
                if let Some(a) = budget::check(category, total) {
                    alerts.push(a);
                }
            }
        } else {
            let old_total = self.apply_delta(&profile, &old_category, -old_delta);
            if -old_delta < Decimal::ZERO {
                if let Some(a) = budget::check(&old_category, old_total) {
                    alerts.push(a);
                }
            }
            let new_total = self.apply_delta(&profile, category, new_delta);
            if new_delta < Decimal::ZERO {
                if let Some(a) = budget::check(category, new_total) {
                    alerts.push(a);
                }
            }
        }
        Ok(alerts)
    }

    /// Remove a record and reverse its contribution out of the aggregator.
    /// The id is retired for good. Removing income can itself push a category
    /// below the floor, so this too can alert.
    pub fn delete(&mut self, id: u64) -> Result<Option<BudgetAlert>, LedgerError> {
        let tx = self.records.remove(&id).ok_or(LedgerError::NotFound(id))?;
        Ok(self.reconcile(&tx.profile, &tx.category, -tx.signed_amount()))
    }

    pub fn get(&self, id: u64) -> Option<&Transaction> {
        self.records.get(&id)
    }

    /// All records in insertion order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Records in `profile`, optionally narrowed by kind, in insertion order.
    pub fn list(&self, kind: Option<TxKind>, profile: &str) -> Vec<&Transaction> {
        self.records
            .values()
            .filter(|t| t.profile == profile && kind.is_none_or(|k| t.kind == k))
            .collect()
    }

    /// Case-insensitive substring match on description, or exact match on the
    /// amount rendered as text.
    pub fn search(&self, term: &str, profile: &str) -> Vec<&Transaction> {
        let needle = term.to_lowercase();
        self.records
            .values()
            .filter(|t| {
                t.profile == profile
                    && (t.description.to_lowercase().contains(&needle)
                        || t.amount.to_string() == term.trim())
            })
            .collect()
    }

    pub fn balance(&self, profile: &str) -> Balance {
        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        for tx in self.records.values().filter(|t| t.profile == profile) {
            match tx.kind {
                TxKind::Income => income += tx.amount,
                TxKind::Expense => expenses += tx.amount,
            }
        }
        Balance {
            income,
            expenses,
            net: income - expenses,
        }
    }

    /// Snapshot of the running totals for one profile, category-sorted.
    pub fn category_summary(&self, profile: &str) -> Vec<(String, Decimal)> {
        self.categories
            .get(profile)
            .map(|m| m.iter().map(|(c, t)| (c.clone(), *t)).collect())
            .unwrap_or_default()
    }

    pub fn category_total(&self, profile: &str, category: &str) -> Decimal {
        self.categories
            .get(profile)
            .and_then(|m| m.get(category))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Per-month (income, expense) sums keyed by the `YYYY-MM` prefix of the
    /// timestamp. This is the grouped series the chart-rendering collaborator
    /// consumes.
    pub fn monthly_cashflow(&self, profile: &str) -> BTreeMap<String, (Decimal, Decimal)> {
        let mut months: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
        for tx in self.records.values().filter(|t| t.profile == profile) {
            let entry = months
                .entry(tx.timestamp.format("%Y-%m").to_string())
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            match tx.kind {
                TxKind::Income => entry.0 += tx.amount,
                TxKind::Expense => entry.1 += tx.amount,
            }
        }
        months
    }

    /// Fresh aggregation straight from the records, bypassing the maintained
    /// totals. `doctor` diffs the two.
    pub fn recompute_category_totals(&self, profile: &str) -> BTreeMap<String, Decimal> {
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for tx in self.records.values().filter(|t| t.profile == profile) {
            *totals.entry(tx.category.clone()).or_insert(Decimal::ZERO) += tx.signed_amount();
        }
        totals
    }

    /// Insert a record loaded from disk, replaying its contribution into the
    /// aggregator and advancing the id counter past it. No budget check on
    /// replay.
    pub(crate) fn insert_loaded(&mut self, tx: Transaction) {
        let delta = tx.signed_amount();
        let slot = self
            .categories
            .entry(tx.profile.clone())
            .or_default()
            .entry(tx.category.clone())
            .or_insert(Decimal::ZERO);
        *slot += delta;
        self.next_id = self.next_id.max(tx.id + 1);
        self.records.insert(tx.id, tx);
    }

    /// The one compensating step paired with every store mutation: apply the
    /// signed delta to the category's running total (creating the entry at
    /// zero first) and run the budget check when the delta pushed it down.
    fn reconcile(&mut self, profile: &str, category: &str, delta: Decimal) -> Option<BudgetAlert> {
        let total = self.apply_delta(profile, category, delta);
        if delta < Decimal::ZERO {
            budget::check(category, total)
        } else {
            None
        }
    }

    /// Apply a signed delta and report the resulting total, without the
    /// budget check. `edit` uses this to settle both sides of a category move
    /// before evaluating any alert.
    fn apply_delta(&mut self, profile: &str, category: &str, delta: Decimal) -> Decimal {
        let slot = self
            .categories
            .entry(profile.to_string())
            .or_default()
            .entry(category.to_string())
            .or_insert(Decimal::ZERO);
        *slot += delta;
        *slot
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_category(category: &str) -> &str {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY
    } else {
        trimmed
    }
}
