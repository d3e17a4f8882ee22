// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Closed transaction kind. Free-text kinds are rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "Income",
            TxKind::Expense => "Expense",
        }
    }

    /// Sign an amount by kind: income counts up, expense counts down.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TxKind::Income => amount,
            TxKind::Expense => -amount,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            _ => Err(LedgerError::InvalidKind(s.to_string())),
        }
    }
}

/// Cadence of a recurring template. Anything else is rejected at the
/// boundary instead of stored as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    Monthly,
    Weekly,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Monthly => "monthly",
            Interval::Weekly => "weekly",
        }
    }

    /// Key identifying the period `now` falls in: `YYYY-MM` for monthly
    /// templates, ISO `YYYY-Www` for weekly ones.
    pub fn period_key(&self, now: NaiveDateTime) -> String {
        match self {
            Interval::Monthly => now.format("%Y-%m").to_string(),
            Interval::Weekly => now.format("%G-W%V").to_string(),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Interval::Monthly),
            "weekly" => Ok(Interval::Weekly),
            _ => Err(LedgerError::InvalidInterval(s.to_string())),
        }
    }
}

/// One ledger record. The id is assigned once and never reused, even after
/// deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub kind: TxKind,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub timestamp: NaiveDateTime,
    pub profile: String,
}

impl Transaction {
    /// Contribution of this record to its category total.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

/// Income / expense / net for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Balance {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

/// A stored pattern for a transaction that the recurrence engine re-applies
/// once per period. Consumed, never destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub profile: String,
    pub kind: TxKind,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub interval: Interval,
    #[serde(default)]
    pub last_applied: Option<String>,
}
