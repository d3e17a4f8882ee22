// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Flat-file persistence. Transactions round-trip through a CSV with one row
//! per record; the load replays every row into the aggregator and rebuilds
//! the id counter. Profiles, the current profile and recurring templates
//! live in a JSON sidecar whose shape is ours to choose.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::Ledger;
use crate::models::{Transaction, TxKind};
use crate::profiles::{DEFAULT_PROFILE, Profiles};
use crate::recurring::TemplateBook;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.billfold", "Billfold", "billfold"));

/// Persisted-state file for the transaction store.
pub const LEDGER_FILE: &str = "budget_data.csv";
/// Sidecar with profiles and recurring templates.
pub const STATE_FILE: &str = "state.json";
/// Default export target.
pub const EXPORT_FILE: &str = "transactions.csv";

const CSV_HEADER: [&str; 7] = [
    "ID",
    "Type",
    "Description",
    "Amount",
    "Category",
    "Timestamp",
    "Profile",
];
const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn data_dir() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

/// Write the whole store, header first, rows in insertion order.
pub fn save_ledger(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(CSV_HEADER)?;
    for tx in ledger.transactions() {
        wtr.write_record([
            tx.id.to_string(),
            tx.kind.to_string(),
            tx.description.clone(),
            tx.amount.to_string(),
            tx.category.clone(),
            tx.timestamp.format(TIMESTAMP_FMT).to_string(),
            tx.profile.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// All-or-nothing load: any malformed row fails the whole call with
/// `CorruptRecord`. Category totals are rebuilt by replay and the id counter
/// is set past the highest id seen (1 on an empty file).
pub fn load_ledger(path: &Path) -> Result<Ledger, LedgerError> {
    if !path.exists() {
        return Err(LedgerError::FileNotFound(path.to_path_buf()));
    }
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut ledger = Ledger::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let tx = parse_row(&record, line)?;
        if ledger.get(tx.id).is_some() {
            return Err(corrupt(line, format!("duplicate id {}", tx.id)));
        }
        ledger.insert_loaded(tx);
    }
    Ok(ledger)
}

/// Missing file is not an error at startup: log it and begin empty.
pub fn load_or_default(path: &Path) -> Result<Ledger, LedgerError> {
    match load_ledger(path) {
        Err(LedgerError::FileNotFound(p)) => {
            eprintln!("No ledger file at {}, starting empty", p.display());
            Ok(Ledger::new())
        }
        other => other,
    }
}

fn corrupt(line: u64, reason: String) -> LedgerError {
    LedgerError::CorruptRecord { line, reason }
}

fn field<'r>(
    record: &'r csv::StringRecord,
    line: u64,
    idx: usize,
    name: &str,
) -> Result<&'r str, LedgerError> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| corrupt(line, format!("missing {name} column")))
}

fn parse_row(record: &csv::StringRecord, line: u64) -> Result<Transaction, LedgerError> {
    let id_raw = field(record, line, 0, "ID")?;
    let id: u64 = id_raw
        .parse()
        .map_err(|_| corrupt(line, format!("invalid id '{id_raw}'")))?;
    if id == 0 {
        return Err(corrupt(line, "id must be positive".to_string()));
    }

    let kind_raw = field(record, line, 1, "Type")?;
    let kind: TxKind = kind_raw
        .parse()
        .map_err(|_| corrupt(line, format!("unrecognized type '{kind_raw}'")))?;

    let description = field(record, line, 2, "Description")?.to_string();

    let amount_raw = field(record, line, 3, "Amount")?;
    let amount: Decimal = amount_raw
        .parse()
        .map_err(|_| corrupt(line, format!("invalid amount '{amount_raw}'")))?;
    if amount < Decimal::ZERO {
        return Err(corrupt(line, format!("negative amount '{amount_raw}'")));
    }

    let category = field(record, line, 4, "Category")?.to_string();

    let ts_raw = field(record, line, 5, "Timestamp")?;
    let timestamp = NaiveDateTime::parse_from_str(ts_raw, TIMESTAMP_FMT)
        .map_err(|_| corrupt(line, format!("invalid timestamp '{ts_raw}'")))?;

    // Rows written before profiles existed have six columns.
    let profile = record
        .get(6)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_PROFILE)
        .to_string();

    Ok(Transaction {
        id,
        kind,
        description,
        amount,
        category,
        timestamp,
        profile,
    })
}

/// Everything outside the transaction store that survives a restart.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub profiles: Profiles,
    pub templates: TemplateBook,
}

pub fn load_state(path: &Path) -> anyhow::Result<AppState> {
    if !path.exists() {
        return Ok(AppState::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read state file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse state file {}", path.display()))
}

pub fn save_state(state: &AppState, path: &Path) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(state)?;
    fs::write(path, raw).with_context(|| format!("Write state file {}", path.display()))
}
