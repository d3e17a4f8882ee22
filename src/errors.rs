// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

/// Everything the ledger core can report. The command layer wraps these in
/// `anyhow` for display.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid amount '{0}': expected a non-negative number")]
    InvalidAmount(String),

    #[error("transaction {0} not found")]
    NotFound(u64),

    #[error("profile '{0}' is not registered")]
    UnknownProfile(String),

    #[error("unrecognized transaction type '{0}' (expected Income or Expense)")]
    InvalidKind(String),

    #[error("unrecognized interval '{0}' (expected monthly or weekly)")]
    InvalidInterval(String),

    #[error("ledger file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("corrupt record at line {line}: {reason}")]
    CorruptRecord { line: u64, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
