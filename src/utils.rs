// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::budget::BudgetAlert;
use crate::errors::LedgerError;

/// Parse a user-supplied amount. The store re-validates, but rejecting here
/// keeps the error close to the prompt.
pub fn parse_amount(s: &str) -> Result<Decimal, LedgerError> {
    let amount: Decimal = s
        .trim()
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(s.to_string()))?;
    if amount < Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(s.to_string()));
    }
    Ok(amount)
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Advisory only; printed to stderr so it never pollutes piped output.
pub fn warn_over_budget(alert: &BudgetAlert) {
    eprintln!(
        "⚠ over budget: '{}' is at {} (floor {})",
        alert.category,
        fmt_money(&alert.total),
        *crate::budget::BUDGET_FLOOR
    );
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> anyhow::Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
