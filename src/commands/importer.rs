// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;
use crate::budget::BudgetAlert;
use crate::errors::LedgerError;
use crate::ledger::Ledger;
use crate::store;
use crate::utils::warn_over_budget;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let src = store::load_ledger(Path::new(path))
        .with_context(|| format!("Import CSV {}", path))?;
    for tx in src.transactions() {
        app.profiles.register(&tx.profile);
    }
    let (count, alerts) = merge_into(&mut app.ledger, &src)?;
    println!("Imported {} transaction(s) from {}", count, path);
    for alert in &alerts {
        warn_over_budget(alert);
    }
    Ok(())
}

/// Re-add every record of `src` into `dst` with a fresh id and the source
/// row's own timestamp. Ids in the file are ignored so a merge can never
/// collide with live ids.
pub fn merge_into(dst: &mut Ledger, src: &Ledger) -> Result<(usize, Vec<BudgetAlert>), LedgerError> {
    let mut count = 0;
    let mut alerts = Vec::new();
    for tx in src.transactions() {
        let outcome = dst.add_at(
            tx.kind,
            &tx.description,
            tx.amount,
            &tx.category,
            &tx.profile,
            tx.timestamp,
        )?;
        if let Some(alert) = outcome.alert {
            alerts.push(alert);
        }
        count += 1;
    }
    Ok((count, alerts))
}
