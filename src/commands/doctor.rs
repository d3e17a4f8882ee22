// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::app::App;
use crate::utils::pretty_table;

pub fn handle(app: &App) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Maintained category totals must match a fresh aggregation.
    let profiles: BTreeSet<&str> = app.ledger.transactions().map(|t| t.profile.as_str()).collect();
    for profile in &profiles {
        let fresh = app.ledger.recompute_category_totals(profile);
        for (category, expected) in &fresh {
            let maintained = app.ledger.category_total(profile, category);
            if maintained != *expected {
                rows.push(vec![
                    "category_total_drift".into(),
                    format!("{}/{}: maintained {} vs records {}", profile, category, maintained, expected),
                ]);
            }
        }
        // 2) Per-profile invariant: category totals must sum to the net.
        let net = app.ledger.balance(profile).net;
        let sum: rust_decimal::Decimal = fresh.values().sum();
        if sum != net {
            rows.push(vec![
                "net_mismatch".into(),
                format!("{}: category sum {} vs net {}", profile, sum, net),
            ]);
        }
    }

    // 3) The id counter must sit past every assigned id.
    if let Some(max_id) = app.ledger.transactions().map(|t| t.id).max() {
        if app.ledger.next_id() <= max_id {
            rows.push(vec![
                "id_counter_behind".into(),
                format!("next id {} <= max id {}", app.ledger.next_id(), max_id),
            ]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
