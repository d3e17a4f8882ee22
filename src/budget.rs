// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;

/// Fixed net floor applied uniformly to every category. Not configurable.
pub static BUDGET_FLOOR: Lazy<Decimal> = Lazy::new(|| Decimal::from(-500));

/// Advisory signal that a category's running net dropped below the floor.
/// Never blocks the mutation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAlert {
    pub category: String,
    pub total: Decimal,
}

/// Pure threshold check: alert iff the running total is strictly below the
/// floor.
pub fn check(category: &str, total: Decimal) -> Option<BudgetAlert> {
    if total < *BUDGET_FLOOR {
        Some(BudgetAlert {
            category: category.to_string(),
            total,
        })
    } else {
        None
    }
}
