// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Recurring-transaction templates and the engine that materializes them.
//! Each template remembers the last period it fired in, so running the
//! engine twice within one period books nothing twice.

use chrono::NaiveDateTime;

use crate::errors::LedgerError;
use crate::ledger::{AddOutcome, Ledger};
use crate::models::Template;

/// Per-profile list of recurring templates.
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct TemplateBook {
    templates: Vec<Template>,
}

impl TemplateBook {
    pub fn register(&mut self, template: Template) {
        self.templates.push(template);
    }

    pub fn for_profile(&self, profile: &str) -> impl Iterator<Item = &Template> {
        self.templates.iter().filter(move |t| t.profile == profile)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn due_mut(&mut self, profile: &str) -> impl Iterator<Item = &mut Template> {
        self.templates.iter_mut().filter(move |t| t.profile == profile)
    }
}

/// Apply every one of `profile`'s templates whose period (month for monthly,
/// ISO week for weekly) has not been booked yet. Each application is a fresh
/// transaction with a new id and `now` as its timestamp; the template itself
/// survives and records the period it just covered.
pub fn materialize_due(
    ledger: &mut Ledger,
    book: &mut TemplateBook,
    profile: &str,
    now: NaiveDateTime,
) -> Result<Vec<AddOutcome>, LedgerError> {
    let mut outcomes = Vec::new();
    for template in book.due_mut(profile) {
        let period = template.interval.period_key(now);
        if template.last_applied.as_deref() == Some(period.as_str()) {
            continue;
        }
        let outcome = ledger.add_at(
            template.kind,
            &template.description,
            template.amount,
            &template.category,
            profile,
            now,
        )?;
        template.last_applied = Some(period);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
