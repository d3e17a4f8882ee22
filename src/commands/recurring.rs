// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::app::App;
use crate::models::{Interval, Template, TxKind};
use crate::recurring;
use crate::utils::{fmt_money, parse_amount, pretty_table, warn_over_budget};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("list", _)) => list(app),
        Some(("run", _)) => run(app)?,
        _ => {}
    }
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TxKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let desc = sub.get_one::<String>("desc").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();
    let interval: Interval = sub.get_one::<String>("interval").unwrap().parse()?;
    let profile = app.profiles.current().to_string();

    app.templates.register(Template {
        profile: profile.clone(),
        kind,
        description: desc.clone(),
        amount,
        category: category.clone(),
        interval,
        last_applied: None,
    });
    println!(
        "Registered {} template '{}' ({} {}, category: {}, profile: {})",
        interval,
        desc,
        kind,
        fmt_money(&amount),
        category,
        profile
    );
    Ok(())
}

fn list(app: &App) {
    let profile = app.profiles.current();
    let rows: Vec<Vec<String>> = app
        .templates
        .for_profile(profile)
        .map(|t| {
            vec![
                t.kind.to_string(),
                t.description.clone(),
                t.amount.to_string(),
                t.category.clone(),
                t.interval.to_string(),
                t.last_applied.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Type", "Description", "Amount", "Category", "Interval", "Last applied"],
            rows,
        )
    );
}

fn run(app: &mut App) -> Result<()> {
    let profile = app.profiles.current().to_string();
    let now = Local::now().naive_local();
    let outcomes = recurring::materialize_due(&mut app.ledger, &mut app.templates, &profile, now)?;
    println!(
        "Materialized {} recurring transaction(s) for '{}'",
        outcomes.len(),
        profile
    );
    for outcome in &outcomes {
        if let Some(alert) = &outcome.alert {
            warn_over_budget(alert);
        }
    }
    Ok(())
}
