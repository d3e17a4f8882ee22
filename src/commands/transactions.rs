// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::app::App;
use crate::ledger::Ledger;
use crate::models::TxKind;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table, warn_over_budget};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("edit", sub)) => edit(app, sub)?,
        Some(("rm", sub)) => rm(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        Some(("search", sub)) => search(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn resolve_profile<'a>(app: &'a App, sub: &'a clap::ArgMatches) -> Result<&'a str> {
    match sub.get_one::<String>("profile") {
        Some(p) => Ok(app.profiles.require(p)?),
        None => Ok(app.profiles.current()),
    }
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TxKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let desc = sub.get_one::<String>("desc").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();
    let profile = resolve_profile(app, sub)?.to_string();

    let outcome = app.ledger.add(kind, desc, amount, category, &profile)?;
    println!(
        "Recorded {} {} '{}' (id: {}, category: {}, profile: {})",
        kind,
        fmt_money(&amount),
        desc,
        outcome.id,
        category,
        profile
    );
    if let Some(alert) = &outcome.alert {
        warn_over_budget(alert);
    }
    Ok(())
}

fn edit(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u64>("id").unwrap();
    let desc = sub.get_one::<String>("desc").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();

    let alerts = app.ledger.edit(id, desc, amount, category)?;
    println!("Updated transaction {}", id);
    for alert in &alerts {
        warn_over_budget(alert);
    }
    Ok(())
}

fn rm(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u64>("id").unwrap();
    let alert = app.ledger.delete(id)?;
    println!("Deleted transaction {}", id);
    if let Some(alert) = &alert {
        warn_over_budget(alert);
    }
    Ok(())
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let profile = resolve_profile(app, sub)?;
    let data = query_rows(&app.ledger, profile, sub);
    print_rows(sub, &data)
}

fn search(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let profile = resolve_profile(app, sub)?;
    let term = sub.get_one::<String>("term").unwrap();
    let data: Vec<TransactionRow> = app
        .ledger
        .search(term, profile)
        .into_iter()
        .map(TransactionRow::from)
        .collect();
    print_rows(sub, &data)
}

fn print_rows(sub: &clap::ArgMatches, data: &[TransactionRow]) -> Result<()> {
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.kind.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.timestamp.clone(),
                    r.profile.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Type", "Description", "Amount", "Category", "Timestamp", "Profile"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub kind: String,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub timestamp: String,
    pub profile: String,
}

impl From<&crate::models::Transaction> for TransactionRow {
    fn from(tx: &crate::models::Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            kind: tx.kind.to_string(),
            description: tx.description.clone(),
            amount: tx.amount.to_string(),
            category: tx.category.clone(),
            timestamp: tx.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            profile: tx.profile.clone(),
        }
    }
}

/// Rows for `tx list`: newest first, optional kind filter and limit.
pub fn query_rows(ledger: &Ledger, profile: &str, sub: &clap::ArgMatches) -> Vec<TransactionRow> {
    let kind = sub
        .get_one::<String>("kind")
        .and_then(|k| k.parse::<TxKind>().ok());
    let mut txs = ledger.list(kind, profile);
    txs.reverse();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }
    txs.into_iter().map(TransactionRow::from).collect()
}
