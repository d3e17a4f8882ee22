// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::app::App;
use crate::budget;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balance", sub)) => balance(app, sub)?,
        Some(("summary", sub)) => summary(app, sub)?,
        Some(("cashflow", sub)) => cashflow(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn profile_of<'a>(app: &'a App, sub: &'a clap::ArgMatches) -> Result<&'a str> {
    match sub.get_one::<String>("profile") {
        Some(p) => Ok(app.profiles.require(p)?),
        None => Ok(app.profiles.current()),
    }
}

fn balance(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let profile = profile_of(app, sub)?;
    let b = app.ledger.balance(profile);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &b)? {
        println!(
            "{}",
            pretty_table(
                &["Profile", "Income", "Expenses", "Net"],
                vec![vec![
                    profile.to_string(),
                    fmt_money(&b.income),
                    fmt_money(&b.expenses),
                    fmt_money(&b.net),
                ]],
            )
        );
    }
    Ok(())
}

fn summary(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let profile = profile_of(app, sub)?;
    let totals = app.ledger.category_summary(profile);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        let rows: Vec<Vec<String>> = totals
            .iter()
            .map(|(cat, total)| {
                let status = if budget::check(cat, *total).is_some() {
                    "over budget".to_string()
                } else {
                    String::new()
                };
                vec![cat.clone(), fmt_money(total), status]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Net", "Status"], rows));
    }
    Ok(())
}

fn cashflow(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let profile = profile_of(app, sub)?;
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&12);
    let series = app.ledger.monthly_cashflow(profile);

    let mut data: Vec<(String, Decimal, Decimal)> = series
        .iter()
        .rev()
        .take(months)
        .map(|(m, (inc, exp))| (m.clone(), *inc, *exp))
        .collect();
    data.reverse();

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|(m, inc, exp)| vec![m.clone(), fmt_money(inc), fmt_money(exp)])
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    }
    Ok(())
}
