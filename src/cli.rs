// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

/// Whether a parsed invocation changes ledger or sidecar state and so needs
/// a save on the way out. Read-only commands must leave the data files alone.
pub fn mutates(matches: &clap::ArgMatches) -> bool {
    match matches.subcommand() {
        Some(("tx", sub)) => matches!(sub.subcommand_name(), Some("add" | "edit" | "rm")),
        Some(("profile", sub)) => matches!(sub.subcommand_name(), Some("add" | "switch")),
        Some(("recur", sub)) => matches!(sub.subcommand_name(), Some("add" | "run")),
        Some(("import", _)) => true,
        _ => false,
    }
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print pretty JSON instead of a table")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print one JSON object per line")
            .action(ArgAction::SetTrue),
    )
}

fn profile_arg() -> Arg {
    Arg::new("profile")
        .long("profile")
        .help("Act on this profile instead of the current one")
}

pub fn build_cli() -> Command {
    Command::new("billfold")
        .version(clap::crate_version!())
        .about("Multi-profile income/expense ledger with category budgets and recurring entries")
        .subcommand(Command::new("init").about("Create the data directory and print file locations"))
        .subcommand(
            Command::new("tx")
                .about("Record, edit and query transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("desc").long("desc").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").default_value("General"))
                        .arg(profile_arg()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Replace description, amount and category of a transaction")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(u64)),
                        )
                        .arg(Arg::new("desc").long("desc").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(u64)),
                    ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(profile_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("search")
                        .about("Find transactions by description substring or exact amount")
                        .arg(Arg::new("term").long("term").required(true))
                        .arg(profile_arg()),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Balances and aggregates")
                .subcommand(json_flags(
                    Command::new("balance")
                        .about("Income, expenses and net for a profile")
                        .arg(profile_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Running net total per category")
                        .arg(profile_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Monthly income/expense totals")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .default_value("12")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(profile_arg()),
                )),
        )
        .subcommand(
            Command::new("profile")
                .about("Manage and switch profiles")
                .subcommand(
                    Command::new("add")
                        .about("Register a profile")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(
                    Command::new("switch")
                        .about("Make a registered profile current")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(Command::new("list").about("List registered profiles")),
        )
        .subcommand(
            Command::new("recur")
                .about("Recurring transaction templates")
                .subcommand(
                    Command::new("add")
                        .about("Register a recurring template for the current profile")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("desc").long("desc").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").default_value("General"))
                        .arg(
                            Arg::new("interval")
                                .long("interval")
                                .required(true)
                                .value_parser(["monthly", "weekly"]),
                        ),
                )
                .subcommand(Command::new("list").about("List the current profile's templates"))
                .subcommand(
                    Command::new("run")
                        .about("Materialize every template not yet booked this period"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write all transactions to a CSV file")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value(crate::store::EXPORT_FILE),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Merge transactions from an exported CSV, assigning fresh ids")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(Command::new("doctor").about("Check aggregate totals against the records"))
}
