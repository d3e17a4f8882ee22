// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::app::App;
use crate::utils::pretty_table;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            if app.profiles.register(name) {
                println!("Registered profile '{}'", name);
            } else {
                eprintln!("Profile '{}' already registered", name);
            }
        }
        Some(("switch", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            app.profiles.set_current(name)?;
            println!("Current profile is now '{}'", name);
        }
        Some(("list", _)) => {
            let current = app.profiles.current().to_string();
            let rows: Vec<Vec<String>> = app
                .profiles
                .names()
                .map(|n| {
                    let marker = if n == current { "*" } else { "" };
                    vec![n.to_string(), marker.to_string()]
                })
                .collect();
            println!("{}", pretty_table(&["Profile", "Current"], rows));
        }
        _ => {}
    }
    Ok(())
}
