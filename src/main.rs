// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use billfold::{app::App, cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut app = App::load()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger data at {}", app.ledger_path().display());
            println!("Profiles and templates at {}", app.state_path().display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut app, sub)?,
        Some(("report", sub)) => commands::reports::handle(&app, sub)?,
        Some(("profile", sub)) => commands::profiles::handle(&mut app, sub)?,
        Some(("recur", sub)) => commands::recurring::handle(&mut app, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&app, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut app, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&app)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    if cli::mutates(&matches) {
        app.save()?;
    }
    Ok(())
}
