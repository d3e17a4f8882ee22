// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::app::App;
use crate::store;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    let out = m.get_one::<String>("out").unwrap();
    store::save_ledger(&app.ledger, Path::new(out))?;
    println!("Exported {} transaction(s) to {}", app.ledger.len(), out);
    Ok(())
}
