// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::ledger::Ledger;
use crate::profiles::Profiles;
use crate::recurring::TemplateBook;
use crate::store::{self, AppState};

/// One loaded session: the ledger, the profile partition and the recurring
/// templates, plus the paths they came from. Commands mutate this and
/// `save` writes everything back.
pub struct App {
    pub ledger: Ledger,
    pub profiles: Profiles,
    pub templates: TemplateBook,
    ledger_path: PathBuf,
    state_path: PathBuf,
}

impl App {
    pub fn load() -> Result<Self> {
        let dir = store::data_dir()?;
        Self::load_from(&dir)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        let ledger_path = dir.join(store::LEDGER_FILE);
        let state_path = dir.join(store::STATE_FILE);
        let ledger = store::load_or_default(&ledger_path)?;
        let AppState {
            mut profiles,
            templates,
        } = store::load_state(&state_path)?;
        // Every profile seen in the ledger counts as registered.
        for tx in ledger.transactions() {
            profiles.register(&tx.profile);
        }
        Ok(Self {
            ledger,
            profiles,
            templates,
            ledger_path,
            state_path,
        })
    }

    pub fn save(&self) -> Result<()> {
        store::save_ledger(&self.ledger, &self.ledger_path)?;
        let state = AppState {
            profiles: self.profiles.clone(),
            templates: self.templates.clone(),
        };
        store::save_state(&state, &self.state_path)
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }
}
