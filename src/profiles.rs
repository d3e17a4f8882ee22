// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Profile that always exists and is current on first run.
pub const DEFAULT_PROFILE: &str = "default";

/// Thin partition layer over the record store: a set of registered names and
/// the one that is current. All profiles share one id counter and one store;
/// queries filter by tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profiles {
    current: String,
    registered: BTreeSet<String>,
}

impl Profiles {
    pub fn new() -> Self {
        let mut registered = BTreeSet::new();
        registered.insert(DEFAULT_PROFILE.to_string());
        Self {
            current: DEFAULT_PROFILE.to_string(),
            registered,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Idempotent: returns false when the name was already registered, so the
    /// caller can warn instead of erroring.
    pub fn register(&mut self, name: &str) -> bool {
        self.registered.insert(name.to_string())
    }

    /// Switch the current profile. On `UnknownProfile` the current profile is
    /// unchanged.
    pub fn set_current(&mut self, name: &str) -> Result<(), LedgerError> {
        if !self.registered.contains(name) {
            return Err(LedgerError::UnknownProfile(name.to_string()));
        }
        self.current = name.to_string();
        Ok(())
    }

    /// Validate an explicit profile override.
    pub fn require<'a>(&self, name: &'a str) -> Result<&'a str, LedgerError> {
        if self.registered.contains(name) {
            Ok(name)
        } else {
            Err(LedgerError::UnknownProfile(name.to_string()))
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registered.iter().map(String::as_str)
    }
}

impl Default for Profiles {
    fn default() -> Self {
        Self::new()
    }
}
