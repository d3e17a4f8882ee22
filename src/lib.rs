// Copyright (c) 2025 Billfold Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod app;
pub mod budget;
pub mod cli;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod profiles;
pub mod recurring;
pub mod store;
pub mod utils;
pub mod commands;
