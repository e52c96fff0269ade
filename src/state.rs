// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::blockchain::Ledger;

/// Shared handler state: the one ledger connection, built at startup.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn Ledger>,
}

impl AppState {
    pub fn new(ledger: impl Ledger + 'static) -> Self {
        Self {
            ledger: Arc::new(ledger),
        }
    }
}
