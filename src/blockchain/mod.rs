// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain integration module for PulseChain.
//!
//! This module provides functionality for:
//! - Validating account addresses
//! - Converting between decimal strings and base units
//! - Querying native PLS balances and ERC-20 metadata
//! - Quoting prices through the PulseX router

pub mod address;
pub mod client;
pub mod erc20;
pub mod router;
pub mod types;
pub mod units;

pub use address::{is_valid_address, parse_address};
pub use client::{Ledger, LedgerError, PulseClient};
pub use types::*;
pub use units::{format_ether, format_units, parse_ether, parse_units, UnitsError};
