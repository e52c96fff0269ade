// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Conversion between human-readable decimal strings and base units.
//!
//! All arithmetic is done on `U256`; no floating point is involved anywhere,
//! so balances and supplies keep full precision.

use alloy::primitives::U256;

use super::types::NATIVE_DECIMALS;

/// Largest scale for which `10^decimals` fits in a `U256`.
pub const MAX_DECIMALS: u8 = 77;

/// Errors produced while parsing a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitsError {
    #[error("Amount is empty")]
    Empty,

    #[error("Invalid amount: {0}")]
    InvalidNumber(String),

    #[error("Too many decimal places (max {0})")]
    TooManyDecimals(u8),

    #[error("Amount overflow")]
    Overflow,

    #[error("Unsupported decimal scale: {0}")]
    UnsupportedDecimals(u8),
}

/// Parse a decimal string (e.g. `"1.5"`) into base units at the given scale.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
    if decimals > MAX_DECIMALS {
        return Err(UnitsError::UnsupportedDecimals(decimals));
    }
    if amount.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (whole, fraction) = match amount.split_once('.') {
        Some((w, f)) => (w, f),
        None => (amount, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(UnitsError::InvalidNumber(amount.to_string()));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(UnitsError::InvalidNumber(amount.to_string()));
    }
    if fraction.len() > decimals as usize {
        return Err(UnitsError::TooManyDecimals(decimals));
    }

    let whole = if whole.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(whole, 10).map_err(|_| UnitsError::Overflow)?
    };

    let fraction = if fraction.is_empty() {
        U256::ZERO
    } else {
        // Pad with zeros to match decimals
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        U256::from_str_radix(&padded, 10).map_err(|_| UnitsError::Overflow)?
    };

    let multiplier = U256::from(10u64).pow(U256::from(decimals));
    whole
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(fraction))
        .ok_or(UnitsError::Overflow)
}

/// Format base units as a decimal string at the given scale.
///
/// Trailing fractional zeros are dropped; the fraction is omitted entirely
/// when it is zero. Above [`MAX_DECIMALS`] every `U256` is below one whole
/// unit, so the whole part is zero.
pub fn format_units(amount: U256, decimals: u8) -> String {
    if amount.is_zero() || decimals == 0 {
        return amount.to_string();
    }

    let (whole, remainder) = if decimals > MAX_DECIMALS {
        (U256::ZERO, amount)
    } else {
        let divisor = U256::from(10u64).pow(U256::from(decimals));
        (amount / divisor, amount % divisor)
    };

    if remainder.is_zero() {
        return whole.to_string();
    }

    let digits = remainder.to_string();
    let padded = format!("{:0>width$}", digits, width = decimals as usize);
    format!("{}.{}", whole, padded.trim_end_matches('0'))
}

/// Parse an amount of the native coin (18 decimals) into wei.
pub fn parse_ether(amount: &str) -> Result<U256, UnitsError> {
    parse_units(amount, NATIVE_DECIMALS)
}

/// Format wei as a native-coin decimal string.
pub fn format_ether(amount: U256) -> String {
    format_units(amount, NATIVE_DECIMALS)
}
