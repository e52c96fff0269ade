// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account address validation.
//!
//! An address is `0x` followed by 40 hexadecimal characters. Lowercase and
//! uppercase forms are accepted as-is; mixed-case input must carry a valid
//! EIP-55 checksum.

use alloy::primitives::Address;

/// Returns `true` if `input` is a well-formed account address.
pub fn is_valid_address(input: &str) -> bool {
    let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    else {
        return false;
    };

    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        let prefixed = format!("0x{hex}");
        return Address::parse_checksummed(&prefixed, None).is_ok();
    }

    true
}

/// Parse a validated address, returning `None` when it fails validation.
pub fn parse_address(input: &str) -> Option<Address> {
    if !is_valid_address(input) {
        return None;
    }
    input[2..].parse::<Address>().ok()
}
