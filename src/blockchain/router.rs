// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! PulseX (Uniswap V2 style) router quoting.

use alloy::{
    primitives::{Address, U256},
    sol,
};

sol! {
    interface IPulseXRouter {
        function getAmountsOut(uint256 amountIn, address[] memory path)
            external
            view
            returns (uint256[] memory amounts);
    }
}

/// Build a quote path, collapsing consecutive duplicate hops.
///
/// `[WPLS, WPLS, DAI]` becomes `[WPLS, DAI]`. A path that collapses to a
/// single token has no hop to quote.
pub fn quote_path(hops: &[Address]) -> Vec<Address> {
    let mut path: Vec<Address> = hops.to_vec();
    path.dedup();
    path
}

/// Quote for a path with no hops: the input amount, unchanged.
pub fn identity_quote(amount_in: U256) -> Vec<U256> {
    vec![amount_in]
}
