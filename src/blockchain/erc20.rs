// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 token contract interactions.

use alloy::{
    primitives::{Address, U256},
    sol,
};

use super::client::{LedgerError, PulseClient};

// Read-only subset of the ERC-20 interface
sol! {
    interface IERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
    }
}

/// Read-only view of an ERC-20 contract.
pub struct Erc20Contract<'a> {
    client: &'a PulseClient,
    address: Address,
}

impl<'a> Erc20Contract<'a> {
    pub fn new(client: &'a PulseClient, address: Address) -> Self {
        Self { client, address }
    }

    /// Get the token name.
    pub async fn name(&self) -> Result<String, LedgerError> {
        self.client
            .read_contract(self.address, IERC20::nameCall {})
            .await
    }

    /// Get the token symbol.
    pub async fn symbol(&self) -> Result<String, LedgerError> {
        self.client
            .read_contract(self.address, IERC20::symbolCall {})
            .await
    }

    /// Get the token decimals.
    pub async fn decimals(&self) -> Result<u8, LedgerError> {
        self.client
            .read_contract(self.address, IERC20::decimalsCall {})
            .await
    }

    /// Get the total supply in base units.
    pub async fn total_supply(&self) -> Result<U256, LedgerError> {
        self.client
            .read_contract(self.address, IERC20::totalSupplyCall {})
            .await
    }
}
