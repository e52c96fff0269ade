// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and constants.

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// PulseChain network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: &'static str,
}

/// PulseChain Mainnet configuration.
pub const PULSECHAIN_MAINNET: NetworkConfig = NetworkConfig {
    name: "PulseChain",
    chain_id: 369,
    rpc_url: "https://rpc.pulsechain.com",
};

/// PulseX V2 router (Uniswap V2 compatible).
pub const PULSEX_ROUTER: Address = address!("0x165C3410fC91EF562C50559f7d2289fEbed552d9");

/// Wrapped PLS. Every quote path hops through it.
pub const WPLS: Address = address!("0xA1077a294dDE1B09bB078844df40758a5D0f9a27");

/// Bridged DAI, used as the USD reference asset.
pub const DAI: Address = address!("0xefD766cCb38EAF1dfd701853BFCe31359239F305");

/// Decimals of the native coin and of the quote outputs.
pub const NATIVE_DECIMALS: u8 = 18;

/// ERC-20 token metadata, fetched live per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Number of decimals
    pub decimals: u8,
    /// Total supply in base units, as a decimal integer string
    pub total_supply: String,
}

/// Swap-router price quote for an input amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Output amount in WPLS (decimal string)
    pub amount_out: String,
    /// Output amount in DAI (decimal string)
    #[serde(rename = "amountOutUSD")]
    pub amount_out_usd: String,
}
