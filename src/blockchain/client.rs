// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! PulseChain client for read-only blockchain interactions.

use std::{fmt::Display, future::IntoFuture, time::Duration};

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, Provider, ProviderBuilder, RootProvider,
    },
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use async_trait::async_trait;

use super::erc20::Erc20Contract;
use super::router::IPulseXRouter;
use super::types::*;

/// HTTP provider type for PulseChain (with all fillers).
type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// Read-only ledger operations the HTTP handlers depend on.
///
/// `PulseClient` is the production implementation; tests substitute a mock.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Native coin balance of `address`, in wei.
    async fn native_balance(&self, address: Address) -> Result<U256, LedgerError>;

    async fn token_name(&self, token: Address) -> Result<String, LedgerError>;

    async fn token_symbol(&self, token: Address) -> Result<String, LedgerError>;

    async fn token_decimals(&self, token: Address) -> Result<u8, LedgerError>;

    async fn token_total_supply(&self, token: Address) -> Result<U256, LedgerError>;

    /// Router quote for `amount_in` along `path`, one amount per hop.
    ///
    /// A path without liquidity makes the router revert, which surfaces as
    /// [`LedgerError::Rpc`].
    async fn amounts_out(&self, amount_in: U256, path: &[Address])
        -> Result<Vec<U256>, LedgerError>;
}

/// PulseChain client holding the single shared provider.
pub struct PulseClient {
    /// Network configuration
    network: NetworkConfig,
    /// Alloy HTTP provider
    provider: HttpProvider,
    /// Upper bound on every upstream call
    timeout: Duration,
    /// Router used for price quotes
    router: Address,
}

impl PulseClient {
    /// Create a new client for the specified network.
    pub fn new(network: NetworkConfig, timeout: Duration) -> Result<Self, LedgerError> {
        let url: url::Url = network
            .rpc_url
            .parse()
            .map_err(|e: url::ParseError| LedgerError::InvalidRpcUrl(e.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(url);

        Ok(Self {
            network,
            provider,
            timeout,
            router: PULSEX_ROUTER,
        })
    }

    /// Create a client for PulseChain mainnet.
    pub fn mainnet(timeout: Duration) -> Result<Self, LedgerError> {
        Self::new(PULSECHAIN_MAINNET, timeout)
    }

    /// Get the network configuration.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Call a read-only contract method and decode its return value.
    pub async fn read_contract<C>(&self, to: Address, call: C) -> Result<C::Return, LedgerError>
    where
        C: SolCall + Send,
    {
        tracing::debug!(
            contract = %to,
            method = C::SIGNATURE,
            "eth_call"
        );

        let tx = TransactionRequest::default()
            .to(to)
            .input(call.abi_encode().into());

        let output = self.bounded(self.provider.call(tx)).await?;

        C::abi_decode_returns(&output).map_err(|e| LedgerError::Decode(e.to_string()))
    }

    /// Await an upstream request under the configured timeout.
    async fn bounded<F, T, E>(&self, request: F) -> Result<T, LedgerError>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: Display,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result.map_err(|e| LedgerError::Rpc(e.to_string())),
            Err(_) => Err(LedgerError::Timeout(self.timeout)),
        }
    }
}

#[async_trait]
impl Ledger for PulseClient {
    async fn native_balance(&self, address: Address) -> Result<U256, LedgerError> {
        self.bounded(self.provider.get_balance(address)).await
    }

    async fn token_name(&self, token: Address) -> Result<String, LedgerError> {
        Erc20Contract::new(self, token).name().await
    }

    async fn token_symbol(&self, token: Address) -> Result<String, LedgerError> {
        Erc20Contract::new(self, token).symbol().await
    }

    async fn token_decimals(&self, token: Address) -> Result<u8, LedgerError> {
        Erc20Contract::new(self, token).decimals().await
    }

    async fn token_total_supply(&self, token: Address) -> Result<U256, LedgerError> {
        Erc20Contract::new(self, token).total_supply().await
    }

    async fn amounts_out(
        &self,
        amount_in: U256,
        path: &[Address],
    ) -> Result<Vec<U256>, LedgerError> {
        let call = IPulseXRouter::getAmountsOutCall {
            amountIn: amount_in,
            path: path.to_vec(),
        };
        self.read_contract(self.router, call).await
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Failed to decode contract response: {0}")]
    Decode(String),

    #[error("RPC request timed out after {0:?}")]
    Timeout(Duration),
}
