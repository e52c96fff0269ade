// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory [`Ledger`] and request helpers for handler tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::blockchain::{Ledger, LedgerError};

type QuoteFn = Box<dyn Fn(U256, &[Address]) -> Result<Vec<U256>, LedgerError> + Send + Sync>;

pub struct MockLedger {
    pub balance: Result<U256, LedgerError>,
    pub name: Result<String, LedgerError>,
    pub symbol: Result<String, LedgerError>,
    pub decimals: Result<u8, LedgerError>,
    pub total_supply: Result<U256, LedgerError>,
    pub quote: QuoteFn,
    pub calls: AtomicUsize,
    pub quoted_paths: Mutex<Vec<Vec<Address>>>,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self {
            balance: Ok(U256::ZERO),
            name: Ok("Dai".to_string()),
            symbol: Ok("DAI".to_string()),
            decimals: Ok(18),
            total_supply: Ok(U256::ZERO),
            quote: Box::new(|amount_in, path| Ok(vec![amount_in; path.len()])),
            calls: AtomicUsize::new(0),
            quoted_paths: Mutex::new(Vec::new()),
        }
    }
}

impl MockLedger {
    pub fn with_quote(
        quote: impl Fn(U256, &[Address]) -> Result<Vec<U256>, LedgerError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            quote: Box::new(quote),
            ..Self::default()
        }
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn native_balance(&self, _address: Address) -> Result<U256, LedgerError> {
        self.hit();
        self.balance.clone()
    }

    async fn token_name(&self, _token: Address) -> Result<String, LedgerError> {
        self.hit();
        self.name.clone()
    }

    async fn token_symbol(&self, _token: Address) -> Result<String, LedgerError> {
        self.hit();
        self.symbol.clone()
    }

    async fn token_decimals(&self, _token: Address) -> Result<u8, LedgerError> {
        self.hit();
        self.decimals.clone()
    }

    async fn token_total_supply(&self, _token: Address) -> Result<U256, LedgerError> {
        self.hit();
        self.total_supply.clone()
    }

    async fn amounts_out(
        &self,
        amount_in: U256,
        path: &[Address],
    ) -> Result<Vec<U256>, LedgerError> {
        self.hit();
        self.quoted_paths.lock().unwrap().push(path.to_vec());
        (self.quote)(amount_in, path)
    }
}

/// Issue a GET against `app` and return the status with the parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}
