// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Native balance endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::extract::PathParams,
    blockchain::{format_ether, parse_address},
    error::{ApiError, ErrorBody},
    state::AppState,
};

/// Native PLS balance.
#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceResponse {
    /// Balance in PLS, full precision
    pub balance: String,
}

/// Get the native PLS balance of an address.
#[utoipa::path(
    get,
    path = "/balance/{address}",
    tag = "Balance",
    params(
        ("address" = String, Path, description = "Account address (0x + 40 hex)")
    ),
    responses(
        (status = 200, description = "Balance retrieved successfully", body = BalanceResponse),
        (status = 400, description = "Invalid address", body = ErrorBody),
        (status = 500, description = "Upstream node failure", body = ErrorBody)
    )
)]
pub async fn get_balance(
    State(state): State<AppState>,
    PathParams(address): PathParams<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let address = parse_address(&address).ok_or_else(ApiError::invalid_address)?;

    let wei = state.ledger.native_balance(address).await.map_err(|e| {
        tracing::warn!(%address, error = %e, "Failed to query native balance");
        e
    })?;

    Ok(Json(BalanceResponse {
        balance: format_ether(wei),
    }))
}
