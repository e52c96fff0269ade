// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 token metadata endpoint.

use axum::{extract::State, Json};

use crate::{
    api::extract::PathParams,
    blockchain::{parse_address, TokenMetadata},
    error::{ApiError, ErrorBody},
    state::AppState,
};

/// Get name, symbol, decimals and total supply of an ERC-20 token.
///
/// The four reads run concurrently; if any of them fails the request fails.
#[utoipa::path(
    get,
    path = "/token/{address}",
    tag = "Token",
    params(
        ("address" = String, Path, description = "Token contract address")
    ),
    responses(
        (status = 200, description = "Token metadata", body = TokenMetadata),
        (status = 400, description = "Invalid address", body = ErrorBody),
        (status = 500, description = "Upstream node failure or not an ERC-20 contract", body = ErrorBody)
    )
)]
pub async fn get_token(
    State(state): State<AppState>,
    PathParams(address): PathParams<String>,
) -> Result<Json<TokenMetadata>, ApiError> {
    let token = parse_address(&address).ok_or_else(ApiError::invalid_address)?;
    let ledger = state.ledger.as_ref();

    let (name, symbol, decimals, total_supply) = tokio::try_join!(
        ledger.token_name(token),
        ledger.token_symbol(token),
        ledger.token_decimals(token),
        ledger.token_total_supply(token),
    )
    .map_err(|e| {
        tracing::warn!(%token, error = %e, "Failed to read token metadata");
        e
    })?;

    Ok(Json(TokenMetadata {
        name,
        symbol,
        decimals,
        total_supply: total_supply.to_string(),
    }))
}
