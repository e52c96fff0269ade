// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! PulseX price quote endpoint.

use alloy::primitives::{Address, U256};
use axum::{extract::State, Json};

use crate::{
    api::extract::PathParams,
    blockchain::{
        format_ether, parse_address, parse_ether,
        router::{identity_quote, quote_path},
        Ledger, PriceQuote, DAI, WPLS,
    },
    error::{ApiError, ErrorBody},
    state::AppState,
};

/// Quote `amountIn` of `tokenIn` in WPLS and in DAI.
///
/// `amountIn` is read with 18 decimals. The WPLS leg uses the path
/// `[tokenIn, WPLS]` and the USD leg `[tokenIn, WPLS, DAI]`; the last amount
/// of each router quote is returned.
#[utoipa::path(
    get,
    path = "/price/{tokenIn}/{amountIn}",
    tag = "Price",
    params(
        ("tokenIn" = String, Path, description = "Input token address"),
        ("amountIn" = String, Path, description = "Input amount as a decimal string, e.g. `1.5`")
    ),
    responses(
        (status = 200, description = "Price quote", body = PriceQuote),
        (status = 400, description = "Invalid address or amount", body = ErrorBody),
        (status = 500, description = "Upstream failure or no liquidity route", body = ErrorBody)
    )
)]
pub async fn get_price(
    State(state): State<AppState>,
    PathParams((token_in, amount_in)): PathParams<(String, String)>,
) -> Result<Json<PriceQuote>, ApiError> {
    let token_in = parse_address(&token_in).ok_or_else(ApiError::invalid_address)?;
    let amount_in = parse_ether(&amount_in)?;
    let ledger = state.ledger.as_ref();

    let native_leg = [token_in, WPLS];
    let usd_leg = [token_in, WPLS, DAI];
    let (amount_out, amount_out_usd) = tokio::try_join!(
        quote_last(ledger, amount_in, &native_leg),
        quote_last(ledger, amount_in, &usd_leg),
    )?;

    Ok(Json(PriceQuote {
        amount_out: format_ether(amount_out),
        amount_out_usd: format_ether(amount_out_usd),
    }))
}

/// Quote `amount_in` along `hops` and return the final amount.
async fn quote_last(
    ledger: &dyn Ledger,
    amount_in: U256,
    hops: &[Address],
) -> Result<U256, ApiError> {
    let path = quote_path(hops);

    let amounts = if path.len() < 2 {
        identity_quote(amount_in)
    } else {
        ledger.amounts_out(amount_in, &path).await.map_err(|e| {
            tracing::warn!(path = ?path, error = %e, "Router quote failed");
            e
        })?
    };

    amounts
        .last()
        .copied()
        .ok_or_else(|| ApiError::internal("Router returned an empty quote"))
}

#[cfg(test)]
mod tests {
    use std::sync::{atomic::Ordering, Arc};

    use alloy::primitives::{Address, U256};
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        api::{router, test_support::*},
        blockchain::{LedgerError, DAI, WPLS},
        state::AppState,
    };

    const ONE: u64 = 1_000_000_000_000_000_000;

    fn token() -> Address {
        Address::repeat_byte(0x42)
    }

    #[tokio::test]
    async fn quotes_both_legs_from_last_hop() {
        // 1 token -> 2 WPLS -> 0.0001 DAI
        let ledger = Arc::new(MockLedger::with_quote(|amount_in, path| {
            let mut amounts = vec![amount_in, amount_in * U256::from(2u64)];
            if path.len() == 3 {
                amounts.push(amount_in / U256::from(10_000u64));
            }
            Ok(amounts)
        }));
        let app = router(AppState {
            ledger: ledger.clone(),
        });

        let (status, body) = get_json(app, &format!("/price/{}/1", token())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "amountOut": "2", "amountOutUSD": "0.0001" }));

        let mut paths = ledger.quoted_paths.lock().unwrap().clone();
        paths.sort_by_key(|p| p.len());
        assert_eq!(paths, vec![vec![token(), WPLS], vec![token(), WPLS, DAI]]);
    }

    #[tokio::test]
    async fn amount_is_scaled_by_18_decimals() {
        let ledger = MockLedger::with_quote(|amount_in, path| {
            assert_eq!(amount_in, U256::from(ONE / 2));
            Ok(vec![amount_in; path.len()])
        });
        let app = router(AppState::new(ledger));

        let (status, body) = get_json(app, &format!("/price/{}/0.5", token())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amountOut"], "0.5");
    }

    #[tokio::test]
    async fn wpls_input_is_an_identity_quote() {
        let ledger = Arc::new(MockLedger::with_quote(|amount_in, _path| {
            Ok(vec![amount_in, amount_in * U256::from(3u64)])
        }));
        let app = router(AppState {
            ledger: ledger.clone(),
        });

        let (status, body) = get_json(app, &format!("/price/{WPLS}/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "amountOut": "1", "amountOutUSD": "3" }));

        let paths = ledger.quoted_paths.lock().unwrap().clone();
        assert_eq!(paths, vec![vec![WPLS, DAI]]);
    }

    #[tokio::test]
    async fn reverting_quote_is_500_with_upstream_message() {
        let app = router(AppState::new(MockLedger::with_quote(|_, _| {
            Err(LedgerError::Rpc(
                "execution reverted: PulseXLibrary: INSUFFICIENT_LIQUIDITY".to_string(),
            ))
        })));

        let (status, body) = get_json(app, &format!("/price/{}/1", token())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"]["message"],
            "RPC error: execution reverted: PulseXLibrary: INSUFFICIENT_LIQUIDITY"
        );
    }

    #[tokio::test]
    async fn empty_router_result_is_500() {
        let app = router(AppState::new(MockLedger::with_quote(|_, _| Ok(Vec::new()))));

        let (status, body) = get_json(app, &format!("/price/{}/1", token())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Router returned an empty quote");
    }

    #[tokio::test]
    async fn malformed_amount_is_400() {
        let ledger = Arc::new(MockLedger::default());
        let app = router(AppState {
            ledger: ledger.clone(),
        });

        for amount in ["abc", "1.2.3", "-1", "0.0000000000000000001"] {
            let (status, body) =
                get_json(app.clone(), &format!("/price/{}/{amount}", token())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "amount {amount:?}");
            assert!(body["error"]["message"].is_string());
        }
        assert_eq!(ledger.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_token_is_400() {
        let app = router(AppState::new(MockLedger::default()));

        let (status, body) = get_json(app, "/price/0xnothex/1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid Ethereum address");
    }
}
