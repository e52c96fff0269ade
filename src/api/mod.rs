// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::any::Any;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    blockchain::{PriceQuote, TokenMetadata},
    error::{ApiError, ErrorBody, ErrorMessage},
    state::AppState,
};

pub mod balance;
pub mod extract;
pub mod price;
pub mod root;
pub mod token;

#[cfg(test)]
pub(crate) mod test_support;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(root::status))
        .route("/balance/{address}", get(balance::get_balance))
        .route("/token/{address}", get(token::get_token))
        .route("/price/{tokenIn}/{amountIn}", get(price::get_price))
        .with_state(state);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware)
}

/// Fallback for unmatched routes.
async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// Render a handler panic as a 500 instead of dropping the connection.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");

    ApiError::internal("Internal Server Error").into_response()
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Pulsechain Price API"),
    paths(
        root::status,
        balance::get_balance,
        token::get_token,
        price::get_price
    ),
    components(
        schemas(
            root::StatusResponse,
            balance::BalanceResponse,
            TokenMetadata,
            PriceQuote,
            ErrorBody,
            ErrorMessage
        )
    ),
    tags(
        (name = "Status", description = "Service status"),
        (name = "Balance", description = "Native PLS balances"),
        (name = "Token", description = "ERC-20 token metadata"),
        (name = "Price", description = "PulseX price quotes")
    )
)]
struct ApiDoc;
