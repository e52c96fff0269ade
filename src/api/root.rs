// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

pub const ACTIVE_MESSAGE: &str = "Pulsechain Price API - Active!";

/// Liveness banner.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub message: String,
}

/// Service banner. Always returns 200 if the process is running.
#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    responses(
        (status = 200, description = "Service is running", body = StatusResponse)
    )
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: ACTIVE_MESSAGE.to_string(),
    })
}
