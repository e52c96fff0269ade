// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use pulsechain_price_api::{
    api::router, blockchain::PulseClient, config::ServerConfig, state::AppState, telemetry,
};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::from_env();
    telemetry::init(config.log_format);

    // Single upstream connection shared by every request
    let client = match PulseClient::mainnet(config.rpc_timeout) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create PulseChain client");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        network = client.network().name,
        chain_id = client.network().chain_id,
        rpc_url = client.network().rpc_url,
        timeout_secs = config.rpc_timeout.as_secs(),
        "PulseChain client ready"
    );

    let app = router(AppState::new(client));

    let addr = config.bind_address();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Pulsechain Price API listening on http://{addr} (docs at /docs)");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "HTTP server failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("Server stopped");
    ExitCode::SUCCESS
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
