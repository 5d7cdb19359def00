// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics server.
//!
//! Metrics are registered into the global registry where they are used (see
//! [`crate::server`]); this module only exposes them over HTTP.

use axum::{http::StatusCode, routing::get, Router};
use log::{error, info};
use prometheus::TextEncoder;
use tokio::net::TcpListener;

async fn handler_metrics() -> (StatusCode, String) {
    let metric_families = prometheus::gather();
    let encoder = TextEncoder::new();

    match encoder.encode_to_string(&metric_families) {
        Ok(s) => (StatusCode::OK, s),
        Err(e) => {
            error!("Error encoding metrics: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error encoding metrics: {e}"),
            )
        }
    }
}

async fn handler_404() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

pub fn router() -> Router {
    Router::new()
        .route("/metrics", get(handler_metrics))
        .fallback(handler_404)
}

/// Serves the metrics until the process exits. Errors are logged, not
/// returned, so that a metrics failure never takes the service down.
pub async fn run_server(port: u16) {
    let listener = match TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind metrics server to port {port}: {e}");
            return;
        }
    };
    info!("Metrics server listening on port {port}");

    if let Err(e) = axum::serve(listener, router()).await {
        error!("Metrics server error: {e}");
    }
}
