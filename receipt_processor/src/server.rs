// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use log::{debug, info};
use prometheus::{register_int_counter, IntCounter};
use receipt_core::{
    manager::{context::memory::InMemoryReceiptStore, Manager},
    Receipt, ReceiptId,
};
use tokio::{net::TcpListener, signal, task::JoinHandle};

use crate::{
    dto::{PointsResponse, ProcessResponse},
    error::ApiError,
};

// Register the metrics into the global metrics registry.
lazy_static! {
    static ref RECEIPTS_PROCESSED_COUNTER: IntCounter = register_int_counter!(
        "receipts_processed_count",
        "Number of receipts successfully stored."
    )
    .unwrap();
    static ref RECEIPTS_REJECTED_COUNTER: IntCounter = register_int_counter!(
        "receipts_rejected_count",
        "Number of submitted receipts that could not be decoded."
    )
    .unwrap();
    static ref POINTS_REQUESTS_COUNTER: IntCounter = register_int_counter!(
        "points_requests_count",
        "Number of successful points requests."
    )
    .unwrap();
    static ref POINTS_NOT_FOUND_COUNTER: IntCounter = register_int_counter!(
        "points_not_found_count",
        "Number of points requests for an unknown receipt id."
    )
    .unwrap();
    static ref POINTS_AWARDED_TOTAL: IntCounter = register_int_counter!(
        "points_awarded_total",
        "Sum of the points returned by successful points requests."
    )
    .unwrap();
}

/// Manager shared by every request handler.
pub type SharedManager = Arc<Manager<InMemoryReceiptStore>>;

async fn process_receipt(
    State(manager): State<SharedManager>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ApiError> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        RECEIPTS_REJECTED_COUNTER.inc();
        debug!("Rejected receipt: {e}");
        ApiError::BadRequest(e.to_string())
    })?;

    let id = manager.process_receipt(receipt)?;
    RECEIPTS_PROCESSED_COUNTER.inc();
    debug!("Processed receipt {id}");

    Ok(Json(ProcessResponse { id }))
}

async fn get_points(
    State(manager): State<SharedManager>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let breakdown = id
        .parse::<ReceiptId>()
        .and_then(|receipt_id| manager.points(&receipt_id))
        .inspect_err(|e| {
            if matches!(
                e,
                receipt_core::Error::ReceiptNotFound { .. }
                    | receipt_core::Error::InvalidReceiptId { .. }
            ) {
                POINTS_NOT_FOUND_COUNTER.inc();
                debug!("No receipt found for id {id}");
            }
        })?;

    debug!("Points for receipt {id}: {breakdown}");
    let points = breakdown.total();
    POINTS_REQUESTS_COUNTER.inc();
    saturating_inc_by(&POINTS_AWARDED_TOTAL, points);

    Ok(Json(PointsResponse { points }))
}

/// `IntCounter::inc_by` wraps on overflow, this stops at `u64::MAX` instead.
fn saturating_inc_by(counter: &IntCounter, value: u64) {
    counter.inc_by(value.min(u64::MAX - counter.get()));
}

/// Builds the HTTP API around `manager`.
pub fn create_router(
    manager: SharedManager,
    max_request_body_size: usize,
    max_concurrent_requests: usize,
) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .layer(DefaultBodyLimit::max(max_request_body_size))
        .layer(tower::limit::ConcurrencyLimitLayer::new(
            max_concurrent_requests,
        ))
        .with_state(manager)
}

/// Binds `port` (0 picks a free one) and serves the API in a background task
/// until a shutdown signal is received.
///
/// Returns the server task and the address it is bound to.
pub async fn run_server(
    port: u16,
    manager: SharedManager,
    max_request_body_size: usize,
    max_concurrent_requests: usize,
) -> Result<(JoinHandle<()>, SocketAddr)> {
    let router = create_router(manager, max_request_body_size, max_concurrent_requests);

    // Create a `TcpListener` using tokio.
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind to receipt processor port {port}"))?;

    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_handler())
            .await
        {
            log::error!("Receipt processor error: {e}");
        }
    });
    info!("Receipt processor bound to {addr}");

    Ok((handle, addr))
}

/// Graceful shutdown handler
async fn shutdown_handler() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Signal received, starting graceful shutdown");
}
