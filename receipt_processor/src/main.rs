// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use receipt_core::manager::{context::memory::InMemoryReceiptStore, Manager};
use receipt_processor::{metrics, server};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on for API requests.
    /// Defaults to 8080.
    #[arg(long, default_value_t = 8080, env = "RECEIPT_PORT")]
    port: u16,

    /// Metrics server port.
    /// Defaults to 5000.
    #[arg(long, default_value_t = 5000, env = "RECEIPT_METRICS_PORT")]
    metrics_port: u16,

    /// Maximum request body size in bytes.
    /// Defaults to 1MB.
    #[arg(long, default_value_t = 1024 * 1024, env = "RECEIPT_MAX_REQUEST_BODY_SIZE")]
    max_request_body_size: usize,

    /// Maximum number of requests handled concurrently.
    /// Defaults to 256.
    #[arg(long, default_value_t = 256, env = "RECEIPT_MAX_CONCURRENT_REQUESTS")]
    max_concurrent_requests: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger.
    // Set the log level by setting the RUST_LOG environment variable.
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    debug!("Settings: {:?}", args);

    // Start the metrics server.
    // We just let it gracelessly get killed at the end of main()
    tokio::spawn(metrics::run_server(args.metrics_port));

    // Receipts only live as long as the process.
    let manager = Arc::new(Manager::new(InMemoryReceiptStore::default()));

    // Start the API server.
    // This await is non-blocking
    let (handle, _) = server::run_server(
        args.port,
        manager,
        args.max_request_body_size,
        args.max_concurrent_requests,
    )
    .await?;
    info!("Server started. Listening on port {}.", args.port);

    let _ = handle.await;

    // If we're here, we've received a signal to exit.
    info!("Shutting down...");
    Ok(())
}
