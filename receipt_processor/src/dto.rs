// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Response bodies of the HTTP API. The request body is a
//! [`receipt_core::Receipt`].

use receipt_core::ReceiptId;
use serde::{Deserialize, Serialize};

/// Answer to `POST /receipts/process`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Answer to `GET /receipts/{id}/points`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PointsResponse {
    pub points: u64,
}

/// Body of every error response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code
    pub code: String,
}
