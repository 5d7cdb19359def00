// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use crate::{Receipt, ReceiptId};

/// Stores receipts in the storage.
///
/// # Example
///
/// For example code see [crate::manager::context::memory::InMemoryReceiptStore]
pub trait ReceiptStore {
    /// Defines the user-specified error type.
    ///
    /// This error type should implement the `Error` and `Debug` traits from the standard library.
    /// Errors of this type are returned to the user when an operation fails.
    type AdapterError: std::error::Error + std::fmt::Debug + Send + Sync + 'static;

    /// Stores a new [`Receipt`] into the storage.
    ///
    /// It returns a freshly generated [`ReceiptId`] that was never issued before.
    /// Once this returns, the receipt must be visible to [`ReceiptRead`] under
    /// that identifier. Concurrent calls must not lose receipts.
    fn store_receipt(&self, receipt: Receipt) -> Result<ReceiptId, Self::AdapterError>;
}

/// Retrieves receipts from storage.
///
/// # Example
///
/// For example code see [crate::manager::context::memory::InMemoryReceiptStore]
pub trait ReceiptRead {
    /// Defines the user-specified error type.
    ///
    /// This error type should implement the `Error` and `Debug` traits from
    /// the standard library.
    /// Errors of this type are returned to the user when an operation fails.
    type AdapterError: std::error::Error + std::fmt::Debug + Send + Sync + 'static;

    /// Retrieves the receipt stored under `receipt_id`.
    ///
    /// Returns `Ok(None)` when no receipt was ever stored under that
    /// identifier. Storage failures are reported as `AdapterError`.
    fn retrieve_receipt(
        &self,
        receipt_id: &ReceiptId,
    ) -> Result<Option<Arc<Receipt>>, Self::AdapterError>;
}
