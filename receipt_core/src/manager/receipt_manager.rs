// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use super::adapters::{ReceiptRead, ReceiptStore};
use crate::{
    points::{self, PointsBreakdown},
    Error, Receipt, ReceiptId,
};

pub struct Manager<E> {
    /// Context that implements adapters
    context: E,
}

impl<E> Manager<E> {
    /// Creates a new manager around `context`. Build it once at process start
    /// and share it between request handlers.
    pub fn new(context: E) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &E {
        &self.context
    }
}

impl<E> Manager<E>
where
    E: ReceiptStore,
{
    /// Stores `receipt` and returns the identifier it can be scored under.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AdapterError`] if the receipt could not be stored.
    pub fn process_receipt(&self, receipt: Receipt) -> Result<ReceiptId, Error> {
        self.context
            .store_receipt(receipt)
            .map_err(|err| Error::AdapterError {
                source_error: anyhow::Error::new(err),
            })
    }
}

impl<E> Manager<E>
where
    E: ReceiptRead,
{
    /// Looks up the receipt stored under `receipt_id` and scores it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReceiptNotFound`] if no receipt was stored under
    /// `receipt_id`, and [`Error::AdapterError`] if the lookup itself failed.
    pub fn points(&self, receipt_id: &ReceiptId) -> Result<PointsBreakdown, Error> {
        let receipt = self
            .context
            .retrieve_receipt(receipt_id)
            .map_err(|err| Error::AdapterError {
                source_error: anyhow::Error::new(err),
            })?
            .ok_or(Error::ReceiptNotFound { id: *receipt_id })?;

        Ok(points::breakdown(&receipt))
    }
}
