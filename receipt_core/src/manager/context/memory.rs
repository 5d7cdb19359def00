// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! In-memory context implementation for the receipt manager.
//!
//! Receipts live for as long as the process does. The map is insert-only, so a
//! lock poisoned by a panicking holder still guards a consistent map and is
//! recovered instead of propagated.

use std::{
    collections::{hash_map::Entry, HashMap},
    sync::{Arc, PoisonError, RwLock},
};

use log::{debug, warn};
use thiserror::Error;

use crate::{
    manager::adapters::{ReceiptRead, ReceiptStore},
    Receipt, ReceiptId,
};

pub type ReceiptStorage = Arc<RwLock<HashMap<ReceiptId, Arc<Receipt>>>>;

/// Number of fresh identifiers tried before giving up on an insert.
const MAX_ID_ATTEMPTS: usize = 8;

#[derive(Debug, Error)]
pub enum InMemoryError {
    #[error("could not generate an unused receipt id after {attempts} attempts")]
    IdCollision { attempts: usize },
}

/// Receipt storage shared between request handlers.
///
/// Cloning is cheap and every clone refers to the same map.
#[derive(Clone, Default)]
pub struct InMemoryReceiptStore {
    receipt_storage: ReceiptStorage,
}

impl InMemoryReceiptStore {
    pub fn new(receipt_storage: ReceiptStorage) -> Self {
        InMemoryReceiptStore { receipt_storage }
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.receipt_storage
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    type AdapterError = InMemoryError;

    fn store_receipt(&self, receipt: Receipt) -> Result<ReceiptId, Self::AdapterError> {
        let receipt = Arc::new(receipt);
        let mut receipt_storage = self
            .receipt_storage
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        for _ in 0..MAX_ID_ATTEMPTS {
            let receipt_id = ReceiptId::random();
            match receipt_storage.entry(receipt_id) {
                Entry::Vacant(entry) => {
                    entry.insert(receipt);
                    debug!("Stored receipt {receipt_id}");
                    return Ok(receipt_id);
                }
                Entry::Occupied(_) => {
                    warn!("Generated receipt id {receipt_id} is already in use, retrying");
                }
            }
        }
        Err(InMemoryError::IdCollision {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl ReceiptRead for InMemoryReceiptStore {
    type AdapterError = InMemoryError;

    fn retrieve_receipt(
        &self,
        receipt_id: &ReceiptId,
    ) -> Result<Option<Arc<Receipt>>, Self::AdapterError> {
        let receipt_storage = self
            .receipt_storage
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(receipt_storage.get(receipt_id).cloned())
    }
}
