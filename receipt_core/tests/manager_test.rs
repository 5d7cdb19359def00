// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, RwLock},
    thread,
};

use receipt_core::{
    manager::{
        adapters::{ReceiptRead, ReceiptStore},
        context::memory::InMemoryReceiptStore,
        Manager,
    },
    Error, Item, Receipt, ReceiptId,
};
use rstest::*;

#[fixture]
fn receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_owned(),
        purchase_date: "2022-01-01".to_owned(),
        purchase_time: "13:01".to_owned(),
        total: "35.35".to_owned(),
        items: vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Knorr Creamy Chicken", "1.26"),
            Item::new("Doritos Nacho Cheese", "3.35"),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

#[fixture]
fn manager() -> Manager<InMemoryReceiptStore> {
    let receipt_storage = Arc::new(RwLock::new(HashMap::new()));
    Manager::new(InMemoryReceiptStore::new(receipt_storage))
}

#[rstest]
fn processed_receipt_round_trips(manager: Manager<InMemoryReceiptStore>, receipt: Receipt) {
    let receipt_id = manager.process_receipt(receipt.clone()).unwrap();

    let stored = manager
        .context()
        .retrieve_receipt(&receipt_id)
        .unwrap()
        .expect("receipt should be stored before its id is returned");
    assert_eq!(*stored, receipt);
    assert_eq!(manager.points(&receipt_id).unwrap().total(), 28);
}

#[rstest]
fn scoring_unknown_id_reports_not_found(
    manager: Manager<InMemoryReceiptStore>,
    receipt: Receipt,
) {
    manager.process_receipt(receipt).unwrap();

    let unknown = ReceiptId::random();
    match manager.points(&unknown) {
        Err(Error::ReceiptNotFound { id }) => assert_eq!(id, unknown),
        other => panic!("expected ReceiptNotFound, got {other:?}"),
    }
}

#[rstest]
fn scoring_is_repeatable(manager: Manager<InMemoryReceiptStore>, receipt: Receipt) {
    let receipt_id = manager.process_receipt(receipt).unwrap();
    let first = manager.points(&receipt_id).unwrap();
    let second = manager.points(&receipt_id).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn concurrent_submissions_are_all_retrievable(
    manager: Manager<InMemoryReceiptStore>,
    receipt: Receipt,
) {
    const THREADS: usize = 8;
    const RECEIPTS_PER_THREAD: usize = 250;

    let submitted: Vec<(ReceiptId, Receipt)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|thread_idx| {
                let manager = &manager;
                let receipt = &receipt;
                scope.spawn(move || {
                    (0..RECEIPTS_PER_THREAD)
                        .map(|idx| {
                            let mut receipt = receipt.clone();
                            receipt.retailer = format!("Store {thread_idx}-{idx}");
                            let receipt_id = manager.process_receipt(receipt.clone()).unwrap();
                            // Interleave reads with the other writers.
                            assert!(manager.points(&receipt_id).is_ok());
                            (receipt_id, receipt)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    });

    let ids: HashSet<ReceiptId> = submitted.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids.len(), THREADS * RECEIPTS_PER_THREAD);
    assert_eq!(manager.context().len(), THREADS * RECEIPTS_PER_THREAD);

    for (receipt_id, receipt) in &submitted {
        let stored = manager
            .context()
            .retrieve_receipt(receipt_id)
            .unwrap()
            .unwrap();
        assert_eq!(*stored, *receipt);
    }
}

/// Storage that refuses every operation, to check how adapter failures surface.
struct FailingStore;

#[derive(Debug, thiserror::Error)]
#[error("storage offline")]
struct Offline;

impl ReceiptStore for FailingStore {
    type AdapterError = Offline;

    fn store_receipt(&self, _receipt: Receipt) -> Result<ReceiptId, Self::AdapterError> {
        Err(Offline)
    }
}

impl ReceiptRead for FailingStore {
    type AdapterError = Offline;

    fn retrieve_receipt(
        &self,
        _receipt_id: &ReceiptId,
    ) -> Result<Option<Arc<Receipt>>, Self::AdapterError> {
        Err(Offline)
    }
}

#[rstest]
fn adapter_failures_are_reported(receipt: Receipt) {
    let manager = Manager::new(FailingStore);

    let err = manager.process_receipt(receipt).unwrap_err();
    assert!(matches!(err, Error::AdapterError { .. }));
    assert!(err.to_string().contains("storage offline"));

    let err = manager.points(&ReceiptId::random()).unwrap_err();
    assert!(matches!(err, Error::AdapterError { .. }));
}
