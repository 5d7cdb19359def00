// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Receipt manager
//!
//! The [`Manager`] owns a storage context and exposes the two entry points
//! of the service: submitting a receipt and scoring a stored receipt.
//!
//! Storage is abstracted by the adapters in [`adapters`]:
//!
//! - [`adapters::ReceiptStore`]: insert a receipt under a fresh identifier.
//! - [`adapters::ReceiptRead`]: look a receipt up by identifier.
//!
//! [`context::memory::InMemoryReceiptStore`] implements both on top of a
//! locked `HashMap`.
//!
//! ## Example
//!
//! ```rust
//! use receipt_core::{
//!     manager::{context::memory::InMemoryReceiptStore, Manager},
//!     Item, Receipt,
//! };
//!
//! let manager = Manager::new(InMemoryReceiptStore::default());
//! let receipt = Receipt {
//!     retailer: "Target".to_owned(),
//!     purchase_date: "2022-01-01".to_owned(),
//!     purchase_time: "13:01".to_owned(),
//!     total: "1.25".to_owned(),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//! };
//!
//! let id = manager.process_receipt(receipt).unwrap();
//! let points = manager.points(&id).unwrap();
//! assert_eq!(points.total(), 6 + 25 + 6);
//! ```

pub mod adapters;
pub mod context;
mod receipt_manager;

pub use receipt_manager::Manager;
