// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0
#![doc = include_str!("../README.md")]
//! ## Getting started
//!
//! Take a look at the [`manager`] module: build a [`manager::Manager`] around an
//! [`manager::context::memory::InMemoryReceiptStore`] once at process start and
//! share it with every request handler.

mod error;
pub mod manager;
pub mod points;
mod receipt;

pub use error::{Error, Result};
pub use receipt::{Item, Receipt, ReceiptId};
