// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Context implementations for the receipt [`crate::manager::Manager`].

pub mod memory;
