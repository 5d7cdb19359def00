// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

pub mod dto;
pub mod error;
pub mod metrics;
pub mod server;
