// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::ReceiptId;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("No receipt found for id {id}")]
    ReceiptNotFound { id: ReceiptId },
    #[error("Invalid receipt id \"{id}\": {source_error_message}")]
    InvalidReceiptId {
        id: String,
        source_error_message: String,
    },
    #[error("Error from adapter.\n Caused by: {source_error}")]
    AdapterError { source_error: anyhow::Error },
}

pub type Result<T> = StdResult<T, Error>;
