// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Module containing the Receipt type submitted by clients.
//!
//! Every field is kept as the text that was submitted. Numeric, date and time
//! fields are only interpreted when the receipt is scored, see
//! [`crate::points::ScoringFields`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

/// A purchase receipt, as submitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Name of the retailer or store the receipt is from.
    pub retailer: String,
    /// Date of the purchase, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Time of the purchase, 24-hour `HH:MM`.
    pub purchase_time: String,
    /// Total amount paid, e.g. `"35.35"`.
    pub total: String,
    pub items: Vec<Item>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// Opaque identifier assigned to a receipt when it is stored.
///
/// Identifiers are random (UUID v4) and never derived from the receipt content.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|err| Error::InvalidReceiptId {
                id: s.to_owned(),
                source_error_message: err.to_string(),
            })
    }
}
