// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;

use crate::Receipt;

/// The string-encoded fields of a [`Receipt`] that the scoring rules read,
/// parsed once.
///
/// A field that fails to parse takes the zero value of its type. That way one
/// malformed field only degrades the rule that reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringFields {
    /// `None` when the total spells out an infinity or NaN. Such a total is
    /// never a multiple of anything.
    pub total: Option<Decimal>,
    pub day_of_month: i64,
    pub hour: i64,
    /// Parsed prices, in the same order as `Receipt::items`.
    pub item_prices: Vec<Decimal>,
}

impl ScoringFields {
    pub fn parse(receipt: &Receipt) -> Self {
        let total = if is_non_finite(&receipt.total) {
            debug!("Non-finite total {:?}", receipt.total);
            None
        } else {
            Some(parse_decimal(&receipt.total).unwrap_or_else(|| {
                debug!("Unparsable total {:?}, using 0", receipt.total);
                Decimal::ZERO
            }))
        };

        // The day is read from the last two characters of `YYYY-MM-DD`.
        let day_of_month = trailing_chars(&receipt.purchase_date, 2)
            .and_then(|day| i64::from_str(day).ok())
            .unwrap_or_else(|| {
                debug!(
                    "Unparsable purchase date {:?}, using day 0",
                    receipt.purchase_date
                );
                0
            });

        // The hour is read from the first two characters of `HH:MM`.
        let hour = leading_chars(&receipt.purchase_time, 2)
            .and_then(|hour| i64::from_str(hour).ok())
            .unwrap_or_else(|| {
                debug!(
                    "Unparsable purchase time {:?}, using hour 0",
                    receipt.purchase_time
                );
                0
            });

        let item_prices = receipt
            .items
            .iter()
            .map(|item| {
                parse_decimal(&item.price).unwrap_or_else(|| {
                    debug!("Error parsing price {:?}, using 0", item.price);
                    Decimal::ZERO
                })
            })
            .collect();

        Self {
            total,
            day_of_month,
            hour,
            item_prices,
        }
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    // `Decimal` accepts `_` digit separators, amounts must not.
    if s.contains('_') {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

fn is_non_finite(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf")
        || unsigned.eq_ignore_ascii_case("infinity")
        || s.eq_ignore_ascii_case("nan")
}

fn leading_chars(s: &str, n: usize) -> Option<&str> {
    let end = s
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(s.len()))
        .nth(n)?;
    Some(&s[..end])
}

fn trailing_chars(s: &str, n: usize) -> Option<&str> {
    let count = s.chars().count();
    if count < n {
        return None;
    }
    let start = s
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(s.len()))
        .nth(count - n)?;
    Some(&s[start..])
}
