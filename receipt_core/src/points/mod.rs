// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Points engine
//!
//! A receipt is worth the sum of seven independent [`Rule`] contributions.
//! Scoring is pure: no state, no I/O, and the same receipt always yields the
//! same points. A field that fails to parse never aborts the computation, the
//! rule that reads it sees the zero value instead (see [`ScoringFields`]).
//!
//! ## Example
//!
//! ```rust
//! use receipt_core::{points, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_owned(),
//!     purchase_date: "2022-03-20".to_owned(),
//!     purchase_time: "14:33".to_owned(),
//!     total: "9.00".to_owned(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//! };
//!
//! assert_eq!(points::score(&receipt), 109);
//! ```

use std::{fmt, ops::Range};

use rust_decimal::{prelude::ToPrimitive, Decimal};
use strum::IntoEnumIterator;

mod fields;

pub use fields::ScoringFields;

use crate::Receipt;

const ROUND_TOTAL_SUFFIX: &str = ".00";
const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
/// Purchases from 2:00pm up to (not including) 4:00pm.
const AFTERNOON_HOURS: Range<i64> = 14..16;
const RULE_COUNT: usize = <Rule as strum::EnumCount>::COUNT;

/// The scoring rules. Each one contributes a non-negative number of points.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    /// One point for every ASCII letter or digit in the retailer name.
    RetailerName,
    /// 50 points if the total ends in `.00`.
    RoundTotal,
    /// 25 points if the total is a multiple of `0.25`. An infinite or NaN total
    /// never is.
    QuarterMultiple,
    /// 5 points for every two items.
    ItemPairs,
    /// `ceil(price * 0.2)` for every item whose trimmed description length is a
    /// multiple of 3. An empty description counts.
    DescriptionLength,
    /// 6 points if the day of the purchase date is odd.
    OddDay,
    /// 10 points if the purchase hour is 14 or 15.
    AfternoonPurchase,
}

impl Rule {
    /// Points this rule awards to `receipt`.
    pub fn contribution(self, receipt: &Receipt, fields: &ScoringFields) -> u64 {
        match self {
            Rule::RetailerName => receipt
                .retailer
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .count() as u64,
            Rule::RoundTotal => {
                if receipt.total.ends_with(ROUND_TOTAL_SUFFIX) {
                    ROUND_TOTAL_POINTS
                } else {
                    0
                }
            }
            Rule::QuarterMultiple => {
                if fields
                    .total
                    .is_some_and(|total| (total % Decimal::new(25, 2)).is_zero())
                {
                    QUARTER_MULTIPLE_POINTS
                } else {
                    0
                }
            }
            Rule::ItemPairs => (receipt.items.len() / 2) as u64 * ITEM_PAIR_POINTS,
            Rule::DescriptionLength => receipt
                .items
                .iter()
                .zip(&fields.item_prices)
                .filter(|(item, _)| item.short_description.trim().len() % 3 == 0)
                .map(|(_, price)| description_bonus(*price))
                .fold(0u64, u64::saturating_add),
            Rule::OddDay => {
                if fields.day_of_month % 2 != 0 {
                    ODD_DAY_POINTS
                } else {
                    0
                }
            }
            Rule::AfternoonPurchase => {
                if AFTERNOON_HOURS.contains(&fields.hour) {
                    AFTERNOON_POINTS
                } else {
                    0
                }
            }
        }
    }
}

/// `ceil(price * 0.2)`, never below zero and saturating at `u64::MAX`.
fn description_bonus(price: Decimal) -> u64 {
    let bonus = (price * Decimal::new(2, 1)).ceil();
    // Prices in (-5, 0) round up to a negative zero.
    if bonus.is_zero() || bonus.is_sign_negative() {
        return 0;
    }
    bonus.to_u64().unwrap_or(u64::MAX)
}

/// Points awarded by every [`Rule`] to a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    contributions: [u64; RULE_COUNT],
}

impl PointsBreakdown {
    pub fn get(&self, rule: Rule) -> u64 {
        self.contributions[rule as usize]
    }

    /// Iterates over `(rule, points)` pairs in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, u64)> + '_ {
        Rule::iter().map(|rule| (rule, self.get(rule)))
    }

    /// Sum of all contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.contributions
            .iter()
            .fold(0u64, |acc, points| acc.saturating_add(*points))
    }
}

impl fmt::Display for PointsBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rule, points) in self.iter() {
            write!(f, "{rule}={points} ")?;
        }
        write!(f, "total={}", self.total())
    }
}

/// Computes the contribution of every rule for `receipt`.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let fields = ScoringFields::parse(receipt);
    let mut breakdown = PointsBreakdown::default();
    for rule in Rule::iter() {
        breakdown.contributions[rule as usize] = rule.contribution(receipt, &fields);
    }
    breakdown
}

/// Total points awarded to `receipt`.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}
