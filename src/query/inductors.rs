//! Inductor value space.
//!
//! Unlike resistors the keywords are not rescaled: `1000nH` and `1uH` are both
//! searched, because listings use either spelling.

use super::{Descriptors, SEARCH_SCOPES};
use crate::units::{format_magnitude, pow10, QuantityError, UnitTable};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::ops::RangeInclusive;

pub const PRIMARY_SORT: &str = "Inductors/Coils/Transformers";

pub const CATEGORIES: [&str; 2] = ["Inductors (SMD)", "Power Inductors"];

#[rustfmt::skip]
pub const BASE_VALUES: [Decimal; 25] = [
    dec!(1), dec!(1.1), dec!(1.2), dec!(1.3), dec!(1.5), dec!(1.6), dec!(1.8), dec!(2),
    dec!(2.2), dec!(2.4), dec!(2.7), dec!(3), dec!(3.3), dec!(3.6), dec!(3.9), dec!(4.3),
    dec!(4.7), dec!(5.1), dec!(5.6), dec!(6.2), dec!(6.8), dec!(7.5), dec!(8.2), dec!(8.7),
    dec!(9.1),
];

/// Multipliers ×1 .. ×1000.
pub const DECADES: RangeInclusive<i32> = 0..=3;

pub const UNITS: [&str; 2] = ["nH", "uH"];

pub const CANONICAL_UNIT: &str = "uH";

pub fn keyword(value: Decimal, exponent: i32, unit: &str) -> String {
    format!("{}{}", format_magnitude(value * pow10(exponent)), unit)
}

/// Value-major, then unit, then multiplier.
pub fn keywords() -> Vec<String> {
    let mut keywords = Vec::with_capacity(BASE_VALUES.len() * UNITS.len() * DECADES.count());

    for value in BASE_VALUES {
        for unit in UNITS {
            for exp in DECADES {
                keywords.push(keyword(value, exp, unit));
            }
        }
    }

    keywords
}

pub fn descriptors(units: &UnitTable) -> Result<Descriptors, QuantityError> {
    Ok(Descriptors::new(
        PRIMARY_SORT,
        CATEGORIES.to_vec(),
        SEARCH_SCOPES.to_vec(),
        keywords(),
        Some(units.parse_unit(CANONICAL_UNIT)?),
    ))
}
