//! Resistor value space: the E96 1% series across eleven decades.

use super::{Descriptors, SEARCH_SCOPES};
use crate::units::{pow10, Dimension, Quantity, QuantityError, UnitTable};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::ops::RangeInclusive;

pub const PRIMARY_SORT: &str = "Resistors";

pub const CATEGORIES: [&str; 1] = ["Chip Resistor - Surface Mount"];

/// Decade exponents applied to each base value (0.1 mΩ .. 1 MΩ multipliers).
pub const DECADES: RangeInclusive<i32> = -4..=6;

/// E96 base values.
#[rustfmt::skip]
pub const E96: [Decimal; 96] = [
    dec!(10.0), dec!(10.2), dec!(10.5), dec!(10.7), dec!(11.0), dec!(11.3), dec!(11.5), dec!(11.8),
    dec!(12.1), dec!(12.4), dec!(12.7), dec!(13.0), dec!(13.3), dec!(13.7), dec!(14.0), dec!(14.3),
    dec!(14.7), dec!(15.0), dec!(15.4), dec!(15.8), dec!(16.2), dec!(16.5), dec!(16.9), dec!(17.4),
    dec!(17.8), dec!(18.2), dec!(18.7), dec!(19.1), dec!(19.6), dec!(20.0), dec!(20.5), dec!(21.0),
    dec!(21.5), dec!(22.1), dec!(22.6), dec!(23.2), dec!(23.7), dec!(24.3), dec!(24.9), dec!(25.5),
    dec!(26.1), dec!(26.7), dec!(27.4), dec!(28.0), dec!(28.7), dec!(29.4), dec!(30.1), dec!(30.9),
    dec!(31.6), dec!(32.4), dec!(33.2), dec!(34.0), dec!(34.8), dec!(35.7), dec!(36.5), dec!(37.4),
    dec!(38.3), dec!(39.2), dec!(40.2), dec!(41.2), dec!(42.2), dec!(43.2), dec!(44.2), dec!(45.3),
    dec!(46.4), dec!(47.5), dec!(48.7), dec!(49.9), dec!(51.1), dec!(52.3), dec!(53.6), dec!(54.9),
    dec!(56.2), dec!(57.6), dec!(59.0), dec!(60.4), dec!(61.9), dec!(63.4), dec!(64.9), dec!(66.5),
    dec!(68.1), dec!(69.8), dec!(71.5), dec!(73.2), dec!(75.0), dec!(76.8), dec!(78.7), dec!(80.6),
    dec!(82.5), dec!(84.5), dec!(86.6), dec!(88.7), dec!(90.9), dec!(93.1), dec!(95.3), dec!(97.6),
];

/// Keyword for one resistance in ohms, compacted to the nearest SI prefix.
pub fn keyword(units: &UnitTable, ohms: Decimal) -> Result<String, QuantityError> {
    let ohm = units
        .base(Dimension::Resistance)
        .ok_or_else(|| QuantityError::UnknownUnit("ohm".to_string()))?;

    Ok(units.compact(Quantity::new(ohms, ohm)).to_string())
}

/// Every E96 value in every decade, value-major.
pub fn keywords(units: &UnitTable) -> Result<Vec<String>, QuantityError> {
    let mut keywords = Vec::with_capacity(E96.len() * DECADES.count());

    for value in E96 {
        for exp in DECADES {
            keywords.push(keyword(units, value * pow10(exp))?);
        }
    }

    Ok(keywords)
}

pub fn descriptors(units: &UnitTable) -> Result<Descriptors, QuantityError> {
    Ok(Descriptors::new(
        PRIMARY_SORT,
        CATEGORIES.to_vec(),
        SEARCH_SCOPES.to_vec(),
        keywords(units)?,
        Some(units.parse_unit("ohm")?),
    ))
}
