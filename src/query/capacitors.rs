//! Capacitor value space: the E12 series from 1 pF to 820 uF.

use super::{Descriptors, SEARCH_SCOPES};
use crate::units::{format_magnitude, pow10, Dimension, Quantity, QuantityError, UnitTable};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::ops::RangeInclusive;

pub const PRIMARY_SORT: &str = "Capacitors";

pub const CATEGORIES: [&str; 3] = [
    "Multilayer Ceramic Capacitors MLCC - SMD/SMT",
    "Aluminum Electrolytic Capacitors - SMD",
    "Tantalum Capacitors",
];

/// Farad exponents: 1 pF .. 100 uF multipliers.
pub const DECADES: RangeInclusive<i32> = -12..=-4;

pub const E12: [Decimal; 12] = [
    dec!(1.0),
    dec!(1.2),
    dec!(1.5),
    dec!(1.8),
    dec!(2.2),
    dec!(2.7),
    dec!(3.3),
    dec!(3.9),
    dec!(4.7),
    dec!(5.6),
    dec!(6.8),
    dec!(8.2),
];

pub const CANONICAL_UNIT: &str = "uF";

/// Keyword for a capacitance in farads. Catalog listings spell micro as `u`.
pub fn keyword(units: &UnitTable, farads: Decimal) -> Result<String, QuantityError> {
    let farad = units
        .base(Dimension::Capacitance)
        .ok_or_else(|| QuantityError::UnknownUnit("farad".to_string()))?;

    let q = units.compact(Quantity::new(farads, farad));
    Ok(format!("{}{}", format_magnitude(q.magnitude), q.unit.ascii_symbol()))
}

pub fn keywords(units: &UnitTable) -> Result<Vec<String>, QuantityError> {
    let mut keywords = Vec::with_capacity(E12.len() * DECADES.count());

    for value in E12 {
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
        Some(units.parse_unit(CANONICAL_UNIT)?),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword() {
        let units = UnitTable::standard();
        assert_eq!(keyword(&units, dec!(1.0) * pow10(-12)).unwrap(), "1pF");
        assert_eq!(keyword(&units, dec!(1.0) * pow10(-7)).unwrap(), "100nF");
        assert_eq!(keyword(&units, dec!(4.7) * pow10(-6)).unwrap(), "4.7uF");
        assert_eq!(keyword(&units, dec!(8.2) * pow10(-4)).unwrap(), "820uF");
        assert_eq!(keyword(&units, dec!(2.2) * pow10(-11)).unwrap(), "22pF");
    }

    #[test]
    fn test_keywords() {
        let units = UnitTable::standard();
        let keywords = keywords(&units).unwrap();
        assert_eq!(keywords.len(), 12 * 9);
        assert_eq!(keywords[0], "1pF");
        assert_eq!(keywords.last().unwrap(), "820uF");
        assert!(keywords.iter().all(|k| k.is_ascii()));

        let unique: std::collections::HashSet<_> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
    }

    #[test]
    fn test_keywords_reparse_exactly() {
        let units = UnitTable::standard();
        let uf = units.parse_unit(CANONICAL_UNIT).unwrap();

        let expected = E12.iter().flat_map(|v| DECADES.map(move |exp| *v * pow10(exp + 6)));
        for (keyword, microfarads) in keywords(&units).unwrap().iter().zip(expected) {
            let parsed = units.parse(keyword).unwrap().to(uf).unwrap();
            assert_eq!(parsed.magnitude, microfarads.normalize(), "{}", keyword);
        }
    }

    #[test]
    fn test_descriptors() {
        let units = UnitTable::standard();
        let descriptors: Vec<_> = descriptors(&units).unwrap().collect();
        assert_eq!(descriptors.len(), 108 * 3 * 2);
        assert_eq!(descriptors[0].secondary_sort, CATEGORIES[0]);
        assert_eq!(descriptors[5].secondary_sort, CATEGORIES[2]);
        assert_eq!(descriptors[6].keyword, "10pF");
        assert_eq!(descriptors[0].canonical_unit.unwrap().name(), "microfarad");
    }
}
