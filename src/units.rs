//! Exact-decimal physical quantities with SI prefixes.
//!
//! The [`UnitTable`] is built once at startup and handed to both the query
//! generators and the crawler. All arithmetic goes through `rust_decimal`, so a
//! keyword such as `9.76mΩ` maps to exactly `0.00976` ohms.

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Errors raised while parsing or converting a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("empty quantity")]
    Empty,

    #[error("invalid number in {0:?}")]
    InvalidNumber(String),

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    #[error("cannot convert {from} to {to}")]
    Incompatible { from: String, to: String },
}

/// Physical dimension of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Resistance,
    Inductance,
    Capacitance,
}

/// An SI prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    /// Power of ten this prefix scales by
    pub exponent: i32,
    /// Display symbol (`μ` for micro)
    pub symbol: &'static str,
    /// ASCII-only symbol (`u` for micro)
    pub ascii: &'static str,
    /// Long name used in unit names (`micro`)
    pub name: &'static str,
    aliases: &'static [&'static str],
}

impl Prefix {
    const fn new(exponent: i32, symbol: &'static str, name: &'static str) -> Self {
        Self { exponent, symbol, ascii: symbol, name, aliases: &[] }
    }

    fn spellings(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        [self.symbol, self.ascii, self.name]
            .into_iter()
            .chain(aliases.iter().copied())
            .filter(|s| !s.is_empty())
    }
}

const UNITY: Prefix = Prefix::new(0, "", "");

const PREFIXES: [Prefix; 10] = [
    Prefix::new(12, "T", "tera"),
    Prefix::new(9, "G", "giga"),
    Prefix::new(6, "M", "mega"),
    Prefix::new(3, "k", "kilo"),
    UNITY,
    Prefix::new(-3, "m", "milli"),
    Prefix { exponent: -6, symbol: "μ", ascii: "u", name: "micro", aliases: &["µ"] },
    Prefix::new(-9, "n", "nano"),
    Prefix::new(-12, "p", "pico"),
    Prefix::new(-15, "f", "femto"),
];

/// An unprefixed unit such as the ohm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseUnit {
    pub dimension: Dimension,
    pub symbol: &'static str,
    pub name: &'static str,
    aliases: &'static [&'static str],
}

impl BaseUnit {
    fn is_spelled(&self, text: &str) -> bool {
        self.symbol == text || self.name == text || self.aliases.contains(&text)
    }
}

const BASES: [BaseUnit; 3] = [
    BaseUnit {
        dimension: Dimension::Resistance,
        symbol: "Ω",
        name: "ohm",
        aliases: &["\u{2126}", "Ohm", "ohms"],
    },
    BaseUnit { dimension: Dimension::Inductance, symbol: "H", name: "henry", aliases: &[] },
    BaseUnit { dimension: Dimension::Capacitance, symbol: "F", name: "farad", aliases: &[] },
];

/// A prefixed unit, e.g. `kΩ` or `uH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub prefix: Prefix,
    pub base: BaseUnit,
}

impl Unit {
    pub fn new(prefix: Prefix, base: BaseUnit) -> Self {
        Self { prefix, base }
    }

    pub fn dimension(&self) -> Dimension {
        self.base.dimension
    }

    /// Short symbol, e.g. `μΩ`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.prefix.symbol, self.base.symbol)
    }

    /// Short symbol restricted to ASCII prefixes, e.g. `uF`.
    pub fn ascii_symbol(&self) -> String {
        format!("{}{}", self.prefix.ascii, self.base.symbol)
    }

    /// Long name, e.g. `microhenry`.
    pub fn name(&self) -> String {
        format!("{}{}", self.prefix.name, self.base.name)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A magnitude paired with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    pub magnitude: Decimal,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: Decimal, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Magnitude expressed in the unprefixed base unit.
    pub fn base_magnitude(&self) -> Decimal {
        self.magnitude * pow10(self.unit.prefix.exponent)
    }

    /// Converts to another unit of the same dimension.
    pub fn to(&self, target: Unit) -> Result<Quantity, QuantityError> {
        if self.unit.dimension() != target.dimension() {
            return Err(QuantityError::Incompatible {
                from: self.unit.name(),
                to: target.name(),
            });
        }

        let shift = self.unit.prefix.exponent - target.prefix.exponent;
        Ok(Quantity::new((self.magnitude * pow10(shift)).normalize(), target))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_magnitude(self.magnitude), self.unit.symbol())
    }
}

/// Immutable table of known prefixes and base units.
#[derive(Debug, Clone)]
pub struct UnitTable {
    /// Sorted by descending exponent
    prefixes: Vec<Prefix>,
    bases: Vec<BaseUnit>,
}

impl UnitTable {
    /// Builds the table of prefixes and units used for electronic components.
    pub fn standard() -> Self {
        let mut prefixes = PREFIXES.to_vec();
        prefixes.sort_by(|a, b| b.exponent.cmp(&a.exponent));

        Self { prefixes, bases: BASES.to_vec() }
    }

    /// Returns the unprefixed unit for a dimension.
    pub fn base(&self, dimension: Dimension) -> Option<Unit> {
        self.bases.iter().find(|b| b.dimension == dimension).map(|b| Unit::new(UNITY, *b))
    }

    /// Parses a unit string such as `kΩ`, `uH`, `ohm` or `microhenry`.
    pub fn parse_unit(&self, text: &str) -> Result<Unit, QuantityError> {
        let text = text.trim();

        if let Some(base) = self.bases.iter().find(|b| b.is_spelled(text)) {
            return Ok(Unit::new(UNITY, *base));
        }

        for prefix in &self.prefixes {
            for spelling in prefix.spellings() {
                let Some(rest) = text.strip_prefix(spelling) else {
                    continue;
                };
                if let Some(base) = self.bases.iter().find(|b| b.is_spelled(rest)) {
                    return Ok(Unit::new(*prefix, *base));
                }
            }
        }

        Err(QuantityError::UnknownUnit(text.to_string()))
    }

    /// Parses a quantity such as `4.7kΩ` or `220 uH`.
    pub fn parse(&self, text: &str) -> Result<Quantity, QuantityError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QuantityError::Empty);
        }

        let split = text
            .find(|c: char| !c.is_ascii_digit() && !matches!(c, '.' | '-' | '+'))
            .unwrap_or(text.len());
        let (number, unit) = text.split_at(split);

        if number.is_empty() {
            return Err(QuantityError::InvalidNumber(text.to_string()));
        }

        let magnitude: Decimal =
            number.parse().map_err(|_| QuantityError::InvalidNumber(number.to_string()))?;

        Ok(Quantity::new(magnitude, self.parse_unit(unit)?))
    }

    /// Rescales to the prefix that puts the magnitude in `[1, 1000)`.
    pub fn compact(&self, quantity: Quantity) -> Quantity {
        let value = quantity.base_magnitude();
        let abs = value.abs();

        let prefix = if abs.is_zero() {
            UNITY
        } else {
            self.prefixes
                .iter()
                .find(|p| abs >= pow10(p.exponent))
                .or(self.prefixes.last())
                .copied()
                .unwrap_or(UNITY)
        };

        Quantity::new(
            (value * pow10(-prefix.exponent)).normalize(),
            Unit::new(prefix, quantity.unit.base),
        )
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Exact power of ten.
pub fn pow10(exp: i32) -> Decimal {
    if exp >= 0 {
        Decimal::from_i128_with_scale(10i128.pow(exp as u32), 0)
    } else {
        Decimal::new(1, (-exp) as u32)
    }
}

/// Formats a magnitude without trailing zeros; integral values print bare.
pub fn format_magnitude(value: Decimal) -> String {
    value.normalize().to_string()
}
