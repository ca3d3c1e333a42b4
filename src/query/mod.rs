//! Search descriptor generation for each component family.
//!
//! Every family expands to a deterministic cross product of keyword, category
//! and library scope. [`Descriptors`] walks that product lazily, so a crawl never
//! materializes more than one descriptor at a time.

pub mod capacitors;
pub mod inductors;
pub mod resistors;

use crate::catalog::LibraryScope;
use crate::units::{QuantityError, Unit, UnitTable};
use std::fmt;

/// Scopes searched for every standard-value family.
pub const SEARCH_SCOPES: [LibraryScope; 2] = [LibraryScope::Unrestricted, LibraryScope::Basic];

/// One unit of search work.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDescriptor {
    pub primary_sort: String,
    pub secondary_sort: String,
    pub library_scope: LibraryScope,
    pub keyword: String,
    /// Unit the keyword is normalized to for sortable output
    pub canonical_unit: Option<Unit>,
}

impl fmt::Display for SearchDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = if self.keyword.is_empty() { "*" } else { &self.keyword };
        write!(f, "{}", keyword)?;
        if !self.secondary_sort.is_empty() {
            write!(f, " {}", self.secondary_sort)?;
        }
        write!(f, " [{}]", self.library_scope)
    }
}

/// Lazy, finite, single-pass sequence of descriptors.
///
/// Order is keyword-major, then category, then scope.
#[derive(Debug, Clone)]
pub struct Descriptors {
    primary_sort: &'static str,
    secondary_sorts: Vec<&'static str>,
    scopes: Vec<LibraryScope>,
    keywords: Vec<String>,
    canonical_unit: Option<Unit>,
    position: usize,
}

impl Descriptors {
    pub fn new(
        primary_sort: &'static str,
        secondary_sorts: Vec<&'static str>,
        scopes: Vec<LibraryScope>,
        keywords: Vec<String>,
        canonical_unit: Option<Unit>,
    ) -> Self {
        Self { primary_sort, secondary_sorts, scopes, keywords, canonical_unit, position: 0 }
    }

    /// A single unfiltered search over a whole catalog partition.
    pub fn partition(scope: LibraryScope) -> Self {
        Self::new("", vec![""], vec![scope], vec![String::new()], None)
    }

    fn total(&self) -> usize {
        self.keywords.len() * self.secondary_sorts.len() * self.scopes.len()
    }
}

impl Iterator for Descriptors {
    type Item = SearchDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.total() {
            return None;
        }

        let per_keyword = self.secondary_sorts.len() * self.scopes.len();
        let keyword = &self.keywords[self.position / per_keyword];
        let rest = self.position % per_keyword;
        let secondary_sort = self.secondary_sorts[rest / self.scopes.len()];
        let library_scope = self.scopes[rest % self.scopes.len()];

        self.position += 1;

        Some(SearchDescriptor {
            primary_sort: self.primary_sort.to_string(),
            secondary_sort: secondary_sort.to_string(),
            library_scope,
            keyword: keyword.clone(),
            canonical_unit: self.canonical_unit,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Descriptors {}

/// What to crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentFamily {
    Resistors,
    Capacitors,
    Inductors,
    /// Every basic part, unfiltered
    BaseParts,
    /// Every extended part, unfiltered
    ExpandParts,
}

impl ComponentFamily {
    /// Standard-value families.
    pub const STANDARD: [ComponentFamily; 3] =
        [ComponentFamily::Resistors, ComponentFamily::Capacitors, ComponentFamily::Inductors];

    /// Whole-partition dumps.
    pub const PARTITIONS: [ComponentFamily; 2] =
        [ComponentFamily::BaseParts, ComponentFamily::ExpandParts];

    /// Builds the descriptor sequence for this family.
    pub fn descriptors(self, units: &UnitTable) -> Result<Descriptors, QuantityError> {
        match self {
            ComponentFamily::Resistors => resistors::descriptors(units),
            ComponentFamily::Capacitors => capacitors::descriptors(units),
            ComponentFamily::Inductors => inductors::descriptors(units),
            ComponentFamily::BaseParts => Ok(Descriptors::partition(LibraryScope::Basic)),
            ComponentFamily::ExpandParts => Ok(Descriptors::partition(LibraryScope::Expand)),
        }
    }

    /// Whole-partition dumps are a single unfiltered search.
    pub fn is_partition(self) -> bool {
        Self::PARTITIONS.contains(&self)
    }

    /// Fixed output file name.
    pub fn output_file(self) -> &'static str {
        match self {
            ComponentFamily::Resistors => "resistors.csv",
            ComponentFamily::Capacitors => "capacitors.csv",
            ComponentFamily::Inductors => "inductors.csv",
            ComponentFamily::BaseParts => "baseparts.csv",
            ComponentFamily::ExpandParts => "expandparts.csv",
        }
    }
}

impl fmt::Display for ComponentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentFamily::Resistors => write!(f, "resistors"),
            ComponentFamily::Capacitors => write!(f, "capacitors"),
            ComponentFamily::Inductors => write!(f, "inductors"),
            ComponentFamily::BaseParts => write!(f, "basic parts"),
            ComponentFamily::ExpandParts => write!(f, "expand parts"),
        }
    }
}
