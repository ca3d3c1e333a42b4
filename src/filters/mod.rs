//! Catalog item filtering with composable filters.

pub mod keyword;
pub mod stock;

use crate::catalog::CatalogItem;

pub use keyword::KeywordFilter;
pub use stock::StockFilter;

/// Trait for filtering catalog items.
pub trait Filter: Send + Sync {
    /// Returns true if the item passes the filter.
    fn matches(&self, item: &CatalogItem) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if an item passes all filters.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.filters.iter().all(|f| f.matches(item))
    }

    /// Describes the first filter the item fails, if any.
    pub fn rejection(&self, item: &CatalogItem) -> Option<String> {
        self.filters.iter().find(|f| !f.matches(item)).map(|f| f.description())
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the chain applied to one descriptor's results.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a keyword-boundary filter. An empty keyword adds nothing.
    pub fn keyword(mut self, keyword: &str) -> Result<Self, regex::Error> {
        if !keyword.is_empty() {
            self.chain.add(KeywordFilter::new(keyword)?);
        }
        Ok(self)
    }

    /// Adds a minimum stock filter. Zero adds nothing.
    pub fn min_stock(mut self, min: u64) -> Self {
        if min > 0 {
            self.chain.add(StockFilter::new(min));
        }
        self
    }

    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
