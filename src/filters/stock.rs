//! Stock count filtering.

use super::Filter;
use crate::catalog::CatalogItem;

/// Filters items by minimum stock on hand.
pub struct StockFilter {
    min: u64,
}

impl StockFilter {
    pub fn new(min: u64) -> Self {
        Self { min }
    }
}

impl Filter for StockFilter {
    fn matches(&self, item: &CatalogItem) -> bool {
        item.stock_count >= self.min
    }

    fn description(&self) -> String {
        format!("Stock >= {}", self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::tests::make_item;

    #[test]
    fn test_min_stock() {
        let filter = StockFilter::new(100);
        assert!(filter.matches(&make_item("C1", "x", 100)));
        assert!(filter.matches(&make_item("C1", "x", 5000)));
        assert!(!filter.matches(&make_item("C1", "x", 99)));
        assert!(!filter.matches(&make_item("C1", "x", 0)));
    }

    #[test]
    fn test_description() {
        assert_eq!(StockFilter::new(10).description(), "Stock >= 10");
    }
}
