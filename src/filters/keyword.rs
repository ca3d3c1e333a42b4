//! Keyword-boundary matching on the catalog display name.

use super::Filter;
use crate::catalog::CatalogItem;
use regex::Regex;

/// Accepts items whose display name contains the keyword as a whole value.
///
/// The keyword may not be preceded by a word character or `.`, nor followed by
/// a word character or `-`. This keeps `4.7kΩ` from matching inside `44.7kΩ`
/// or `4.7kΩA`.
pub struct KeywordFilter {
    keyword: String,
    pattern: Regex,
}

impl KeywordFilter {
    pub fn new(keyword: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"(?:^|[^\w.]){}(?:$|[^\w-])",
            regex::escape(keyword)
        ))?;

        Ok(Self { keyword: keyword.to_string(), pattern })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl Filter for KeywordFilter {
    fn matches(&self, item: &CatalogItem) -> bool {
        self.pattern.is_match(&item.erp_component_name)
    }

    fn description(&self) -> String {
        format!("Name contains: {}", self.keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::tests::make_item;

    fn matches(keyword: &str, name: &str) -> bool {
        KeywordFilter::new(keyword).unwrap().matches(&make_item("C1", name, 1))
    }

    #[test]
    fn test_whole_value_match() {
        assert!(matches("4.7kΩ", "4.7kΩ Resistor"));
        assert!(matches("4.7kΩ", "4.7kΩ"));
        assert!(matches("4.7kΩ", "0603 4.7kΩ ±1%"));
        assert!(matches("4.7kΩ", "Resistor(4.7kΩ)"));
    }

    #[test]
    fn test_rejects_longer_values() {
        assert!(!matches("4.7kΩ", "44.7kΩ Resistor"));
        assert!(!matches("4.7kΩ", "4.7kΩA"));
        assert!(!matches("4.7kΩ", "14.7kΩ"));
        assert!(!matches("4.7kΩ", "0.4.7kΩ"));
        assert!(!matches("10kΩ", "100kΩ ±1%"));
    }

    #[test]
    fn test_hyphen_suffix_rejected() {
        assert!(!matches("1uH", "1uH-2uH"));
        assert!(matches("1uH", "1uH ±20%"));
    }

    #[test]
    fn test_keyword_is_literal() {
        // `.` must not behave as a wildcard
        assert!(!matches("4.7kΩ", "497kΩ"));
        assert!(matches("1+1Ω", "1+1Ω"));
    }

    #[test]
    fn test_description() {
        let filter = KeywordFilter::new("220uH").unwrap();
        assert_eq!(filter.keyword(), "220uH");
        assert_eq!(filter.description(), "Name contains: 220uH");
    }
}
