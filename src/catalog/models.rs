//! Request and response models for the JLCPCB component search API.

use crate::error::{CrawlError, Result};
use crate::query::SearchDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// API status code for a successful search.
const CODE_OK: i64 = 200;

/// Catalog partition a search is restricted to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LibraryScope {
    /// Every part, basic and extended
    #[default]
    #[serde(rename = "")]
    Unrestricted,
    /// Basic parts only (no feeder loading fee)
    #[serde(rename = "base")]
    Basic,
    /// Extended parts only
    #[serde(rename = "expand")]
    Expand,
}

impl LibraryScope {
    /// Returns the value sent as `componentLibraryType`.
    pub fn as_wire(&self) -> &'static str {
        match self {
            LibraryScope::Unrestricted => "",
            LibraryScope::Basic => "base",
            LibraryScope::Expand => "expand",
        }
    }
}

impl fmt::Display for LibraryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryScope::Unrestricted => write!(f, "any"),
            other => f.write_str(other.as_wire()),
        }
    }
}

/// Body of a component search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub current_page: u32,
    pub page_size: u32,
    pub keyword: String,
    pub first_sort_name: String,
    pub second_sort_name: String,
    pub search_source: String,
    pub component_attributes: Vec<serde_json::Value>,
    pub stock_flag: bool,
    pub component_library_type: LibraryScope,
    pub stock_sort: bool,
}

impl SearchRequest {
    /// Builds the request for one page of a descriptor, with the fixed search-mode flags.
    pub fn for_descriptor(descriptor: &SearchDescriptor, page: u32, page_size: u32) -> Self {
        Self {
            current_page: page,
            page_size,
            keyword: descriptor.keyword.clone(),
            first_sort_name: descriptor.primary_sort.clone(),
            second_sort_name: descriptor.secondary_sort.clone(),
            search_source: "search".to_string(),
            component_attributes: Vec::new(),
            stock_flag: true,
            component_library_type: descriptor.library_scope,
            stock_sort: true,
        }
    }
}

/// Top-level search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub code: i64,
    /// Required on success; error responses usually send `null`
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl SearchResponse {
    /// Returns the page payload, failing if the API reported an error code.
    ///
    /// A successful response without `data` is malformed, not an empty result.
    pub fn into_page(self) -> Result<Option<PageInfo>> {
        if self.code != CODE_OK {
            let message = match self.message {
                Some(serde_json::Value::String(s)) => s,
                Some(other) => other.to_string(),
                None => String::new(),
            };
            return Err(CrawlError::Api { code: self.code, message });
        }

        let data = self.data.ok_or_else(|| {
            CrawlError::Schema(<serde_json::Error as serde::de::Error>::missing_field("data"))
        })?;

        Ok(data.component_page_info)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    #[serde(default)]
    pub component_page_info: Option<PageInfo>,
}

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page_num: u32,
    /// Total number of pages for this search
    pub pages: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub has_next_page: bool,
    pub list: Vec<CatalogItem>,
}

impl PageInfo {
    /// True when this page marks the end of the result set.
    pub fn is_exhausted(&self) -> bool {
        self.pages == 0 || self.list.is_empty()
    }
}

/// A component row as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// LCSC part number, e.g. `C25905`
    pub component_code: String,
    #[serde(default)]
    pub component_id: Option<i64>,
    pub component_model_en: String,
    pub component_specification_en: String,
    pub stock_count: u64,
    /// Descriptive name the keyword filter runs against
    pub erp_component_name: String,
    pub component_type_en: String,
    pub component_library_type: String,
    #[serde(default)]
    pub component_brand_en: Option<String>,
    #[serde(default)]
    pub describe: Option<String>,
    #[serde(default)]
    pub data_manual_url: Option<String>,
}

impl CatalogItem {
    /// Datasheet link, ignoring blank values.
    pub fn datasheet(&self) -> Option<&str> {
        self.data_manual_url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_json(code: &str, name: &str) -> serde_json::Value {
        json!({
            "componentCode": code,
            "componentId": 1234,
            "componentModelEn": "0603WAF4701T5E",
            "componentSpecificationEn": "0603",
            "stockCount": 1500,
            "erpComponentName": name,
            "componentTypeEn": "Chip Resistor - Surface Mount",
            "componentLibraryType": "base",
            "componentBrandEn": "UNI-ROYAL(Uniroyal Elec)",
            "dataManualUrl": "https://example.com/ds.pdf",
            "componentPrices": [{"startNumber": 1, "endNumber": 9, "productPrice": 0.002}]
        })
    }

    #[test]
    fn test_library_scope_wire_values() {
        assert_eq!(serde_json::to_string(&LibraryScope::Unrestricted).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&LibraryScope::Basic).unwrap(), "\"base\"");
        assert_eq!(serde_json::to_string(&LibraryScope::Expand).unwrap(), "\"expand\"");
        assert_eq!(LibraryScope::Basic.as_wire(), "base");
        assert_eq!(LibraryScope::Unrestricted.to_string(), "any");
        assert_eq!(LibraryScope::default(), LibraryScope::Unrestricted);
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let descriptor = SearchDescriptor {
            primary_sort: "Resistors".to_string(),
            secondary_sort: "Chip Resistor - Surface Mount".to_string(),
            library_scope: LibraryScope::Basic,
            keyword: "4.7kΩ".to_string(),
            canonical_unit: None,
        };

        let request = SearchRequest::for_descriptor(&descriptor, 3, 25);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["currentPage"], 3);
        assert_eq!(value["pageSize"], 25);
        assert_eq!(value["keyword"], "4.7kΩ");
        assert_eq!(value["firstSortName"], "Resistors");
        assert_eq!(value["secondSortName"], "Chip Resistor - Surface Mount");
        assert_eq!(value["searchSource"], "search");
        assert_eq!(value["componentAttributes"], json!([]));
        assert_eq!(value["stockFlag"], true);
        assert_eq!(value["componentLibraryType"], "base");
        assert_eq!(value["stockSort"], true);
    }

    #[test]
    fn test_response_decodes_page() {
        let body = json!({
            "code": 200,
            "message": null,
            "data": {
                "componentPageInfo": {
                    "pageNum": 1,
                    "pages": 4,
                    "total": 80,
                    "hasNextPage": true,
                    "list": [item_json("C23162", "4.7kΩ ±1% 100mW 0603")]
                },
                "sortAndCountVoList": null
            }
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let page = response.into_page().unwrap().unwrap();
        assert_eq!(page.page_num, 1);
        assert_eq!(page.pages, 4);
        assert!(page.has_next_page);
        assert!(!page.is_exhausted());
        assert_eq!(page.list.len(), 1);
        assert_eq!(page.list[0].component_code, "C23162");
        assert_eq!(page.list[0].stock_count, 1500);
        assert_eq!(page.list[0].datasheet(), Some("https://example.com/ds.pdf"));
    }

    #[test]
    fn test_response_without_page_info() {
        let response: SearchResponse =
            serde_json::from_value(json!({"code": 200, "data": {"componentPageInfo": null}}))
                .unwrap();
        assert!(response.into_page().unwrap().is_none());
    }

    #[test]
    fn test_success_without_data_is_schema_error() {
        for body in [json!({"code": 200, "data": null}), json!({"code": 200})] {
            let response: SearchResponse = serde_json::from_value(body.clone()).unwrap();
            let err = response.into_page().unwrap_err();
            assert!(matches!(err, CrawlError::Schema(_)), "{} gave {:?}", body, err);
            assert!(err.to_string().contains("missing field `data`"));
        }
    }

    #[test]
    fn test_response_error_code() {
        let response: SearchResponse =
            serde_json::from_value(json!({"code": 500, "data": null, "message": "busy"})).unwrap();
        let err = response.into_page().unwrap_err();
        assert!(matches!(err, CrawlError::Api { code: 500, ref message } if message == "busy"));
    }

    #[test]
    fn test_item_missing_code_is_rejected() {
        let mut item = item_json("C1", "x");
        item.as_object_mut().unwrap().remove("componentCode");
        assert!(serde_json::from_value::<CatalogItem>(item).is_err());

        let item = item_json("C1", "x");
        let mut with_null = item.clone();
        with_null["componentCode"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<CatalogItem>(with_null).is_err());
    }

    #[test]
    fn test_exhausted_page() {
        let page: PageInfo =
            serde_json::from_value(json!({"pageNum": 4, "pages": 3, "list": []})).unwrap();
        assert!(page.is_exhausted());

        let page: PageInfo =
            serde_json::from_value(json!({"pageNum": 1, "pages": 0, "list": [item_json("C1", "x")]}))
                .unwrap();
        assert!(page.is_exhausted());
    }

    #[test]
    fn test_blank_datasheet() {
        let mut item: CatalogItem = serde_json::from_value(item_json("C1", "x")).unwrap();
        item.data_manual_url = Some("  ".to_string());
        assert!(item.datasheet().is_none());
        item.data_manual_url = None;
        assert!(item.datasheet().is_none());
    }
}
