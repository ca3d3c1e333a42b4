//! JLCPCB catalog API: HTTP client and wire models.

pub mod client;
pub mod models;

pub use client::{CatalogClient, CatalogSearch};
pub use models::{CatalogItem, LibraryScope, PageInfo, SearchRequest, SearchResponse};

/// Component search endpoint.
pub const SEARCH_URL: &str =
    "https://jlcpcb.com/api/overseas-pcb-order/v1/shoppingCart/smtGood/selectSmtComponentList";

/// Items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 25;
