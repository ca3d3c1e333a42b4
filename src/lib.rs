//! jlc-parts - Crawl the JLCPCB component catalog into CSV files
//!
//! Searches standard-value resistors, capacitors and inductors (or whole
//! catalog partitions), keeps the parts whose name carries the searched value,
//! and writes them out with a sortable value in the family's canonical unit.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod crawler;
pub mod error;
pub mod filters;
pub mod output;
pub mod progress;
pub mod query;
pub mod units;

pub use catalog::{CatalogClient, CatalogItem, CatalogSearch, LibraryScope};
pub use config::Config;
pub use crawler::{CrawlStats, Crawler};
pub use error::CrawlError;
pub use output::{CsvSink, Dedup, OutputRecord, RecordSink};
pub use progress::Progress;
pub use query::{ComponentFamily, Descriptors, SearchDescriptor};
pub use units::{Quantity, QuantityError, Unit, UnitTable};
