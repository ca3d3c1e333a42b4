//! Paginated fetch, filter and normalize loop.

use crate::catalog::{CatalogSearch, SearchRequest, DEFAULT_PAGE_SIZE};
use crate::error::{CrawlError, Result};
use crate::filters::FilterChainBuilder;
use crate::output::{OutputRecord, RecordSink};
use crate::progress::Progress;
use crate::query::SearchDescriptor;
use crate::units::{Quantity, UnitTable};
use tracing::{debug, info};

/// Counters for one crawl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub descriptors: u64,
    pub pages: u64,
    pub accepted: u64,
    pub skipped: u64,
}

/// Drives descriptors through the catalog one page at a time.
///
/// Requests are strictly sequential: descriptors in the order given, pages in
/// increasing order starting at 1 for each descriptor.
pub struct Crawler<'a, C: CatalogSearch + ?Sized> {
    client: &'a C,
    units: &'a UnitTable,
    page_size: u32,
    min_stock: u64,
}

impl<'a, C: CatalogSearch + ?Sized> Crawler<'a, C> {
    pub fn new(client: &'a C, units: &'a UnitTable) -> Self {
        Self { client, units, page_size: DEFAULT_PAGE_SIZE, min_stock: 0 }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn min_stock(mut self, min_stock: u64) -> Self {
        self.min_stock = min_stock;
        self
    }

    /// The descriptor's keyword expressed in its canonical unit, if it has one.
    pub fn target_quantity(&self, descriptor: &SearchDescriptor) -> Result<Option<Quantity>> {
        let Some(unit) = descriptor.canonical_unit else {
            return Ok(None);
        };

        self.units
            .parse(&descriptor.keyword)
            .and_then(|q| q.to(unit))
            .map(Some)
            .map_err(|source| CrawlError::QuantityParse {
                keyword: descriptor.keyword.clone(),
                unit: unit.name(),
                source,
            })
    }

    /// Crawls every descriptor, writing accepted items to `sink` as they arrive.
    ///
    /// Any transport, schema or write failure aborts the whole crawl.
    pub async fn crawl<I, S>(
        &self,
        descriptors: I,
        progress: &mut Progress,
        sink: &mut S,
    ) -> Result<CrawlStats>
    where
        I: IntoIterator<Item = SearchDescriptor>,
        S: RecordSink + ?Sized,
    {
        let mut stats = CrawlStats::default();

        for descriptor in descriptors {
            self.crawl_descriptor(&descriptor, progress, sink, &mut stats).await?;
            stats.descriptors += 1;
        }

        info!(
            "Crawled {} descriptors over {} pages: {} accepted, {} skipped",
            stats.descriptors, stats.pages, stats.accepted, stats.skipped
        );

        Ok(stats)
    }

    async fn crawl_descriptor<S: RecordSink + ?Sized>(
        &self,
        descriptor: &SearchDescriptor,
        progress: &mut Progress,
        sink: &mut S,
        stats: &mut CrawlStats,
    ) -> Result<()> {
        let target = self.target_quantity(descriptor)?;
        let filters =
            FilterChainBuilder::new().keyword(&descriptor.keyword)?.min_stock(self.min_stock).build();

        debug!("Crawling {}", descriptor);
        if !filters.is_empty() {
            debug!("Active filters: {}", filters.descriptions().join(", "));
        }
        progress.set_message(descriptor.to_string());

        let mut page = 1;
        loop {
            let request = SearchRequest::for_descriptor(descriptor, page, self.page_size);
            let response = self.client.search(&request).await?;
            progress.advance();
            stats.pages += 1;

            let Some(info) = response.into_page()? else {
                debug!("No page info for {} page {}, stopping", descriptor, page);
                break;
            };

            if page == 1 {
                debug!("{} reports {} pages ({} parts)", descriptor, info.pages, info.total);
                progress.extend(u64::from(info.pages));
            }

            if info.is_exhausted() {
                debug!("{} exhausted after {} pages", descriptor, page - 1);
                break;
            }

            for item in info.list {
                if let Some(reason) = filters.rejection(&item) {
                    debug!("skipping {}; fails {}", item.erp_component_name, reason);
                    stats.skipped += 1;
                    continue;
                }
                sink.write(OutputRecord::new(item, target.as_ref()))?;
                stats.accepted += 1;
            }

            page += 1;
        }

        Ok(())
    }
}
